use std::slice;

const MIN_CAPACITY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
	pub to: i64,
	pub from: i64,
	pub weight: i64,
}

impl Edge {
	pub fn new(to: i64, from: i64, weight: i64) -> Edge {
		Edge { to, from, weight }
	}
}

/// Append-only edge buffer. Capacity starts at `max(2, 2 * initial_length)`
/// and doubles whenever a push finds the buffer full.
#[derive(Debug, Clone)]
pub struct EdgeList {
	edges: Vec<Edge>,
	capacity: usize,
}

impl EdgeList {
	pub fn new() -> EdgeList {
		EdgeList::with_length(0)
	}

	pub fn with_length(initial_length: usize) -> EdgeList {
		let capacity = (initial_length * 2).max(MIN_CAPACITY);
		EdgeList {
			edges: Vec::with_capacity(capacity),
			capacity,
		}
	}

	pub fn push(&mut self, edge: Edge) {
		if self.edges.len() == self.capacity {
			self.capacity *= 2;
			let additional = self.capacity - self.edges.len();
			self.edges.reserve_exact(additional);
			trace!("edge list grown to capacity {}", self.capacity);
		}
		self.edges.push(edge);
	}

	pub fn len(&self) -> usize {
		self.edges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}

	/// Logical capacity following the doubling policy; the backing `Vec`
	/// may hold more.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn get(&self, index: usize) -> Option<&Edge> {
		self.edges.get(index)
	}

	/// Panics if `index >= len()`.
	pub fn at(&self, index: usize) -> Edge {
		match self.edges.get(index) {
			Some(edge) => *edge,
			None => panic!("edge index {} out of bounds for edge list of length {}",
				index, self.edges.len()),
		}
	}

	pub fn iter(&self) -> slice::Iter<Edge> {
		self.edges.iter()
	}

	pub fn as_slice(&self) -> &[Edge] {
		&self.edges
	}

	/// Stable sort by ascending weight; equal weights keep insertion order.
	pub fn sort_by_weight(&mut self) {
		self.edges.sort_by_key(|e| e.weight);
	}
}

impl Default for EdgeList {
	fn default() -> EdgeList {
		EdgeList::new()
	}
}

impl<'a> IntoIterator for &'a EdgeList {
	type Item = &'a Edge;
	type IntoIter = slice::Iter<'a, Edge>;

	fn into_iter(self) -> slice::Iter<'a, Edge> {
		self.edges.iter()
	}
}

impl Extend<Edge> for EdgeList {
	fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
		for edge in iter {
			self.push(edge);
		}
	}
}

impl std::iter::FromIterator<Edge> for EdgeList {
	fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> EdgeList {
		let mut list = EdgeList::new();
		list.extend(iter);
		list
	}
}
