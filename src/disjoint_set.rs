// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
/// Partition of `0..len()` into disjoint sets, with union by rank and full
/// path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	rank: Vec<usize>,
}

impl DisjointSet {
	/// `n` one-element sets, each its own root with rank 0.
	pub fn make_singletons(n: usize) -> DisjointSet {
		DisjointSet {
			parent: (0..n).collect(),
			rank: vec![0; n],
		}
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	/// Root of the set holding `x`. Every node on the walked path is
	/// re-pointed straight at the root.
	pub fn find(&mut self, x: usize) -> usize {
		let mut root = x;
		while self.parent[root] != root {
			root = self.parent[root];
		}

		let mut node = x;
		while self.parent[node] != root {
			let next = self.parent[node];
			self.parent[node] = root;
			node = next;
		}
		root
	}

	/// Merges the sets holding `x` and `y`. The root with the weakly larger
	/// rank absorbs the other, and on equal ranks `x`'s root wins and its rank
	/// grows by one. Returns false, changing nothing, if they already share a
	/// root.
	pub fn unite(&mut self, x: usize, y: usize) -> bool {
		let x_root = self.find(x);
		let y_root = self.find(y);
		if x_root == y_root {
			return false;
		}

		let (child, root) = if self.rank[y_root] <= self.rank[x_root] {
			(y_root, x_root)
		} else {
			(x_root, y_root)
		};
		if self.rank[child] == self.rank[root] {
			self.rank[root] += 1;
		}
		self.parent[child] = root;
		true
	}

	pub fn same(&mut self, x: usize, y: usize) -> bool {
		self.find(x) == self.find(y)
	}

	pub fn parent(&self, x: usize) -> usize {
		self.parent[x]
	}

	pub fn rank(&self, x: usize) -> usize {
		self.rank[x]
	}

	/// Number of parent hops from `x` to its root, without compressing.
	pub fn root_distance(&self, x: usize) -> usize {
		let mut hops = 0;
		let mut node = x;
		while self.parent[node] != node {
			node = self.parent[node];
			hops += 1;
		}
		hops
	}
}
