use serde_json::Value;

use crate::disjoint_set::DisjointSet;
use crate::edge::{Edge, EdgeList};
use crate::error::{Error, Result};

/// Minimum spanning tree, or minimum spanning forest when the graph is
/// disconnected. The two cases are not told apart.
#[derive(Debug, Clone)]
pub struct SpanningForest {
	pub vertex_count: usize,
	pub edges_considered: usize,
	/// Accepted edges in the order they were taken (ascending weight).
	pub edges: EdgeList,
	pub total_weight: i64,
}

impl SpanningForest {
	pub fn to_json(&self) -> Value {
		json!({
			"vertices": self.vertex_count,
			"edges_read": self.edges_considered,
			"edges_accepted": self.edges.len(),
			"total_weight": self.total_weight,
		})
	}
}

fn vertex_index(endpoint: i64, edge: usize, vertex_count: usize) -> Result<usize> {
	if endpoint >= 0 && (endpoint as u64) < vertex_count as u64 {
		Ok(endpoint as usize)
	} else {
		Err(Error::EndpointOutOfRange { edge, endpoint, vertex_count })
	}
}

/// Kruskal's algorithm. Edges are stably sorted by weight so ties are taken
/// in input order, then each edge joining two different components is kept.
pub fn minimum_spanning_forest(vertex_count: usize, mut edges: EdgeList) -> Result<SpanningForest> {
	for (i, e) in edges.iter().enumerate() {
		vertex_index(e.to, i, vertex_count)?;
		vertex_index(e.from, i, vertex_count)?;
	}

	edges.sort_by_weight();

	let mut ds = DisjointSet::make_singletons(vertex_count);
	let mut accepted = EdgeList::new();
	let mut total_weight: i64 = 0;
	for (i, e) in edges.iter().enumerate() {
		// endpoints were range-checked above
		let to = e.to as usize;
		let from = e.from as usize;
		if ds.find(to) != ds.find(from) {
			total_weight = total_weight.checked_add(e.weight)
				.ok_or(Error::WeightOverflow { edge: i })?;
			accepted.push(*e);
			ds.unite(to, from);
			debug!("accepted ({}, {}) weight {}, total {}", e.to, e.from, e.weight, total_weight);
		} else {
			trace!("skipped ({}, {}) weight {}: same component", e.to, e.from, e.weight);
		}
	}

	info!("kept {} of {} edges over {} vertices, total weight {}",
		accepted.len(), edges.len(), vertex_count, total_weight);

	Ok(SpanningForest {
		vertex_count,
		edges_considered: edges.len(),
		edges: accepted,
		total_weight,
	})
}

/// Convenience wrapper taking plain `(to, from, weight)` triples.
pub fn minimum_spanning_weight(vertex_count: usize, triples: &[(i64, i64, i64)]) -> Result<i64> {
	let edges: EdgeList = triples.iter()
		.map(|&(to, from, weight)| Edge::new(to, from, weight))
		.collect();
	minimum_spanning_forest(vertex_count, edges).map(|f| f.total_weight)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn accepted(forest: &SpanningForest) -> Vec<(i64, i64, i64)> {
		forest.edges.iter().map(|e| (e.to, e.from, e.weight)).collect()
	}

	#[test]
	fn four_vertex_fixture() {
		let triples = [(0, 1, 10), (1, 2, 5), (2, 3, 1), (0, 3, 8), (0, 2, 3)];
		let edges: EdgeList = triples.iter().map(|&(a, b, w)| Edge::new(a, b, w)).collect();
		let forest = minimum_spanning_forest(4, edges).unwrap();
		assert_eq!(forest.total_weight, 12);
		assert_eq!(accepted(&forest), vec![(2, 3, 1), (0, 2, 3), (0, 3, 8)]);
	}

	#[test]
	fn disconnected_graph_gives_forest_weight() {
		assert_eq!(minimum_spanning_weight(4, &[(0, 1, 2), (2, 3, 7)]).unwrap(), 9);
	}

	#[test]
	fn no_edges_weighs_zero() {
		let forest = minimum_spanning_forest(5, EdgeList::new()).unwrap();
		assert_eq!(forest.total_weight, 0);
		assert!(forest.edges.is_empty());
		assert_eq!(minimum_spanning_weight(0, &[]).unwrap(), 0);
	}

	#[test]
	fn self_loops_never_accepted() {
		assert_eq!(minimum_spanning_weight(2, &[(0, 0, 5), (0, 1, 9)]).unwrap(), 9);
		assert_eq!(minimum_spanning_weight(2, &[(0, 0, -5), (1, 1, -1), (0, 1, 9)]).unwrap(), 9);
		assert_eq!(minimum_spanning_weight(1, &[(0, 0, -100)]).unwrap(), 0);
	}

	#[test]
	fn negative_weights_and_parallel_edges() {
		let triples = [(0, 1, 4), (0, 1, -3), (1, 2, 0), (2, 0, -1), (1, 2, 6)];
		assert_eq!(minimum_spanning_weight(3, &triples).unwrap(), -4);
	}

	#[test]
	fn equal_weights_taken_in_input_order() {
		let triples = [(1, 2, 1), (0, 1, 1), (0, 2, 1)];
		let edges: EdgeList = triples.iter().map(|&(a, b, w)| Edge::new(a, b, w)).collect();
		let forest = minimum_spanning_forest(3, edges).unwrap();
		assert_eq!(accepted(&forest), vec![(1, 2, 1), (0, 1, 1)]);
	}

	#[test]
	fn endpoint_out_of_range_is_rejected() {
		match minimum_spanning_weight(3, &[(0, 1, 1), (1, 3, 2)]) {
			Err(Error::EndpointOutOfRange { edge, endpoint, vertex_count }) => {
				assert_eq!((edge, endpoint, vertex_count), (1, 3, 3));
			},
			other => panic!("unexpected result {:?}", other),
		}
		match minimum_spanning_weight(3, &[(-1, 1, 1)]) {
			Err(Error::EndpointOutOfRange { endpoint: -1, .. }) => {},
			other => panic!("unexpected result {:?}", other),
		}
	}

	#[test]
	fn total_weight_overflow_is_reported() {
		let triples = [(0, 1, i64::MAX), (1, 2, 1)];
		match minimum_spanning_weight(3, &triples) {
			Err(Error::WeightOverflow { .. }) => {},
			other => panic!("unexpected result {:?}", other),
		}
	}

	#[test]
	fn summary_json_fields() {
		let forest = minimum_spanning_forest(3, vec![Edge::new(0, 1, 2), Edge::new(0, 0, 1)]
			.into_iter().collect()).unwrap();
		let v = forest.to_json();
		assert_eq!(v["vertices"], 3);
		assert_eq!(v["edges_read"], 2);
		assert_eq!(v["edges_accepted"], 1);
		assert_eq!(v["total_weight"], 2);
	}
}
