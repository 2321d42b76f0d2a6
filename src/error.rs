use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to read input: {0}")]
	Io(#[from] io::Error),
	#[error("vertex count must not be negative, got {0}")]
	NegativeVertexCount(i64),
	#[error("edge {edge}: endpoint {endpoint} is outside [0, {vertex_count})")]
	EndpointOutOfRange {
		edge: usize,
		endpoint: i64,
		vertex_count: usize,
	},
	#[error("total weight overflowed at sorted edge {edge}")]
	WeightOverflow { edge: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
