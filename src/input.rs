use std::io::Read;
use std::str;

use crate::edge::{Edge, EdgeList};
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct GraphInput {
	pub vertex_count: usize,
	pub edges: EdgeList,
}

/// Reads a vertex count followed by `to from weight` triples, all
/// whitespace-separated. Edge reading stops quietly at end of input, at a
/// trailing partial triple, or at the first token that is not an integer.
/// Bytes that are not UTF-8 only make their own token malformed.
pub fn parse_graph<R: Read>(mut reader: R) -> Result<GraphInput> {
	let mut bytes = Vec::new();
	reader.read_to_end(&mut bytes)?;
	parse_graph_bytes(&bytes)
}

pub fn parse_graph_str(text: &str) -> Result<GraphInput> {
	parse_graph_bytes(text.as_bytes())
}

// A token counts only if all of it is an integer, so `6x` is malformed as a
// whole. scanf would still take the leading `6` and stop after that triple.
fn parse_token(tok: &[u8]) -> Option<i64> {
	str::from_utf8(tok).ok()?.parse::<i64>().ok()
}

pub fn parse_graph_bytes(bytes: &[u8]) -> Result<GraphInput> {
	let mut tokens = bytes.split(|b| b.is_ascii_whitespace())
		.filter(|tok| !tok.is_empty())
		.enumerate();

	let vertex_count = match tokens.next() {
		None => {
			info!("empty input");
			return Ok(GraphInput { vertex_count: 0, edges: EdgeList::new() });
		},
		Some((_, tok)) => match parse_token(tok) {
			Some(n) if n < 0 => return Err(Error::NegativeVertexCount(n)),
			Some(n) => n as usize,
			None => {
				warn!("vertex count {:?} is not an integer, reading no edges",
					String::from_utf8_lossy(tok));
				return Ok(GraphInput { vertex_count: 0, edges: EdgeList::new() });
			},
		},
	};

	let mut edges = EdgeList::new();
	'triples: loop {
		let mut fields = [0i64; 3];
		for (k, field) in fields.iter_mut().enumerate() {
			match tokens.next() {
				None => {
					if k > 0 {
						warn!("ignoring trailing partial edge of {} value(s)", k);
					}
					break 'triples;
				},
				Some((pos, tok)) => match parse_token(tok) {
					Some(v) => *field = v,
					None => {
						warn!("stopped reading edges at token {} ({:?})",
							pos, String::from_utf8_lossy(tok));
						break 'triples;
					},
				},
			}
		}
		edges.push(Edge::new(fields[0], fields[1], fields[2]));
	}

	info!("read {} vertices and {} edges", vertex_count, edges.len());
	Ok(GraphInput { vertex_count, edges })
}
