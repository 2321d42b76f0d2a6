#[macro_use] extern crate log;
#[macro_use] extern crate serde_json;
extern crate simplelog;

mod disjoint_set;
mod edge;
mod error;
mod input;
mod kruskal;
pub mod logging;

pub use disjoint_set::DisjointSet;
pub use edge::{Edge, EdgeList};
pub use error::{Error, Result};
pub use input::{parse_graph, parse_graph_bytes, parse_graph_str, GraphInput};
pub use kruskal::{minimum_spanning_forest, minimum_spanning_weight, SpanningForest};
