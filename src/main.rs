#[macro_use] extern crate log;
extern crate kruskal;

use std::io::{stdin, stdout, Write};
use std::fmt::Display;
use std::process;

use log::Level;

fn run() -> kruskal::Result<i64> {
	let graph = kruskal::parse_graph(stdin().lock())?;
	let forest = kruskal::minimum_spanning_forest(graph.vertex_count, graph.edges)?;
	debug!("{}", forest.to_json());
	Ok(forest.total_weight)
}

// Through the logger when it prints errors, plain stderr otherwise.
fn report<E: Display>(e: E) -> ! {
	if log_enabled!(Level::Error) {
		error!("{}", e);
	} else {
		eprintln!("kruskal: {}", e);
	}
	process::exit(1);
}

fn main() {
	if let Err(e) = kruskal::logging::init() {
		eprintln!("logger setup failed: {}", e);
	}

	match run() {
		Ok(total) => {
			let out = stdout();
			let mut out = out.lock();
			if let Err(e) = writeln!(out, "{}", total).and_then(|_| out.flush()) {
				report(format!("failed to write result: {}", e));
			}
		},
		Err(e) => {
			debug!("{:?}", e);
			report(e);
		},
	}
}
