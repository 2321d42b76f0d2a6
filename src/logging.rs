use std::env;
use std::io;
use std::str::FromStr;

use log::{LevelFilter, SetLoggerError};
use simplelog::{CombinedLogger, ConfigBuilder, WriteLogger};

pub const LOG_LEVEL_VAR: &str = "KRUSKAL_LOG";
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parses a level name such as `info` or `TRACE`; unset, empty and unknown
/// values give `DEFAULT_LEVEL`.
pub fn level_from(value: Option<&str>) -> (LevelFilter, Option<String>) {
	match value.map(str::trim) {
		None | Some("") => (DEFAULT_LEVEL, None),
		Some(v) => match LevelFilter::from_str(v) {
			Ok(level) => (level, None),
			Err(_) => (DEFAULT_LEVEL, Some(v.to_string())),
		},
	}
}

/// Logs go to stderr so stdout carries only the result.
pub fn init() -> Result<(), SetLoggerError> {
	let var = env::var(LOG_LEVEL_VAR).ok();
	let (level, rejected) = level_from(var.as_deref());
	let config = ConfigBuilder::new()
		.set_time_level(LevelFilter::Off)
		.build();
	CombinedLogger::init(vec![WriteLogger::new(level, config, io::stderr())])?;
	if let Some(v) = rejected {
		warn!("unknown {} value {:?}, using {}", LOG_LEVEL_VAR, v, DEFAULT_LEVEL);
	}
	Ok(())
}
