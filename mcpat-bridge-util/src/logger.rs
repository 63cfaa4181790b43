//! Logger

// Imports
use {
	std::{fs, io, path::Path, sync::Mutex},
	tracing_subscriber::prelude::*,
};

/// Messages recorded before the subscriber is installed
static PRE_INIT_MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());

/// Logging before [`init`] is called
pub mod pre_init {
	/// Records a debug message, deferring it until the logger is initialized
	pub fn debug(msg: String) {
		super::PRE_INIT_MESSAGES
			.lock()
			.expect("Pre-init messages were poisoned")
			.push(msg);
	}
}

/// Initializes the logger.
///
/// Logs to stderr, filtered by `RUST_LOG`.
/// If `log_file` is given, additionally performs verbose logging to it,
/// filtered by `RUST_LOG_FILE`.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	let stderr_layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_filter(self::env_filter("RUST_LOG", "info"));

	let file_layer = log_file.and_then(|path| {
		let file = fs::OpenOptions::new()
			.create(true)
			.write(true)
			.append(log_file_append)
			.truncate(!log_file_append)
			.open(path);
		match file {
			Ok(file) => Some(
				tracing_subscriber::fmt::layer()
					.with_writer(Mutex::new(file))
					.with_ansi(false)
					.with_filter(self::env_filter("RUST_LOG_FILE", "debug")),
			),
			Err(err) => {
				eprintln!("Unable to open log file {path:?}: {err}");
				None
			},
		}
	});

	tracing_subscriber::registry()
		.with(stderr_layer)
		.with(file_layer)
		.init();

	// Emit anything recorded before we got here
	for msg in PRE_INIT_MESSAGES
		.lock()
		.expect("Pre-init messages were poisoned")
		.drain(..)
	{
		tracing::debug!(target: "pre_init", "{msg}");
	}
}

/// Returns the filter from env variable `var`, falling back to `default`
fn env_filter(var: &str, default: &str) -> tracing_subscriber::EnvFilter {
	tracing_subscriber::EnvFilter::try_from_env(var)
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
}
