//! Estimator invocation.
//!
//! Runs the McPAT binary as `mcpat -infile <input>`, with its report
//! captured into an intermediate file. The estimator is an opaque black
//! box: any nonzero exit is fatal, with no further distinction of its
//! internal validation failures.

// Imports
use {
	crate::error::Error,
	std::{fs, path::Path, process::Command},
};

/// Name of the estimator executable inside its installation directory
const EXECUTABLE: &str = "mcpat";

/// Runs the estimator over `input_path`, writing its report to
/// `report_path`.
///
/// Blocks until the estimator exits; no timeout is applied, so a hung
/// estimator hangs the pipeline.
pub fn run(mcpat_home: &Path, input_path: &Path, report_path: &Path) -> Result<(), Error> {
	let executable = mcpat_home.join(EXECUTABLE);
	if !executable.exists() {
		return Err(Error::EstimatorMissing { path: executable });
	}

	let report_file = fs::File::create(report_path).map_err(|source| Error::IntermediateUnwritable {
		path: report_path.to_path_buf(),
		source,
	})?;

	tracing::debug!(?executable, ?input_path, ?report_path, "Running estimator");
	let status = Command::new(&executable)
		.arg("-infile")
		.arg(input_path)
		.stdout(report_file)
		.status()
		.map_err(|source| Error::EstimatorSpawn {
			path: executable,
			source,
		})?;

	if !status.success() {
		return Err(Error::EstimatorFailed { status });
	}

	Ok(())
}
