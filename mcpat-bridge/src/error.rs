//! Errors

// Imports
use std::{io, path::PathBuf, process::ExitStatus};

/// Fatal pipeline error.
///
/// Every failure in the pipeline is unrecoverable and maps to a stable
/// process exit code via [`Error::exit_code`]. The mapping is performed
/// once, at the top level of the binary; library code only propagates.
#[derive(Debug)]
#[derive(thiserror::Error)]
pub enum Error {
	/// Template file could not be read
	#[error("Unable to read template file ({}): {source}", path.display())]
	TemplateUnreadable { path: PathBuf, source: io::Error },

	/// Template file could not be parsed
	#[error("Unable to parse template file: {source}")]
	TemplateInvalid { source: xmltree::ParseError },

	/// A component the injector must write to was missing from the template
	#[error("Missing component ({name}) in template")]
	MissingComponent { name: String },

	/// An attribute name matched neither a param nor a stat of its component
	#[error("Unrecognized attribute name ({name})")]
	UnrecognizedAttribute { name: String },

	/// Cache type string wasn't `data` or `directory`
	#[error("Unrecognized cache type ({kind})")]
	UnrecognizedCacheType { kind: String },

	/// An intermediate file could not be written
	#[error("Unable to write intermediate file ({}): {source}", path.display())]
	IntermediateUnwritable { path: PathBuf, source: io::Error },

	/// The intermediate report could not be read back
	#[error("Unable to read intermediate report ({}): {source}", path.display())]
	ReportUnreadable { path: PathBuf, source: io::Error },

	/// The estimator executable wasn't found
	#[error(
		"Unable to find McPAT executable ({}). Make sure `--mcpat-home` points at a directory with a compiled \
		 `mcpat` binary",
		path.display()
	)]
	EstimatorMissing { path: PathBuf },

	/// The estimator could not be spawned
	#[error("Unable to run McPAT ({}): {source}", path.display())]
	EstimatorSpawn { path: PathBuf, source: io::Error },

	/// The estimator exited with a nonzero status
	#[error("McPAT exited unsuccessfully ({status})")]
	EstimatorFailed { status: ExitStatus },

	/// The output file could not be written
	#[error("Unable to write output file ({}): {source}", path.display())]
	OutputUnwritable { path: PathBuf, source: io::Error },

	/// An intermediate file could not be removed
	#[error("Unable to remove temporary file ({}): {source}", path.display())]
	CleanupFailed { path: PathBuf, source: io::Error },
}

impl Error {
	/// Returns the process exit code for this error
	pub fn exit_code(&self) -> i32 {
		match self {
			Self::EstimatorMissing { .. } => 1,
			Self::EstimatorSpawn { .. } | Self::EstimatorFailed { .. } => 2,
			Self::TemplateUnreadable { .. } | Self::TemplateInvalid { .. } | Self::OutputUnwritable { .. } => 3,
			Self::IntermediateUnwritable { .. } | Self::ReportUnreadable { .. } | Self::CleanupFailed { .. } => 4,
			Self::UnrecognizedCacheType { .. } => 5,
			Self::MissingComponent { .. } | Self::UnrecognizedAttribute { .. } => 6,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exit_codes_are_distinct_per_family() {
		let missing = Error::EstimatorMissing {
			path: PathBuf::from("/opt/mcpat/mcpat"),
		};
		let bad_type = Error::UnrecognizedCacheType {
			kind: "instruction".to_owned(),
		};
		let bad_attr = Error::UnrecognizedAttribute { name: "x".to_owned() };

		assert_eq!(missing.exit_code(), 1);
		assert_eq!(bad_type.exit_code(), 5);
		assert_eq!(bad_attr.exit_code(), 6);
	}
}
