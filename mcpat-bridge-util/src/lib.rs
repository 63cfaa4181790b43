//! Utilities

// Modules
pub mod logger;

// Imports
use std::{
	ffi::OsString,
	path::{Path, PathBuf},
};

/// Extension trait for [`Path`] to namespace a file name with a run suffix
#[extend::ext(name = PathSuffixed)]
pub impl Path {
	/// Returns this path with `.{suffix}` appended to the file name.
	///
	/// The suffix may be empty, in which case the path simply gains a
	/// trailing `.` (matching the namespacing scheme of intermediate
	/// files when no suffix is supplied).
	fn suffixed(&self, suffix: &str) -> PathBuf {
		let mut path = OsString::from(self.as_os_str());
		path.push(".");
		path.push(suffix);
		PathBuf::from(path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn suffixed_appends_suffix() {
		assert_eq!(Path::new(".mcpat.xml.input").suffixed("3"), Path::new(".mcpat.xml.input.3"));
		assert_eq!(Path::new("out/power").suffixed("L2-0"), Path::new("out/power.L2-0"));
	}

	#[test]
	fn suffixed_empty_suffix() {
		assert_eq!(Path::new(".mcpat.output").suffixed(""), Path::new(".mcpat.output."));
	}
}
