//! Cache descriptor

// Imports
use {
	crate::error::Error,
	std::{fmt, str::FromStr},
};

/// Kind of cache-like structure being modeled
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum CacheKind {
	/// Data cache
	Data,

	/// Directory
	Directory,
}

impl CacheKind {
	/// Returns the name of the template component this kind's
	/// parameters are injected into
	pub fn input_component(self) -> &'static str {
		match self {
			Self::Data => "L20",
			Self::Directory => "L1Directory0",
		}
	}

	/// Returns the header the estimator prints for this kind's block
	/// in its report
	pub fn report_component(self) -> &'static str {
		match self {
			Self::Data => "L2",
			Self::Directory => "First Level Directory",
		}
	}
}

impl FromStr for CacheKind {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"data" => Ok(Self::Data),
			"directory" => Ok(Self::Directory),
			kind => Err(Error::UnrecognizedCacheType { kind: kind.to_owned() }),
		}
	}
}

impl fmt::Display for CacheKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Data => write!(f, "data"),
			Self::Directory => write!(f, "directory"),
		}
	}
}

/// Statistics and geometry of one cache-like structure, as collected by
/// the simulator.
///
/// Built once at the boundary and passed by value into the pipeline;
/// never mutated.
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct CacheDescriptor {
	/// Cache kind
	pub kind: CacheKind,

	/// Cache size (in bytes)
	pub size: u64,

	/// Block size (in bytes)
	pub block_size: u64,

	/// Associativity
	pub associativity: u64,

	/// Access delay (in cycles)
	pub delay: u64,

	/// Clock frequency (in GHz)
	pub frequency_ghz: f64,

	/// Technology node (in nm)
	pub technology_node: u32,

	/// Read accesses
	pub read_accesses: u64,

	/// Write accesses
	pub write_accesses: u64,

	/// Read misses
	pub read_misses: u64,

	/// Write misses
	pub write_misses: u64,

	/// Total cycles
	pub total_cycles: u64,

	/// Run suffix, namespacing this run's intermediate files so that
	/// concurrent runs don't collide
	pub suffix: String,
}

impl CacheDescriptor {
	/// Returns the clock rate string the template expects (GHz converted
	/// to the template's MHz unit, truncated to an integer)
	pub fn clock_rate(&self) -> String {
		format!("{}", (self.frequency_ghz * 1000.0) as u64)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kind_parses_exactly() {
		assert_eq!("data".parse::<CacheKind>().expect("Should parse"), CacheKind::Data);
		assert_eq!(
			"directory".parse::<CacheKind>().expect("Should parse"),
			CacheKind::Directory
		);

		let err = "Data".parse::<CacheKind>().expect_err("Should fail");
		assert!(matches!(err, Error::UnrecognizedCacheType { kind } if kind == "Data"));
	}

	#[test]
	fn kind_display_roundtrips() {
		for kind in [CacheKind::Data, CacheKind::Directory] {
			assert_eq!(kind.to_string().parse::<CacheKind>().expect("Should parse"), kind);
		}
	}
}
