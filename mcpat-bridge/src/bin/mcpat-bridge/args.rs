//! Arguments

// Imports
use std::path::PathBuf;

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
pub struct Args {
	/// Log file
	///
	/// Specifies a file to perform verbose logging to.
	/// You can use `RUST_LOG_FILE` to set filtering options
	#[clap(long = "log-file")]
	pub log_file: Option<PathBuf>,

	/// Whether to append to the log file
	#[clap(long = "log-file-append")]
	pub log_file_append: bool,

	/// Suffix namespacing this run's intermediate and output files
	#[clap(long = "suffix", default_value = "")]
	pub suffix: String,

	/// Cache type (data, directory)
	#[clap(long = "type")]
	pub ty: String,

	/// Technology node (in nm)
	#[clap(long = "technology-node")]
	pub technology_node: u32,

	/// Cache size (in bytes)
	#[clap(long = "size")]
	pub size: u64,

	/// Block size (in bytes)
	#[clap(long = "blocksize")]
	pub block_size: u64,

	/// Associativity
	#[clap(long = "associativity")]
	pub associativity: u64,

	/// Cache delay (in cycles)
	#[clap(long = "delay")]
	pub delay: u64,

	/// Frequency (in GHz)
	#[clap(long = "frequency")]
	pub frequency: f64,

	/// McPAT installation directory
	#[clap(long = "mcpat-home")]
	pub mcpat_home: PathBuf,

	/// Template McPAT input file
	#[clap(long = "input-file")]
	pub input_file: PathBuf,

	/// Output file base name
	#[clap(long = "output-file")]
	pub output_file: PathBuf,

	/// Number of read accesses
	#[clap(long = "read-accesses", default_value_t = 0)]
	pub read_accesses: u64,

	/// Number of write accesses
	#[clap(long = "write-accesses", default_value_t = 0)]
	pub write_accesses: u64,

	/// Number of read misses
	#[clap(long = "read-misses", default_value_t = 0)]
	pub read_misses: u64,

	/// Number of write misses
	#[clap(long = "write-misses", default_value_t = 0)]
	pub write_misses: u64,

	/// Total cycles
	#[clap(long = "total-cycles", default_value_t = 100000)]
	pub total_cycles: u64,
}
