//! McPAT cache bridge (`mcpat-bridge`)

// Modules
mod args;

// Imports
use {
	self::args::Args,
	clap::Parser,
	mcpat_bridge::{pipeline, CacheDescriptor, CacheKind, Error},
	mcpat_bridge_util::logger,
	std::process,
};

fn main() {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Run the pipeline, mapping each fatal condition to its exit code
	if let Err(err) = self::run(args) {
		eprintln!("ERROR: {err}");
		process::exit(err.exit_code());
	}
}

fn run(args: Args) -> Result<(), Error> {
	// Build the descriptor and pipeline config from the arguments
	let kind = args.ty.parse::<CacheKind>()?;
	let descriptor = CacheDescriptor {
		kind,
		size: args.size,
		block_size: args.block_size,
		associativity: args.associativity,
		delay: args.delay,
		frequency_ghz: args.frequency,
		technology_node: args.technology_node,
		read_accesses: args.read_accesses,
		write_accesses: args.write_accesses,
		read_misses: args.read_misses,
		write_misses: args.write_misses,
		total_cycles: args.total_cycles,
		suffix: args.suffix,
	};
	let config = pipeline::Config {
		mcpat_home: args.mcpat_home,
		template_file: args.input_file,
		output_file: args.output_file,
	};

	// Run the pipeline
	let metrics = pipeline::run(&config, &descriptor)?;
	tracing::info!(?metrics, "Wrote extracted metrics");

	Ok(())
}
