//! Parameter injection.
//!
//! Writes the descriptor's statistics and geometry into the template
//! document, exactly the attribute set the estimator reads for the
//! modeled structure.

// Imports
use {
	crate::{
		descriptor::{CacheDescriptor, CacheKind},
		document::{ComponentMut, Document},
		error::Error,
	},
	itertools::Itertools,
};

/// Buffer slot count, replicated over the 4 buffer-size fields
const BUFFER_SIZE: u64 = 8;

/// Fixed 3-port descriptor (1 read, 1 write, 1 read-write)
const PORTS: &str = "1,1,1";

/// Injects `descriptor` into `doc`.
///
/// The model assumes the structure is continuously busy, so busy cycles
/// are set to the total cycle count and idle cycles to 0.
pub fn apply(descriptor: &CacheDescriptor, doc: &mut Document) -> Result<(), Error> {
	let clock_rate = descriptor.clock_rate();

	// Common attributes
	let mut core = self::component_mut(doc, "core0")?;
	core.set_value("clock_rate", &clock_rate)?;

	let mut system = self::component_mut(doc, "system")?;
	system.set_value("core_tech_node", &descriptor.technology_node.to_string())?;
	system.set_value("total_cycles", &descriptor.total_cycles.to_string())?;
	system.set_value("idle_cycles", "0")?;
	system.set_value("busy_cycles", &descriptor.total_cycles.to_string())?;

	// Type-specific attributes
	let buffer_sizes = [BUFFER_SIZE; 4].iter().join(",");
	let mut component = self::component_mut(doc, descriptor.kind.input_component())?;
	match descriptor.kind {
		CacheKind::Directory => {
			let dir_config = [
				descriptor.size,
				descriptor.block_size,
				descriptor.associativity,
				1,
				1,
				descriptor.delay,
			]
			.iter()
			.join(",");

			component.set_value("Directory_type", "1")?;
			component.set_value("Dir_config", &dir_config)?;
			component.set_value("buffer_sizes", &buffer_sizes)?;
			component.set_value("clockrate", &clock_rate)?;
			component.set_value("ports", PORTS)?;
		},
		CacheKind::Data => {
			let cache_config = [
				descriptor.size,
				descriptor.block_size,
				descriptor.associativity,
				1,
				1,
				descriptor.delay,
				descriptor.block_size,
				1,
			]
			.iter()
			.join(",");

			component.set_value("L2_config", &cache_config)?;
			component.set_value("buffer_sizes", &buffer_sizes)?;
			component.set_value("clockrate", &clock_rate)?;
			component.set_value("ports", PORTS)?;
		},
	}

	// Access/miss counters
	component.set_value("read_accesses", &descriptor.read_accesses.to_string())?;
	component.set_value("write_accesses", &descriptor.write_accesses.to_string())?;
	component.set_value("read_misses", &descriptor.read_misses.to_string())?;
	component.set_value("write_misses", &descriptor.write_misses.to_string())?;

	tracing::debug!(kind = %descriptor.kind, %clock_rate, "Injected descriptor into template");
	Ok(())
}

/// Returns the component named `name`, failing if the template doesn't
/// have it
fn component_mut<'a>(doc: &'a mut Document, name: &str) -> Result<ComponentMut<'a>, Error> {
	doc.component_mut(name)
		.ok_or_else(|| Error::MissingComponent { name: name.to_owned() })
}
