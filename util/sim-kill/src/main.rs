//! Kills remote simulator processes.
//!
//! Reads the simulator host list from the `[process_map]` section of the
//! shared simulator config file, then sends each of the first `count`
//! hosts a one-shot kill command: connect, send a single control byte,
//! read the acknowledgement, close.

// Imports
use {
	anyhow::Context,
	clap::Parser,
	std::{
		fs,
		io::{Read, Write},
		net::TcpStream,
		path::PathBuf,
	},
};

/// Port the simulator's kill server listens on
const KILL_PORT: u16 = 1999;

/// Control byte requesting termination
const KILL_COMMAND: u8 = b'c';

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();

	// Read the host list
	let config = fs::read_to_string(&args.config_file).context("Unable to read config file")?;
	let hosts = self::process_map_hosts(&config);
	anyhow::ensure!(
		hosts.len() >= args.count,
		"Config file only lists {} hosts, cannot kill {}",
		hosts.len(),
		args.count
	);

	// Then kill each simulator
	for host in &hosts[..args.count] {
		let ack = self::kill_sim(host).with_context(|| format!("Unable to kill simulator on {host:?}"))?;
		println!("Received: {}", String::from_utf8_lossy(&ack));
	}

	Ok(())
}

/// Sends the kill command to `host`, returning its acknowledgement
fn kill_sim(host: &str) -> Result<Vec<u8>, anyhow::Error> {
	let mut stream = TcpStream::connect((host, KILL_PORT)).context("Unable to connect")?;
	stream.write_all(&[KILL_COMMAND]).context("Unable to send command")?;

	let mut ack = vec![0; 1024];
	let len = stream.read(&mut ack).context("Unable to read acknowledgement")?;
	ack.truncate(len);

	Ok(ack)
}

/// Extracts the hostnames listed in the config's `[process_map]` section.
///
/// The section holds `key = "host"` entries and ends at the first blank
/// line; the quoted part of each entry is the hostname.
fn process_map_hosts(config: &str) -> Vec<String> {
	let mut hosts = vec![];
	let mut in_section = false;
	for line in config.lines() {
		match in_section {
			false => in_section = line.trim() == "[process_map]",
			true => {
				if line.trim().is_empty() {
					break;
				}
				if let Some(host) = line.split('"').nth(1) {
					hosts.push(host.to_owned());
				}
			},
		}
	}

	hosts
}

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
struct Args {
	/// Number of simulators to kill
	pub count: usize,

	/// Shared simulator config file
	#[clap(long = "config", default_value = "carbon_sim.cfg")]
	pub config_file: PathBuf,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_process_map_section() {
		let config = "\
[general]
mcpat_home = \"/opt/mcpat\"

[process_map]
process0 = \"host0\"
process1 = \"host1\"

[other]
process2 = \"host2\"
";
		assert_eq!(self::process_map_hosts(config), ["host0", "host1"]);
	}

	#[test]
	fn missing_section_yields_no_hosts() {
		assert_eq!(self::process_map_hosts("[general]\nx = \"y\"\n"), Vec::<String>::new());
	}

	#[test]
	fn unquoted_lines_are_skipped() {
		let config = "[process_map]\n# comment\nprocess0 = \"host0\"\n";
		assert_eq!(self::process_map_hosts(config), ["host0"]);
	}
}
