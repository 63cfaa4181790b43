//! Pipeline driver.
//!
//! Sequences inject → invoke → extract for one cache-like structure and
//! manages the lifecycle of the two intermediate files. Every failure is
//! a broken installation or template, so nothing is retried; the first
//! error aborts the whole run.

// Imports
use {
	crate::{
		descriptor::CacheDescriptor,
		document::Document,
		error::Error,
		inject,
		invoke,
		report::{self, Metrics},
	},
	mcpat_bridge_util::PathSuffixed,
	std::{
		fs,
		path::{Path, PathBuf},
	},
};

/// Base name of the intermediate estimator input file
const INPUT_BASE: &str = ".mcpat.xml.input";

/// Base name of the intermediate estimator report file
const REPORT_BASE: &str = ".mcpat.output";

/// Pipeline configuration.
///
/// Built once at the boundary and passed by value; the pipeline holds no
/// other state.
#[derive(Clone, Debug)]
pub struct Config {
	/// McPAT installation directory
	pub mcpat_home: PathBuf,

	/// Template document file
	pub template_file: PathBuf,

	/// Output file base name (the run suffix is appended)
	pub output_file: PathBuf,
}

/// Runs the whole pipeline for `descriptor`, returning the extracted
/// metrics.
///
/// Intermediate files are namespaced by the descriptor's suffix, so
/// concurrent runs with distinct suffixes don't collide. On success the
/// intermediates are removed and the metrics have been written to
/// `<output_file>.<suffix>`; on error no output file is produced.
pub fn run(config: &Config, descriptor: &CacheDescriptor) -> Result<Metrics, Error> {
	let input_path = Path::new(INPUT_BASE).suffixed(&descriptor.suffix);
	let report_path = Path::new(REPORT_BASE).suffixed(&descriptor.suffix);

	// Build the estimator input
	let mut doc = Document::load(&config.template_file)?;
	inject::apply(descriptor, &mut doc)?;
	doc.write_to(&input_path)?;

	// Run the estimator over it
	invoke::run(&config.mcpat_home, &input_path, &report_path)?;

	// Extract the metrics from its report
	let report = fs::read_to_string(&report_path).map_err(|source| Error::ReportUnreadable {
		path: report_path.clone(),
		source,
	})?;
	let metrics = report::extract(descriptor.kind.report_component(), report.lines());
	tracing::debug!(?metrics, "Extracted metrics");

	// Write the output
	let output_path = config.output_file.suffixed(&descriptor.suffix);
	fs::write(&output_path, metrics.to_output()).map_err(|source| Error::OutputUnwritable {
		path: output_path,
		source,
	})?;

	// And remove the intermediates
	for path in [input_path, report_path] {
		fs::remove_file(&path).map_err(|source| Error::CleanupFailed { path, source })?;
	}

	Ok(metrics)
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
	use {
		super::*,
		crate::descriptor::CacheKind,
		std::{io::Write, os::unix::fs::PermissionsExt},
	};

	const TEMPLATE: &str = r#"
		<component id="root" name="root">
			<component id="system" name="system">
				<param name="core_tech_node" value="65"/>
				<stat name="total_cycles" value="0"/>
				<stat name="idle_cycles" value="0"/>
				<stat name="busy_cycles" value="0"/>
				<component id="system.core0" name="core0">
					<param name="clock_rate" value="1000"/>
				</component>
				<component id="system.L20" name="L20">
					<param name="L2_config" value=""/>
					<param name="buffer_sizes" value=""/>
					<param name="clockrate" value="1000"/>
					<param name="ports" value=""/>
					<stat name="read_accesses" value="0"/>
					<stat name="write_accesses" value="0"/>
					<stat name="read_misses" value="0"/>
					<stat name="write_misses" value="0"/>
				</component>
			</component>
		</component>
	"#;

	const STUB_REPORT: &str = "#!/bin/sh
cat <<EOF
McPAT results
L2
      Area = 1.23 mm^2
      Peak Dynamic = 0.45 W
      Subthreshold Leakage = 0.02 W
      Gate Leakage = 0.01 W
      Runtime Dynamic = 0.33 W
EOF
";

	/// Sets up a temp dir with the template and an `mcpat` stub running
	/// `script`, returning it along with the pipeline config
	fn setup(script: &str) -> (tempfile::TempDir, Config) {
		let dir = tempfile::tempdir().expect("Unable to create temp dir");

		let template_file = dir.path().join("template.xml");
		fs::write(&template_file, TEMPLATE).expect("Unable to write template");

		let stub = dir.path().join("mcpat");
		let mut file = fs::File::create(&stub).expect("Unable to create stub");
		file.write_all(script.as_bytes()).expect("Unable to write stub");
		fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).expect("Unable to make stub executable");

		let config = Config {
			mcpat_home: dir.path().to_path_buf(),
			template_file,
			output_file: dir.path().join("cache-power"),
		};
		(dir, config)
	}

	fn descriptor(suffix: &str) -> CacheDescriptor {
		CacheDescriptor {
			kind: CacheKind::Data,
			size: 32768,
			block_size: 64,
			associativity: 8,
			delay: 2,
			frequency_ghz: 2.0,
			technology_node: 45,
			read_accesses: 100,
			write_accesses: 50,
			read_misses: 10,
			write_misses: 5,
			total_cycles: 100000,
			suffix: suffix.to_owned(),
		}
	}

	#[test]
	fn end_to_end_writes_five_lines() {
		let (dir, config) = self::setup(STUB_REPORT);
		let descriptor = self::descriptor("e2e-ok");

		let metrics = self::run(&config, &descriptor).expect("Pipeline should succeed");
		assert_eq!(metrics.in_order(), [
			Some("1.23"),
			Some("0.45"),
			Some("0.02"),
			Some("0.01"),
			Some("0.33")
		]);

		let output = fs::read_to_string(dir.path().join("cache-power.e2e-ok")).expect("Missing output file");
		assert_eq!(output.lines().count(), 5);
		assert_eq!(output, "1.23\n0.45\n0.02\n0.01\n0.33");

		// The intermediates must have been cleaned up
		assert!(!Path::new(INPUT_BASE).suffixed("e2e-ok").exists());
		assert!(!Path::new(REPORT_BASE).suffixed("e2e-ok").exists());
	}

	#[test]
	fn missing_metrics_are_placeholders() {
		let (dir, config) = self::setup("#!/bin/sh\necho \"L2\"\necho \"  Area = 1.23\"\n");
		let descriptor = self::descriptor("e2e-partial");

		self::run(&config, &descriptor).expect("Pipeline should succeed");
		let output = fs::read_to_string(dir.path().join("cache-power.e2e-partial")).expect("Missing output file");
		assert_eq!(output, "1.23\nNone\nNone\nNone\nNone");
	}

	#[test]
	fn estimator_failure_leaves_no_output() {
		let (dir, config) = self::setup("#!/bin/sh\nexit 1\n");
		let descriptor = self::descriptor("e2e-fail");

		let err = self::run(&config, &descriptor).expect_err("Pipeline should fail");
		assert!(matches!(err, Error::EstimatorFailed { .. }));
		assert!(!dir.path().join("cache-power.e2e-fail").exists());

		// The aborted run doesn't clean up after itself
		for base in [INPUT_BASE, REPORT_BASE] {
			let _ = fs::remove_file(Path::new(base).suffixed("e2e-fail"));
		}
	}

	#[test]
	fn unreadable_template_aborts_before_invoking() {
		let (dir, mut config) = self::setup(STUB_REPORT);
		config.template_file = dir.path().join("missing.xml");
		let descriptor = self::descriptor("e2e-no-template");

		let err = self::run(&config, &descriptor).expect_err("Pipeline should fail");
		assert!(matches!(err, Error::TemplateUnreadable { .. }));
		assert!(!dir.path().join("cache-power.e2e-no-template").exists());
		assert!(!Path::new(INPUT_BASE).suffixed("e2e-no-template").exists());
	}
}
