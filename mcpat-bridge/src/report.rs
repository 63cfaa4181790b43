//! Report extraction.
//!
//! The estimator's report is a flat text dump with one section per modeled
//! block, order-stable but not position-stable. The extractor stays
//! inactive until it sees the target block's header line, then takes the
//! first occurrence of each metric label.

// Imports
use {itertools::Itertools, regex::Regex};

/// Placeholder written for a metric that never appeared in the report
pub const NOT_FOUND: &str = "None";

/// Metric labels, in output order
const LABELS: [&str; 5] = [
	"Area",
	"Peak Dynamic",
	"Subthreshold Leakage",
	"Gate Leakage",
	"Runtime Dynamic",
];

/// The five scalar metrics extracted from an estimator report.
///
/// Each metric is kept as the numeric string the estimator printed;
/// a metric that never appeared stays `None`.
#[derive(PartialEq, Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Metrics {
	/// Area (in mm^2)
	pub area: Option<String>,

	/// Peak dynamic power (in W)
	pub peak_dynamic: Option<String>,

	/// Subthreshold leakage power (in W)
	pub subthreshold_leakage: Option<String>,

	/// Gate leakage power (in W)
	pub gate_leakage: Option<String>,

	/// Runtime dynamic power (in W)
	pub runtime_dynamic: Option<String>,
}

impl Metrics {
	/// Returns the metrics in the fixed output order
	pub fn in_order(&self) -> [Option<&str>; 5] {
		[
			self.area.as_deref(),
			self.peak_dynamic.as_deref(),
			self.subthreshold_leakage.as_deref(),
			self.gate_leakage.as_deref(),
			self.runtime_dynamic.as_deref(),
		]
	}

	/// Formats the metrics as the 5-line output file contents, missing
	/// metrics rendered as [`NOT_FOUND`]
	pub fn to_output(&self) -> String {
		self.in_order().iter().map(|metric| metric.unwrap_or(NOT_FOUND)).join("\n")
	}
}

/// Scanner state
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum ScanState {
	/// Still looking for the target component's header line
	SeekingHeader,

	/// Inside the target component's section, collecting metrics
	Active,
}

/// Extracts the metrics for `component` from the report's `lines`.
///
/// Extraction never fails: a report without the component's header, or
/// with metric lines missing, simply yields absent metrics.
pub fn extract<'a>(component: &str, lines: impl IntoIterator<Item = &'a str>) -> Metrics {
	let patterns = LABELS.map(|label| {
		Regex::new(&format!(r"{label} = ([-e0-9\.]+)")).expect("Metric label pattern was invalid")
	});
	let mut values: [Option<String>; 5] = Default::default();

	let mut state = ScanState::SeekingHeader;
	for line in lines {
		match state {
			// Note: a bare prefix match, as the estimator prints the block
			// header at the start of a line. A stray line elsewhere that
			// happens to start with the component name would activate us
			// early; the report format gives us nothing stronger to anchor on.
			ScanState::SeekingHeader =>
				if line.starts_with(component) {
					state = ScanState::Active;
				},
			ScanState::Active => {
				for (value, pattern) in values.iter_mut().zip(&patterns) {
					if value.is_none() {
						if let Some(captures) = pattern.captures(line) {
							*value = Some(captures[1].to_owned());
						}
					}
				}

				// The estimator prints Runtime Dynamic last within a block,
				// so finding it means all five have been seen or skipped.
				// Scanning further would only pick up values from the next
				// block's section.
				let all_found = values[4].is_some();
				if all_found {
					break;
				}
			},
		}
	}

	let [area, peak_dynamic, subthreshold_leakage, gate_leakage, runtime_dynamic] = values;
	Metrics {
		area,
		peak_dynamic,
		subthreshold_leakage,
		gate_leakage,
		runtime_dynamic,
	}
}
