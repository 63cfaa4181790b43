//! Bridge between simulator-collected cache statistics and the McPAT
//! power/area estimator.
//!
//! Injects the statistics of a single cache-like structure into a McPAT
//! template document, runs the estimator over it and scrapes the resulting
//! report for the five power/area metrics.

// Modules
pub mod descriptor;
pub mod document;
pub mod error;
pub mod inject;
pub mod invoke;
pub mod pipeline;
pub mod report;

// Exports
pub use self::{
	descriptor::{CacheDescriptor, CacheKind},
	document::Document,
	error::Error,
	report::Metrics,
};
