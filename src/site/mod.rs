//! Build directory processing for indexify.
//!
//! This module handles:
//! - Enumerating markup documents under the build directory
//! - Rewriting and persisting each document independently
//! - Collecting a per-run report, including per-document failures

pub mod process;
pub mod walk;

pub use process::{
	DocumentOutcome, SiteReport, process_document, process_documents, process_site, process_walk,
};
pub use walk::{DocumentWalk, collect_documents, has_extension};
