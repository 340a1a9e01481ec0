use crate::config::Settings;
use crate::error::{IndexifyError, Result};
use crate::rewrite::LinkRewriter;
use crate::site::walk::{DocumentWalk, collect_documents};
use std::path::{Path, PathBuf};

/// What happened to a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOutcome {
	/// At least one link was rewritten. In dry-run mode nothing was written.
	Modified { rewrites: usize },

	/// No eligible links; the file was not touched.
	Unchanged,
}

/// Summary of one run over a build directory.
#[derive(Debug, Default)]
pub struct SiteReport {
	/// Documents that were (or in dry-run mode would be) rewritten.
	pub modified: Vec<(PathBuf, usize)>,

	/// Number of documents left untouched.
	pub unchanged: usize,

	/// Documents that could not be read or written, and directory entries
	/// the walk could not read.
	pub failures: Vec<(PathBuf, IndexifyError)>,
}

impl SiteReport {
	/// Total number of documents and unreadable entries examined.
	pub fn total(&self) -> usize {
		self.modified.len() + self.unchanged + self.failures.len()
	}

	/// Total number of links rewritten across all documents.
	pub fn rewrites(&self) -> usize {
		self.modified.iter().map(|(_, n)| n).sum()
	}

	pub fn has_failures(&self) -> bool {
		!self.failures.is_empty()
	}
}

/// Rewrite one document in place.
///
/// The document is read as UTF-8. It is only written back when at least one
/// link changed and `dry_run` is false.
pub fn process_document(
	path: &Path,
	rewriter: &LinkRewriter,
	dry_run: bool,
) -> Result<DocumentOutcome> {
	let content = std::fs::read_to_string(path).map_err(|source| IndexifyError::DocumentRead {
		path: path.to_path_buf(),
		source,
	})?;

	let result = rewriter.rewrite(&content);
	if !result.changed {
		return Ok(DocumentOutcome::Unchanged);
	}

	if !dry_run {
		std::fs::write(path, result.content).map_err(|source| IndexifyError::DocumentWrite {
			path: path.to_path_buf(),
			source,
		})?;
	}

	Ok(DocumentOutcome::Modified {
		rewrites: result.rewrites,
	})
}

/// Process every document, recording failures instead of stopping at them.
pub fn process_documents(
	documents: &[PathBuf],
	rewriter: &LinkRewriter,
	dry_run: bool,
) -> SiteReport {
	let mut report = SiteReport::default();

	for path in documents {
		match process_document(path, rewriter, dry_run) {
			Ok(DocumentOutcome::Modified { rewrites }) => {
				report.modified.push((path.clone(), rewrites));
			}
			Ok(DocumentOutcome::Unchanged) => report.unchanged += 1,
			Err(e) => report.failures.push((path.clone(), e)),
		}
	}

	report
}

/// Process the documents of a walk and fold its entry errors into the report.
pub fn process_walk(walk: DocumentWalk, rewriter: &LinkRewriter, dry_run: bool) -> SiteReport {
	let mut report = process_documents(&walk.documents, rewriter, dry_run);
	report.failures.extend(walk.errors);
	report
}

/// Collect and process all documents under the configured build directory.
///
/// Fails only when the build directory itself is missing or not a directory.
pub fn process_site(settings: &Settings, dry_run: bool) -> Result<SiteReport> {
	let walk = collect_documents(&settings.build_dir, &settings.extensions)?;
	let rewriter = LinkRewriter::new(settings.canonical_domain.clone());
	Ok(process_walk(walk, &rewriter, dry_run))
}
