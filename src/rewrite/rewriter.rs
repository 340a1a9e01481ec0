use crate::rewrite::pattern::{Classification, DIRECTORY_LINK, LinkRef, classify};
use regex::Captures;

/// Document appended to eligible directory paths.
pub const INDEX_DOCUMENT: &str = "index.html";

/// Domain treated as the site's own when no other is configured.
pub const DEFAULT_CANONICAL_DOMAIN: &str = "gintarasdev.com";

/// Result of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
	/// The document content after substitution.
	pub content: String,

	/// True if at least one reference was rewritten.
	pub changed: bool,

	/// Number of references rewritten.
	pub rewrites: usize,
}

/// Rewrites directory-style `href`/`src` values to explicit index documents.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
	canonical_domain: String,
}

impl Default for LinkRewriter {
	fn default() -> Self {
		Self::new(DEFAULT_CANONICAL_DOMAIN)
	}
}

impl LinkRewriter {
	/// Create a rewriter for a site served from `canonical_domain`.
	pub fn new(canonical_domain: impl Into<String>) -> Self {
		LinkRewriter {
			canonical_domain: canonical_domain.into(),
		}
	}

	/// The domain substring that marks absolute links as internal.
	pub fn canonical_domain(&self) -> &str {
		&self.canonical_domain
	}

	/// Rewrite every eligible directory reference in `content`.
	///
	/// Root references, references to other `.com` domains and values with a
	/// mismatched closing quote are left exactly as they were and do not count
	/// as changes.
	pub fn rewrite(&self, content: &str) -> Rewrite {
		let mut rewrites = 0;

		let replaced = DIRECTORY_LINK.replace_all(content, |caps: &Captures| {
			let link = LinkRef::from_captures(caps);
			match self.rewrite_link(&link) {
				Some(rewritten) => {
					rewrites += 1;
					rewritten
				}
				None => caps[0].to_string(),
			}
		});

		Rewrite {
			content: replaced.into_owned(),
			changed: rewrites > 0,
			rewrites,
		}
	}

	fn rewrite_link(&self, link: &LinkRef) -> Option<String> {
		if !link.is_well_formed() {
			return None;
		}

		match classify(link.path, &self.canonical_domain) {
			Classification::Eligible => Some(link.with_suffix(INDEX_DOCUMENT)),
			Classification::Root | Classification::External => None,
		}
	}
}
