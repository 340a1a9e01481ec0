//! Link rewriting for indexify.
//!
//! This module handles:
//! - Matching `href`/`src` attribute values that end in a directory slash
//! - Classifying matched paths (root, external, eligible)
//! - Rewriting eligible paths to point at the directory's `index.html`

pub mod pattern;
pub mod rewriter;

pub use pattern::{Classification, LinkRef, classify};
pub use rewriter::{DEFAULT_CANONICAL_DOMAIN, INDEX_DOCUMENT, LinkRewriter, Rewrite};
