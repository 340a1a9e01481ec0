//! Indexify - rewrite directory-style links in a generated static site.
//!
//! Static site generators emit links such as `/about/` and rely on the web
//! server to resolve them to `/about/index.html`. That breaks when the site is
//! browsed over `file://` or served by a host that does not resolve directory
//! indices. This library provides:
//! - Link rewriting for `href`/`src` attribute values in raw markup
//! - Build directory traversal with per-document failure isolation
//! - Configuration file parsing and cascade discovery
//!
//! # Example
//!
//! ```
//! use indexify_cli::rewrite::LinkRewriter;
//!
//! let rewriter = LinkRewriter::new("gintarasdev.com");
//! let result = rewriter.rewrite(r#"<a href="/about/">About</a>"#);
//!
//! assert!(result.changed);
//! assert_eq!(result.content, r#"<a href="/about/index.html">About</a>"#);
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod rewrite;
pub mod site;

pub use error::{IndexifyError, Result};
