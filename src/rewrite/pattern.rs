use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches `href=` or `src=` attribute values ending in a directory slash.
///
/// Capture groups: attribute name, opening quote, path (including the
/// trailing slash), and the delimiter that follows the slash. The path is any
/// run of non-quote characters, so it may itself contain `#` or `?`; the
/// greedy match anchors on the last slash that is followed by a delimiter.
pub(crate) static DIRECTORY_LINK: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"(href|src)=(["'])([^"']*/)(["'#?])"#)
		.expect("directory link pattern is valid")
});

/// One matched attribute reference, split into its four parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRef<'a> {
	/// Attribute name, `href` or `src`.
	pub attr: &'a str,

	/// The quote character opening the value.
	pub quote: &'a str,

	/// The path up to and including its trailing slash.
	pub path: &'a str,

	/// The character following the slash: a quote, `#` or `?`.
	pub delim: &'a str,
}

impl<'a> LinkRef<'a> {
	/// Build a reference from a match of [`DIRECTORY_LINK`].
	pub(crate) fn from_captures(caps: &Captures<'a>) -> Self {
		let group = |i| caps.get(i).map_or("", |m| m.as_str());
		LinkRef {
			attr: group(1),
			quote: group(2),
			path: group(3),
			delim: group(4),
		}
	}

	/// A quote delimiter must close the value with the same quote that opened it.
	pub fn is_well_formed(&self) -> bool {
		match self.delim {
			"\"" | "'" => self.delim == self.quote,
			_ => true,
		}
	}

	/// Reassemble the attribute with `suffix` appended to the path.
	pub fn with_suffix(&self, suffix: &str) -> String {
		format!(
			"{}={}{}{}{}",
			self.attr, self.quote, self.path, suffix, self.delim
		)
	}
}

/// How a matched directory path is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
	/// The site root (`/`) or an empty path. Never rewritten.
	Root,

	/// Looks like an absolute URL on some other `.com` domain. Never rewritten.
	External,

	/// Gets `index.html` appended.
	Eligible,
}

/// Classify a directory path against the site's canonical domain.
///
/// Root paths are checked first, then the external-domain heuristic: a path
/// mentioning `.com` that does not mention `canonical_domain` is treated as
/// pointing elsewhere.
pub fn classify(path: &str, canonical_domain: &str) -> Classification {
	if path.is_empty() || path == "/" {
		return Classification::Root;
	}

	if path.contains(".com") && !path.contains(canonical_domain) {
		return Classification::External;
	}

	Classification::Eligible
}
