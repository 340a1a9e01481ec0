//! Terminal output with colored module prefixes.
//!
//! ```ignore
//! log!("rewrite"; "{} ({} links)", path.display(), count);
//! debug!("walk"; "unchanged: {}", path.display());
//! ```

use owo_colors::{OwoColorize, Stream};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
	VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
	VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a colored module prefix
///
/// `error` and `warn` go to stderr, everything else to stdout.
#[macro_export]
macro_rules! log {
	($module:expr; $($arg:tt)*) => {{
		$crate::logger::log($module, &format!($($arg)*))
	}};
}

/// Log a message only when --verbose is enabled
#[macro_export]
macro_rules! debug {
	($module:expr; $($arg:tt)*) => {{
		if $crate::logger::is_verbose() {
			$crate::logger::log($module, &format!($($arg)*))
		}
	}};
}

pub fn log(module: &str, message: &str) {
	let module_lower = module.to_ascii_lowercase();

	match module_lower.as_str() {
		"error" | "warn" => {
			let prefix = colorize_prefix(module, &module_lower, Stream::Stderr);
			eprintln!("{prefix} {message}");
		}
		_ => {
			let prefix = colorize_prefix(module, &module_lower, Stream::Stdout);
			println!("{prefix} {message}");
		}
	}
}

/// Apply color to a module prefix based on module type
fn colorize_prefix(module: &str, module_lower: &str, stream: Stream) -> String {
	let prefix = format!("[{module}]");
	match module_lower {
		"error" => prefix
			.if_supports_color(stream, |p| p.bright_red().bold().to_string())
			.to_string(),
		"warn" => prefix
			.if_supports_color(stream, |p| p.bright_yellow().bold().to_string())
			.to_string(),
		"rewrite" => prefix
			.if_supports_color(stream, |p| p.bright_green().bold().to_string())
			.to_string(),
		"dry-run" => prefix
			.if_supports_color(stream, |p| p.bright_cyan().bold().to_string())
			.to_string(),
		_ => prefix
			.if_supports_color(stream, |p| p.bright_blue().bold().to_string())
			.to_string(),
	}
}
