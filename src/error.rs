use std::path::PathBuf;

/// Library-level structured errors for indexify.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum IndexifyError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid config file {path}: {reason}")]
	InvalidConfig { path: PathBuf, reason: String },

	#[error("Invalid value for {option}: {reason}")]
	InvalidOption { option: String, reason: String },

	#[error("Build directory not found: {path}")]
	RootNotFound { path: PathBuf },

	#[error("Failed to read directory entry: {path}")]
	WalkError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read document: {path}")]
	DocumentRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write document: {path}")]
	DocumentWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using IndexifyError.
pub type Result<T> = std::result::Result<T, IndexifyError>;
