use crate::error::{IndexifyError, Result};
use crate::rewrite::DEFAULT_CANONICAL_DOMAIN;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Build directory used when neither the CLI nor a config file names one.
pub const DEFAULT_BUILD_DIR: &str = "public";

/// Extensions processed when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["html"];

/// Top-level configuration from a `.indexify.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop the directory cascade here and jump to ~/.indexify.toml.
	#[serde(default)]
	pub root: bool,

	/// Directory holding the generated site. Relative paths are resolved
	/// against the directory containing the config file.
	#[serde(default)]
	pub build_dir: Option<PathBuf>,

	/// The site's own domain. Absolute links containing it are rewritten.
	#[serde(default)]
	pub canonical_domain: Option<String>,

	/// File extensions (without the leading dot) treated as markup documents.
	#[serde(default)]
	pub extensions: Option<Vec<String>>,

	/// Environment variable name that, if truthy, skips ~/.indexify.toml lookup.
	/// Useful for CI environments.
	#[serde(default)]
	pub user_config_lookup_disable_env_var: Option<String>,
}

impl Config {
	/// Check values that parse fine but cannot be used.
	pub fn validate(&self, path: &Path) -> Result<()> {
		let invalid = |reason: &str| IndexifyError::InvalidConfig {
			path: path.to_path_buf(),
			reason: reason.to_string(),
		};

		if let Some(ref domain) = self.canonical_domain
			&& domain.trim().is_empty()
		{
			return Err(invalid("canonical-domain must not be empty"));
		}

		if let Some(ref extensions) = self.extensions {
			if extensions.is_empty() {
				return Err(invalid("extensions must list at least one extension"));
			}
			for ext in extensions {
				if ext.is_empty() {
					return Err(invalid("extensions must not contain empty entries"));
				}
				if ext.starts_with('.') {
					return Err(invalid("extensions must be given without a leading dot"));
				}
			}
		}

		Ok(())
	}
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// A merged setting together with the config file that provided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
	pub value: T,
	pub source: PathBuf,
}

/// Merged configuration from multiple config files in the cascade.
///
/// Each setting holds the value from the most specific config that sets it.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	pub build_dir: Option<Sourced<PathBuf>>,
	pub canonical_domain: Option<Sourced<String>>,
	pub extensions: Option<Sourced<Vec<String>>>,
}

/// Values given on the command line. They win over every config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub build_dir: Option<PathBuf>,
	pub canonical_domain: Option<String>,
	pub extensions: Vec<String>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Root directory to scan.
	pub build_dir: PathBuf,

	/// Canonical domain substring for the external-link heuristic.
	pub canonical_domain: String,

	/// Markup file extensions, lowercase, without leading dots.
	pub extensions: Vec<String>,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
			canonical_domain: DEFAULT_CANONICAL_DOMAIN.to_string(),
			extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
		}
	}
}

impl MergedConfig {
	/// Resolve the effective settings: CLI overrides, then config, then defaults.
	///
	/// Overrides are checked against the same rules `Config::validate` applies
	/// to config files.
	pub fn resolve(&self, overrides: &Overrides) -> Result<Settings> {
		let defaults = Settings::default();

		let build_dir = overrides
			.build_dir
			.clone()
			.or_else(|| self.build_dir.as_ref().map(|s| s.value.clone()))
			.unwrap_or(defaults.build_dir);

		let canonical_domain = match overrides.canonical_domain {
			Some(ref domain) => {
				let domain = domain.trim();
				if domain.is_empty() {
					return Err(invalid_option("--domain", "domain must not be empty"));
				}
				domain.to_string()
			}
			None => self
				.canonical_domain
				.as_ref()
				.map(|s| s.value.clone())
				.unwrap_or(defaults.canonical_domain),
		};

		let extensions = if !overrides.extensions.is_empty() {
			let extensions = normalize_extensions(&overrides.extensions);
			if extensions.iter().any(|e| e.is_empty()) {
				return Err(invalid_option("--ext", "extensions must not be empty"));
			}
			extensions
		} else {
			let configured = self
				.extensions
				.as_ref()
				.map(|s| s.value.clone())
				.unwrap_or(defaults.extensions);
			normalize_extensions(&configured)
		};

		Ok(Settings {
			build_dir,
			canonical_domain,
			extensions,
		})
	}
}

fn invalid_option(option: &str, reason: &str) -> IndexifyError {
	IndexifyError::InvalidOption {
		option: option.to_string(),
		reason: reason.to_string(),
	}
}

/// Lowercase extensions, strip one leading dot and drop repeats.
///
/// An extension that is nothing but a dot normalizes to an empty string.
fn normalize_extensions(extensions: &[String]) -> Vec<String> {
	let mut normalized: Vec<String> = Vec::with_capacity(extensions.len());
	for ext in extensions {
		let ext = ext.trim();
		let ext = ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase();
		if !normalized.contains(&ext) {
			normalized.push(ext);
		}
	}
	normalized
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sourced<T>(value: T, source: &str) -> Option<Sourced<T>> {
		Some(Sourced {
			value,
			source: PathBuf::from(source),
		})
	}

	#[test]
	fn test_resolve_defaults() {
		let settings = MergedConfig::default()
			.resolve(&Overrides::default())
			.unwrap();
		assert_eq!(settings.build_dir, PathBuf::from("public"));
		assert_eq!(settings.canonical_domain, "gintarasdev.com");
		assert_eq!(settings.extensions, vec!["html"]);
	}

	#[test]
	fn test_resolve_config_over_defaults() {
		let merged = MergedConfig {
			build_dir: sourced(PathBuf::from("/site/dist"), "/site/.indexify.toml"),
			canonical_domain: sourced("example.com".to_string(), "/site/.indexify.toml"),
			extensions: sourced(vec!["html".to_string(), "htm".to_string()], "/x"),
		};
		let settings = merged.resolve(&Overrides::default()).unwrap();
		assert_eq!(settings.build_dir, PathBuf::from("/site/dist"));
		assert_eq!(settings.canonical_domain, "example.com");
		assert_eq!(settings.extensions, vec!["html", "htm"]);
	}

	#[test]
	fn test_resolve_overrides_win() {
		let merged = MergedConfig {
			build_dir: sourced(PathBuf::from("/site/dist"), "/site/.indexify.toml"),
			canonical_domain: sourced("example.com".to_string(), "/site/.indexify.toml"),
			extensions: sourced(vec!["htm".to_string()], "/site/.indexify.toml"),
		};
		let overrides = Overrides {
			build_dir: Some(PathBuf::from("out")),
			canonical_domain: Some("mysite.com".to_string()),
			extensions: vec![".XHTML".to_string()],
		};
		let settings = merged.resolve(&overrides).unwrap();
		assert_eq!(settings.build_dir, PathBuf::from("out"));
		assert_eq!(settings.canonical_domain, "mysite.com");
		assert_eq!(settings.extensions, vec!["xhtml"]);
	}

	#[test]
	fn test_resolve_rejects_blank_domain_override() {
		for domain in ["", "   "] {
			let overrides = Overrides {
				canonical_domain: Some(domain.to_string()),
				..Default::default()
			};
			match MergedConfig::default().resolve(&overrides).unwrap_err() {
				IndexifyError::InvalidOption { option, .. } => assert_eq!(option, "--domain"),
				_ => panic!("Expected InvalidOption error"),
			}
		}
	}

	#[test]
	fn test_resolve_trims_domain_override() {
		let overrides = Overrides {
			canonical_domain: Some(" mysite.com ".to_string()),
			..Default::default()
		};
		let settings = MergedConfig::default().resolve(&overrides).unwrap();
		assert_eq!(settings.canonical_domain, "mysite.com");
	}

	#[test]
	fn test_resolve_rejects_empty_extension_override() {
		for ext in ["", ".", " "] {
			let overrides = Overrides {
				extensions: vec!["html".to_string(), ext.to_string()],
				..Default::default()
			};
			match MergedConfig::default().resolve(&overrides).unwrap_err() {
				IndexifyError::InvalidOption { option, .. } => assert_eq!(option, "--ext"),
				_ => panic!("Expected InvalidOption error"),
			}
		}
	}

	#[test]
	fn test_resolve_drops_repeated_extensions() {
		let overrides = Overrides {
			extensions: ["html", "htm", "HTML", ".htm"]
				.iter()
				.map(|e| e.to_string())
				.collect(),
			..Default::default()
		};
		let settings = MergedConfig::default().resolve(&overrides).unwrap();
		assert_eq!(settings.extensions, vec!["html", "htm"]);
	}

	#[test]
	fn test_validate_rejects_empty_domain() {
		let config = Config {
			canonical_domain: Some("  ".to_string()),
			..Default::default()
		};
		let err = config.validate(Path::new("test.toml")).unwrap_err();
		match err {
			IndexifyError::InvalidConfig { reason, .. } => {
				assert!(reason.contains("canonical-domain"));
			}
			_ => panic!("Expected InvalidConfig error"),
		}
	}

	#[test]
	fn test_validate_rejects_bad_extensions() {
		for extensions in [vec![], vec![String::new()], vec![".html".to_string()]] {
			let config = Config {
				extensions: Some(extensions),
				..Default::default()
			};
			assert!(config.validate(Path::new("test.toml")).is_err());
		}
	}

	#[test]
	fn test_validate_accepts_empty_config() {
		assert!(Config::default().validate(Path::new("test.toml")).is_ok());
	}
}
