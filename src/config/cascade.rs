use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, MergedConfig, Sourced};
use crate::error::{IndexifyError, Result};
use std::path::{Path, PathBuf};

/// File name looked up in each directory of the cascade and in the home directory.
pub const CONFIG_FILE_NAME: &str = ".indexify.toml";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.indexify.toml`
/// 2. If found and `root = true`, skip to user config only
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.indexify.toml (unless disabled)
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = discover_local_configs(start_dir)?;

	if let Some(user_config) = load_user_config(&configs)? {
		// A project living under the home directory already picked it up.
		if !configs.iter().any(|c| c.path == user_config.path) {
			configs.push(user_config);
		}
	}

	Ok(configs)
}

/// Walk up from `start_dir` collecting `.indexify.toml` files.
///
/// Stops after the first config with `root = true`.
pub fn discover_local_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let config_path = current_dir.join(CONFIG_FILE_NAME);

		if config_path.is_file() {
			let config = parse_config_file(&config_path)?;
			let stop = config.root;

			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if stop {
				break;
			}
		}

		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			break;
		}
	}

	Ok(configs)
}

/// Load the user's ~/.indexify.toml if it exists and isn't disabled.
fn load_user_config(existing_configs: &[LoadedConfig]) -> Result<Option<LoadedConfig>> {
	for loaded in existing_configs {
		if let Some(ref env_var) = loaded.config.user_config_lookup_disable_env_var
			&& is_env_truthy(env_var)
		{
			return Ok(None);
		}
	}

	let user_config_path = user_config_path()?;

	if user_config_path.is_file() {
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Merge multiple configs into a single effective config.
///
/// Configs are given most specific first; the first config that sets a value
/// wins. A relative `build-dir` is anchored at its config file's directory.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();

	for loaded in configs {
		let config = &loaded.config;

		if merged.build_dir.is_none()
			&& let Some(ref build_dir) = config.build_dir
		{
			let base = loaded.path.parent().unwrap_or(Path::new(""));
			merged.build_dir = Some(Sourced {
				value: base.join(build_dir),
				source: loaded.path.clone(),
			});
		}

		if merged.canonical_domain.is_none()
			&& let Some(ref domain) = config.canonical_domain
		{
			merged.canonical_domain = Some(Sourced {
				value: domain.trim().to_string(),
				source: loaded.path.clone(),
			});
		}

		if merged.extensions.is_none()
			&& let Some(ref extensions) = config.extensions
		{
			merged.extensions = Some(Sourced {
				value: extensions.clone(),
				source: loaded.path.clone(),
			});
		}
	}

	merged
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(IndexifyError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
