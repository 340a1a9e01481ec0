use crate::config::types::DEFAULT_BUILD_DIR;
use crate::rewrite::DEFAULT_CANONICAL_DOMAIN;

/// Generate the template written by `indexify --init`.
pub fn generate_init_template() -> String {
	format!(
		r#"# indexify configuration
#
# Stop looking for .indexify.toml files in parent directories.
root = true

# Directory holding the generated site, relative to this file.
build-dir = "{DEFAULT_BUILD_DIR}"

# Your site's domain. Absolute links on other .com domains are left alone.
canonical-domain = "{DEFAULT_CANONICAL_DOMAIN}"

# File extensions to process.
extensions = ["html"]

# Skip ~/.indexify.toml when this environment variable is truthy.
# user-config-lookup-disable-env-var = "CI"
"#
	)
}
