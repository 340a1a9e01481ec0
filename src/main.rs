use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use indexify_cli::config::{
	CONFIG_FILE_NAME, MergedConfig, Overrides, Settings, Sourced, discover_configs,
	generate_init_template, load_merged_config, merge_configs, user_config_path,
};
use indexify_cli::site::{SiteReport, process_site};
use indexify_cli::{debug, log, logger};

#[derive(Parser)]
#[command(name = "indexify")]
#[command(
	author,
	version,
	about = "Rewrite directory-style links in a generated static site into explicit index.html references"
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Directory holding the generated site [default: public]
	#[arg(value_name = "BUILD_DIR")]
	build_dir: Option<PathBuf>,

	/// Your site's domain; absolute links on other .com domains are left alone
	#[arg(long, value_name = "DOMAIN")]
	domain: Option<String>,

	/// File extension to process (repeatable) [default: html]
	#[arg(long = "ext", value_name = "EXT")]
	extensions: Vec<String>,

	/// Report what would change without writing any files
	#[arg(long)]
	dry_run: bool,

	/// Also report unchanged documents and the effective settings
	#[arg(short, long)]
	verbose: bool,

	/// Create a template .indexify.toml in the current directory
	#[arg(long, conflicts_with_all = ["build_dir", "domain", "extensions", "dry_run"])]
	init: bool,

	/// Overwrite existing .indexify.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display discovered config files and the effective settings with their sources
	Show,
	/// Check all config files for errors without touching the site
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	logger::set_verbose(cli.verbose);

	if cli.init {
		return handle_init(cli.force);
	}

	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(),
				ConfigAction::Validate => handle_config_validate(),
			},
		};
	}

	let overrides = Overrides {
		build_dir: cli.build_dir,
		canonical_domain: cli.domain,
		extensions: cli.extensions,
	};
	handle_rewrite(&overrides, cli.dry_run)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_rewrite(overrides: &Overrides, dry_run: bool) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let config = load_merged_config(&cwd).context("Failed to load configuration")?;
	let settings = config.resolve(overrides).context("Invalid command-line option")?;

	debug!("config"; "build dir: {}", settings.build_dir.display());
	debug!("config"; "canonical domain: {}", settings.canonical_domain);
	debug!("config"; "extensions: {}", settings.extensions.join(", "));

	let report = process_site(&settings, dry_run).with_context(|| {
		format!(
			"Failed to process build directory: {}",
			settings.build_dir.display()
		)
	})?;

	print_report(&report, &settings, dry_run);

	if report.has_failures() {
		Ok(ExitCode::FAILURE)
	} else {
		Ok(ExitCode::SUCCESS)
	}
}

fn print_report(report: &SiteReport, settings: &Settings, dry_run: bool) {
	let relative = |path: &Path| -> PathBuf {
		path.strip_prefix(&settings.build_dir)
			.unwrap_or(path)
			.to_path_buf()
	};

	for (path, rewrites) in &report.modified {
		let noun = if *rewrites == 1 { "link" } else { "links" };
		if dry_run {
			log!("dry-run"; "{} ({rewrites} {noun})", relative(path).display());
		} else {
			log!("rewrite"; "{} ({rewrites} {noun})", relative(path).display());
		}
	}

	for (path, error) in &report.failures {
		log!("error"; "{}: {}", relative(path).display(), error_chain(error));
	}

	debug!("walk"; "{} documents unchanged", report.unchanged);

	let verb = if dry_run { "would be modified" } else { "modified" };
	println!(
		"URL replacements completed: {} of {} documents {verb} ({} links).",
		report.modified.len(),
		report.total(),
		report.rewrites()
	);

	if report.has_failures() {
		log!("warn"; "{} entries could not be processed", report.failures.len());
	}
}

/// Render an error and its sources on one line.
fn error_chain(error: &dyn std::error::Error) -> String {
	let mut message = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
	} else {
		println!("Configuration files (in cascade order):\n");

		for loaded in &configs {
			let config = &loaded.config;
			println!("# Source: {}", loaded.path.display());
			println!("# root: {}", config.root);
			if let Some(ref build_dir) = config.build_dir {
				println!("  build-dir: {}", build_dir.display());
			}
			if let Some(ref domain) = config.canonical_domain {
				println!("  canonical-domain: {}", domain);
			}
			if let Some(ref extensions) = config.extensions {
				println!("  extensions: {}", extensions.join(", "));
			}
			if let Some(ref env_var) = config.user_config_lookup_disable_env_var {
				println!("  user-config-lookup-disable-env-var: {}", env_var);
			}
			println!();
		}
	}

	let merged = merge_configs(&configs);
	print_effective_settings(&merged)?;

	if let Ok(user_path) = user_config_path() {
		println!();
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn print_effective_settings(merged: &MergedConfig) -> Result<()> {
	fn source_of<T>(sourced: &Option<Sourced<T>>) -> String {
		match sourced {
			Some(s) => s.source.display().to_string(),
			None => "default".to_string(),
		}
	}

	let settings = merged
		.resolve(&Overrides::default())
		.context("Failed to resolve settings")?;

	println!("Effective settings:");
	println!(
		"  build-dir: {} ({})",
		settings.build_dir.display(),
		source_of(&merged.build_dir)
	);
	println!(
		"  canonical-domain: {} ({})",
		settings.canonical_domain,
		source_of(&merged.canonical_domain)
	);
	println!(
		"  extensions: {} ({})",
		settings.extensions.join(", "),
		source_of(&merged.extensions)
	);

	Ok(())
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match discover_configs(&cwd) {
		Ok(configs) => {
			if configs.is_empty() {
				println!("No configuration files found.");
			} else {
				println!("All configuration files are valid:");
				for loaded in &configs {
					println!("  {}", loaded.path.display());
				}
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", error_chain(&e));
			Ok(ExitCode::FAILURE)
		}
	}
}
