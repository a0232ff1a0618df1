use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;
use wfdoc_cli::Commands;
use wfdoc_cli::ListOutputFormat;
use wfdoc_cli::TableArgs;
use wfdoc_cli::WfdocCli;
use wfdoc_core::CONFIG_FILE_CANDIDATES;
use wfdoc_core::LINE_BREAK;
use wfdoc_core::Settings;
use wfdoc_core::SkippedWorkflow;
use wfdoc_core::WfdocConfig;
use wfdoc_core::check_output;
use wfdoc_core::collect_workflows;
use wfdoc_core::generate;
use wfdoc_core::generate_document;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = WfdocCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Generate { table, dry_run }) => run_generate(&args, table, *dry_run),
		Some(Commands::Check { table, diff }) => run_check(&args, table, *diff),
		Some(Commands::List { table, format }) => run_list(&args, table, *format),
		Some(Commands::Init) => run_init(&args),
		None => {
			eprintln!("No subcommand specified. Run `wfdoc --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<wfdoc_core::WfdocError>() {
			Ok(wfdoc_err) => {
				let report: miette::Report = (*wfdoc_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &WfdocCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn resolve_settings(
	root: &Path,
	table: &TableArgs,
) -> Result<Settings, Box<dyn std::error::Error>> {
	let settings = Settings::resolve(root, table.overrides())?;

	tracing::debug!(
		workflows = %settings.workflows.display(),
		output = %settings.output.display(),
		layout = ?settings.table.layout,
		"resolved settings"
	);

	Ok(settings)
}

fn run_generate(
	args: &WfdocCli,
	table: &TableArgs,
	dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let settings = resolve_settings(&root, table)?;

	if dry_run {
		let generation = generate_document(&settings.workflows, &settings.output, &settings.table)?;
		print_skipped(&root, &generation.skipped);
		print!("{}", generation.document);
		return Ok(());
	}

	let generation = generate(&settings.workflows, &settings.output, &settings.table)?;
	print_skipped(&root, &generation.skipped);

	if args.verbose {
		println!(
			"Documented {} workflow(s), skipped {}.",
			generation.records.len(),
			generation.skipped.len()
		);
	}
	println!(
		"{} {}",
		colored!("Successfully generated", green),
		settings.output.display()
	);

	Ok(())
}

fn run_check(
	args: &WfdocCli,
	table: &TableArgs,
	show_diff: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let settings = resolve_settings(&root, table)?;
	let generation = generate_document(&settings.workflows, &settings.output, &settings.table)?;
	print_skipped(&root, &generation.skipped);

	let result = check_output(&settings.output, &generation.document)?;
	if result.is_ok() {
		println!("Check passed: {} is up to date.", settings.output.display());
		return Ok(());
	}

	match &result.current {
		Some(current) => {
			eprintln!(
				"{} {} is out of date.",
				colored!("Check failed:", red),
				settings.output.display()
			);
			if show_diff {
				print_diff(current, &result.expected);
			}
		}
		None => {
			eprintln!(
				"{} {} does not exist.",
				colored!("Check failed:", red),
				settings.output.display()
			);
		}
	}
	eprintln!("Run `wfdoc generate` to fix.");
	process::exit(1);
}

fn run_list(
	args: &WfdocCli,
	table: &TableArgs,
	format: ListOutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let settings = resolve_settings(&root, table)?;
	let collection = collect_workflows(&settings.workflows)?;

	match format {
		ListOutputFormat::Json => {
			let skipped: Vec<serde_json::Value> = collection
				.skipped
				.iter()
				.map(|skipped| {
					serde_json::json!({
						"file": skipped.path.display().to_string(),
						"error": skipped.error.to_string(),
					})
				})
				.collect();
			let output = serde_json::json!({
				"workflows": collection.records,
				"skipped": skipped,
			});
			println!("{output}");
		}
		ListOutputFormat::Text => {
			print_skipped(&root, &collection.skipped);

			if collection.records.is_empty() {
				println!("No workflow files found.");
				return Ok(());
			}

			for record in &collection.records {
				let triggers = if record.triggers.is_empty() {
					"none".to_string()
				} else {
					record.triggers.join(", ")
				};
				println!("{}", colored!(record.filename.as_str(), bold));
				if !record.description.is_empty() {
					println!("  description: {}", record.description.replace(LINE_BREAK, " "));
				}
				println!("  triggers:    {triggers}");
			}

			println!("\n{} workflow(s)", collection.records.len());
		}
	}

	Ok(())
}

fn run_init(args: &WfdocCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	if let Some(existing) = WfdocConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	let config_path = root.join(CONFIG_FILE_CANDIDATES[0]);
	let sample_config = "# wfdoc configuration\n# Paths are relative to the project \
	                     root.\n\n# Directory containing the workflow files.\nworkflows = \
	                     \".github/workflows\"\n\n# Generated markdown file.\noutput = \
	                     \"workflows.md\"\n\n# Heading of the generated document.\n# title = \
	                     \"GitHub Workflows Summary\"\n\n# `triggers` lists every event, \
	                     `checkmarks` shows On Push / On PR columns.\n# layout = \"triggers\"\n";

	std::fs::write(&config_path, sample_config)?;
	println!("Created config file: {}", config_path.display());
	println!();
	println!("Next steps:");
	println!("  1. Add `## description` lines to the top of your workflow files");
	println!("  2. Run `wfdoc generate` to write the summary");
	println!("  3. Run `wfdoc check` in CI or a pre-commit hook to keep it fresh");

	Ok(())
}

/// Report workflow files that were left out of the table.
fn print_skipped(root: &Path, skipped: &[SkippedWorkflow]) {
	for entry in skipped {
		eprintln!(
			"{} skipping {}: {}",
			colored!("warning:", yellow),
			display_path(root, &entry.path),
			entry.error
		);
	}
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to the project root for display purposes.
fn display_path(root: &Path, path: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
