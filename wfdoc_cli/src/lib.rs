use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use wfdoc_core::SettingsOverrides;
use wfdoc_core::TableLayout;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate a markdown summary of GitHub Actions workflows.",
	long_about = "wfdoc scans a directory of GitHub Actions workflow files and writes a markdown \
	              table summarizing them.\n\nEach row links to the workflow file, shows the \
	              description taken from the `##` comment lines at the top of the file, and \
	              lists the events from the workflow's `on` field.\n\nQuick start:\n  wfdoc \
	              generate  Write workflows.md\n  wfdoc check     Verify workflows.md is up to \
	              date\n  wfdoc list      Print the extracted workflow information\n  wfdoc init      \
	              Create a wfdoc.toml config file"
)]
pub struct WfdocCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory. Config files are looked up here and
	/// relative config paths are resolved against it.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Generate the markdown summary of all workflow files.
	///
	/// Reads every `.yml` and `.yaml` file in the workflows directory and
	/// writes a table with the file name, description and triggers of each
	/// workflow. Files that cannot be read or parsed are reported and left
	/// out of the table.
	#[command(alias = "gen")]
	Generate {
		#[command(flatten)]
		table: TableArgs,

		/// Print the generated document instead of writing it.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Check that the generated summary is up to date.
	///
	/// Renders the summary in memory and compares it with the output file.
	/// Exits with a non-zero status code when the file is missing or stale,
	/// which makes it suitable for CI and commit hooks.
	Check {
		#[command(flatten)]
		table: TableArgs,

		/// Show a line diff between the current file and the expected
		/// content.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// List the description and triggers extracted from each workflow.
	List {
		#[command(flatten)]
		table: TableArgs,

		/// Output format for the listing.
		#[arg(long, value_enum, default_value_t = ListOutputFormat::Text)]
		format: ListOutputFormat,
	},
	/// Create a `wfdoc.toml` config file in the project root.
	///
	/// If a config file already exists this command is a no-op and exits
	/// successfully.
	Init,
}

/// Options shared by every command that renders or reads workflows.
#[derive(Debug, Clone, Default, Args)]
pub struct TableArgs {
	/// Directory containing the workflow files. Defaults to
	/// `.github/workflows` under the project root.
	#[arg(long, short)]
	pub workflows: Option<PathBuf>,

	/// Output file for the markdown table. Defaults to `workflows.md` under
	/// the project root.
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Column layout used for trigger information.
	#[arg(long, value_enum)]
	pub layout: Option<LayoutArg>,
}

impl TableArgs {
	pub fn overrides(&self) -> SettingsOverrides {
		SettingsOverrides {
			workflows: self.workflows.clone(),
			output: self.output.clone(),
			layout: self.layout.map(Into::into),
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LayoutArg {
	/// One `Triggers` column listing every event name.
	Triggers,
	/// `On Push` and `On PR` columns with checkmarks.
	Checkmarks,
}

impl From<LayoutArg> for TableLayout {
	fn from(value: LayoutArg) -> Self {
		match value {
			LayoutArg::Triggers => Self::Triggers,
			LayoutArg::Checkmarks => Self::Checkmarks,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListOutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
