use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::TableLayout;
use crate::TableOptions;
use crate::WfdocError;
use crate::WfdocResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["wfdoc.toml", ".wfdoc.toml", ".config/wfdoc.toml"];

/// Directory scanned when neither the command line nor the config names one.
pub const DEFAULT_WORKFLOWS_DIR: &str = ".github/workflows";

/// Output file written when neither the command line nor the config names
/// one.
pub const DEFAULT_OUTPUT_FILE: &str = "workflows.md";

/// Configuration loaded from a `wfdoc.toml` file.
///
/// ```toml
/// workflows = ".github/workflows"
/// output = "docs/workflows.md"
/// title = "CI Pipelines"
/// layout = "checkmarks"
/// ```
///
/// Relative paths are resolved against the project root, not the directory of
/// the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WfdocConfig {
	/// Directory containing the workflow files.
	#[serde(default)]
	pub workflows: Option<PathBuf>,
	/// Path of the generated markdown file.
	#[serde(default)]
	pub output: Option<PathBuf>,
	/// Title used for the top-level heading.
	#[serde(default)]
	pub title: Option<String>,
	/// Column layout for the trigger information.
	#[serde(default)]
	pub layout: Option<TableLayout>,
}

impl WfdocConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> WfdocResult<Option<WfdocConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content =
			std::fs::read_to_string(&config_path).map_err(|source| WfdocError::ReadConfig {
				path: config_path.clone(),
				source,
			})?;
		let config = Self::from_toml(&content)?;

		Ok(Some(config))
	}

	/// Parse config content.
	pub fn from_toml(content: &str) -> WfdocResult<WfdocConfig> {
		toml::from_str(content).map_err(|e| WfdocError::ConfigParse(e.to_string()))
	}
}

/// Values supplied on the command line. Each one overrides the matching config
/// entry.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
	pub workflows: Option<PathBuf>,
	pub output: Option<PathBuf>,
	pub layout: Option<TableLayout>,
}

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub workflows: PathBuf,
	pub output: PathBuf,
	pub table: TableOptions,
}

impl Settings {
	/// Merge the config found at `root` with command line overrides.
	///
	/// Config paths are joined onto `root`. Override paths are used as given so
	/// that they stay relative to the working directory.
	pub fn resolve(root: &Path, overrides: SettingsOverrides) -> WfdocResult<Self> {
		let config = WfdocConfig::load(root)?.unwrap_or_default();
		Ok(Self::merge(root, config, overrides))
	}

	/// Merge an already loaded config with command line overrides.
	pub fn merge(root: &Path, config: WfdocConfig, overrides: SettingsOverrides) -> Self {
		let workflows = overrides.workflows.unwrap_or_else(|| {
			root.join(
				config
					.workflows
					.unwrap_or_else(|| PathBuf::from(DEFAULT_WORKFLOWS_DIR)),
			)
		});
		let output = overrides.output.unwrap_or_else(|| {
			root.join(
				config
					.output
					.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
			)
		});

		let mut table = TableOptions::default();
		if let Some(title) = config.title {
			table.title = title;
		}
		if let Some(layout) = overrides.layout.or(config.layout) {
			table.layout = layout;
		}

		Self {
			workflows,
			output,
			table,
		}
	}
}
