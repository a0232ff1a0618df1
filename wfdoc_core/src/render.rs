use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::WorkflowRecord;
use crate::paths::clean_path;
use crate::paths::relative_path;
use crate::paths::to_slash;

/// Heading used when no title is configured.
pub const DEFAULT_TITLE: &str = "GitHub Workflows Summary";

/// Glyph shown in checkmark columns for a trigger that is present.
pub const CHECKMARK: &str = "✓";

/// How trigger information is laid out in the table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLayout {
	/// A single `Triggers` column listing every trigger name.
	#[default]
	Triggers,
	/// Centered `On Push` and `On PR` columns with a checkmark when the
	/// workflow runs on that event.
	Checkmarks,
}

impl TableLayout {
	fn header(self) -> &'static str {
		match self {
			Self::Triggers => "| Filename | Description | Triggers |\n| --- | --- | --- |\n",
			Self::Checkmarks => {
				"| Filename | Description | On Push | On PR |\n| --- | --- | :---: | :---: |\n"
			}
		}
	}
}

/// Presentation options for [`render_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
	pub title: String,
	pub layout: TableLayout,
}

impl Default for TableOptions {
	fn default() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			layout: TableLayout::default(),
		}
	}
}

/// Render `records` as a markdown document with one table row per record, in
/// the order given.
///
/// `source_dir` is the directory the records were read from. When
/// `output_path` is provided, file links are made relative to the directory
/// the document will be written to. Cell content is not escaped.
pub fn render_table(
	records: &[WorkflowRecord],
	source_dir: &Path,
	output_path: Option<&Path>,
	options: &TableOptions,
) -> String {
	let mut document = format!("# {}\n\n", options.title);
	document.push_str(options.layout.header());

	for record in records {
		let link = link_target(source_dir, &record.filename, output_path);
		let triggers = match options.layout {
			TableLayout::Triggers => record.triggers.join(", "),
			TableLayout::Checkmarks => {
				format!(
					"{} | {}",
					checkmark(record.runs_on_push()),
					checkmark(record.runs_on_pull_request())
				)
			}
		};

		document.push_str(&format!(
			"| [{}]({link}) | {} | {triggers} |\n",
			record.filename, record.description
		));
	}

	document
}

/// Link target for `filename` inside `source_dir`, always using `/`
/// separators.
///
/// Without an output path the cleaned source path is returned. Otherwise the
/// link is relative to the directory of `output_path`. When the two paths
/// cannot be related lexically (one absolute and one relative, or the output
/// sits above a relative source) both are resolved against the working
/// directory first. The bare file name is the last resort.
pub fn link_target(source_dir: &Path, filename: &str, output_path: Option<&Path>) -> String {
	let source_path = source_dir.join(filename);

	let Some(output_path) = output_path else {
		return to_slash(&clean_path(&source_path));
	};

	let output_dir = match output_path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	relative_path(output_dir, &source_path)
		.or_else(|| {
			let output_dir = std::path::absolute(output_dir).ok()?;
			let source_path = std::path::absolute(&source_path).ok()?;
			relative_path(&output_dir, &source_path)
		})
		.map_or_else(|| filename.to_string(), |relative| to_slash(&relative))
}

fn checkmark(enabled: bool) -> &'static str {
	if enabled { CHECKMARK } else { "" }
}
