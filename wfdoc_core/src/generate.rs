use std::path::Path;
use std::path::PathBuf;

use crate::TableOptions;
use crate::WfdocError;
use crate::WfdocResult;
use crate::WorkflowRecord;
use crate::read_workflow;
use crate::render_table;
use crate::scan_workflow_dir;

/// A workflow file that was left out of the table because it could not be
/// read or parsed.
#[derive(Debug)]
pub struct SkippedWorkflow {
	pub path: PathBuf,
	pub error: WfdocError,
}

/// Records extracted from a workflow directory, in listing order.
#[derive(Debug, Default)]
pub struct WorkflowCollection {
	pub records: Vec<WorkflowRecord>,
	pub skipped: Vec<SkippedWorkflow>,
}

/// Scan `dir` and extract a record for every workflow file.
///
/// Listing the directory is the only fatal step. A file that fails to read or
/// parse is moved to [`WorkflowCollection::skipped`] and the remaining files
/// are still processed.
pub fn collect_workflows(dir: &Path) -> WfdocResult<WorkflowCollection> {
	let files = scan_workflow_dir(dir)?;

	let collection = files.into_iter().fold(
		WorkflowCollection::default(),
		|mut collection, path| {
			match read_workflow(&path) {
				Ok(record) => collection.records.push(record),
				Err(error) => {
					tracing::warn!(path = %path.display(), %error, "skipping workflow file");
					collection.skipped.push(SkippedWorkflow { path, error });
				}
			}
			collection
		},
	);

	Ok(collection)
}

/// The rendered document together with the records it was built from.
#[derive(Debug)]
pub struct Generation {
	pub document: String,
	pub records: Vec<WorkflowRecord>,
	pub skipped: Vec<SkippedWorkflow>,
}

/// Build the summary document for the workflows in `source_dir`. Links are
/// made relative to `output_path`. Nothing is written.
pub fn generate_document(
	source_dir: &Path,
	output_path: &Path,
	options: &TableOptions,
) -> WfdocResult<Generation> {
	let WorkflowCollection { records, skipped } = collect_workflows(source_dir)?;
	let document = render_table(&records, source_dir, Some(output_path), options);

	Ok(Generation {
		document,
		records,
		skipped,
	})
}

/// Build the summary document and write it to `output_path`.
pub fn generate(
	source_dir: &Path,
	output_path: &Path,
	options: &TableOptions,
) -> WfdocResult<Generation> {
	let generation = generate_document(source_dir, output_path, options)?;
	write_output(output_path, &generation.document)?;
	tracing::info!(
		output = %output_path.display(),
		rows = generation.records.len(),
		skipped = generation.skipped.len(),
		"generated workflow summary"
	);

	Ok(generation)
}

/// Write `document` to `output_path`, replacing any existing file.
pub fn write_output(output_path: &Path, document: &str) -> WfdocResult<()> {
	std::fs::write(output_path, document).map_err(|source| {
		WfdocError::WriteOutput {
			path: output_path.to_path_buf(),
			source,
		}
	})
}

/// Outcome of comparing a freshly rendered document with the file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
	/// Current file content. `None` when the file does not exist.
	pub current: Option<String>,
	/// Content `generate` would write.
	pub expected: String,
}

impl CheckResult {
	/// Returns `true` when the output file already matches.
	pub fn is_ok(&self) -> bool {
		self.current.as_deref() == Some(self.expected.as_str())
	}
}

/// Compare `document` with the content of `output_path`.
pub fn check_output(output_path: &Path, document: &str) -> WfdocResult<CheckResult> {
	let current = match std::fs::read_to_string(output_path) {
		Ok(content) => Some(content),
		Err(error) if error.kind() == std::io::ErrorKind::NotFound => None,
		Err(error) => return Err(error.into()),
	};

	Ok(CheckResult {
		current,
		expected: document.to_string(),
	})
}
