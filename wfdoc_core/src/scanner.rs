use std::path::Path;
use std::path::PathBuf;

use crate::WfdocError;
use crate::WfdocResult;

/// File name suffixes recognized as workflow files. Matching is literal and
/// case-sensitive.
pub const WORKFLOW_EXTENSIONS: [&str; 2] = [".yml", ".yaml"];

/// Returns `true` when the file name ends with one of
/// [`WORKFLOW_EXTENSIONS`].
pub fn is_workflow_file_name(name: &str) -> bool {
	WORKFLOW_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// List the workflow files directly inside `dir`.
///
/// Subdirectories are skipped without recursion and so are entries whose
/// names are not valid UTF-8. The result is sorted by file name so the table
/// order does not depend on the filesystem.
pub fn scan_workflow_dir(dir: &Path) -> WfdocResult<Vec<PathBuf>> {
	let read_dir_error = |source| {
		WfdocError::ReadDir {
			path: dir.to_path_buf(),
			source,
		}
	};

	let mut files = Vec::new();
	for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
		let entry = entry.map_err(read_dir_error)?;
		let path = entry.path();

		if path.is_dir() {
			continue;
		}

		let file_name = entry.file_name();
		let Some(name) = file_name.to_str() else {
			tracing::debug!(path = %path.display(), "skipping non utf-8 file name");
			continue;
		};

		if is_workflow_file_name(name) {
			files.push(path);
		}
	}

	files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
	tracing::debug!(dir = %dir.display(), count = files.len(), "scanned workflow directory");

	Ok(files)
}
