use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use serde_yaml_ng::Value;

use crate::WfdocError;
use crate::WfdocResult;

/// Marker that opens a description comment line.
pub const DESCRIPTION_MARKER: &str = "##";

/// Separator placed between description lines so the description renders as
/// a single table cell.
pub const LINE_BREAK: &str = "<br>";

/// Top-level key holding the workflow triggers.
pub const TRIGGER_KEY: &str = "on";

pub const PUSH_TRIGGER: &str = "push";
pub const PULL_REQUEST_TRIGGER: &str = "pull_request";

/// Summary of a single workflow file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRecord {
	/// Base name of the workflow file.
	pub filename: String,
	/// Leading `##` comment block joined with [`LINE_BREAK`]. Empty when the
	/// file does not open with a description.
	pub description: String,
	/// Trigger names in source order.
	pub triggers: Vec<String>,
}

impl WorkflowRecord {
	pub fn has_trigger(&self, name: &str) -> bool {
		self.triggers.iter().any(|trigger| trigger == name)
	}

	pub fn runs_on_push(&self) -> bool {
		self.has_trigger(PUSH_TRIGGER)
	}

	pub fn runs_on_pull_request(&self) -> bool {
		self.has_trigger(PULL_REQUEST_TRIGGER)
	}
}

/// Read and summarize the workflow at `path`. The record's filename is the
/// path's final component.
pub fn read_workflow(path: &Path) -> WfdocResult<WorkflowRecord> {
	let content = std::fs::read_to_string(path).map_err(|source| {
		WfdocError::ReadWorkflow {
			path: path.to_path_buf(),
			source,
		}
	})?;
	let filename = path
		.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_default();

	parse_workflow(&filename, &content).map_err(|error| {
		match error {
			WfdocError::ParseWorkflow { reason, .. } => {
				WfdocError::ParseWorkflow {
					path: path.to_path_buf(),
					reason,
				}
			}
			other => other,
		}
	})
}

/// Summarize workflow `content` that was loaded from a file named `filename`.
pub fn parse_workflow(filename: &str, content: &str) -> WfdocResult<WorkflowRecord> {
	let description = extract_description(content);
	let triggers = extract_triggers(content).map_err(|e| {
		WfdocError::ParseWorkflow {
			path: filename.into(),
			reason: e.to_string(),
		}
	})?;

	tracing::debug!(
		filename,
		has_description = !description.is_empty(),
		triggers = triggers.len(),
		"extracted workflow"
	);

	Ok(WorkflowRecord {
		filename: filename.to_string(),
		description,
		triggers,
	})
}

/// Collect the description block at the very top of a workflow file.
///
/// The block must start on the first line. It runs over consecutive lines
/// whose trimmed text starts with `##` and ends at the first line that does
/// not, so `##` lines further down never count.
pub fn extract_description(content: &str) -> String {
	let mut lines = Vec::new();

	for line in content.lines() {
		let Some(text) = line.trim().strip_prefix(DESCRIPTION_MARKER) else {
			break;
		};
		lines.push(text.trim_start());
	}

	lines.join(LINE_BREAK)
}

/// Failure to read the trigger field out of a workflow document.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
	#[error(transparent)]
	Yaml(#[from] serde_yaml_ng::Error),
	#[error("expected a mapping at the top level")]
	NotAMapping,
}

/// Parse `content` as YAML and return the names under the top-level `on`
/// key.
///
/// A missing key, an empty document or an unsupported shape yields an empty
/// list. Only documents that are not valid YAML, or whose top level is not a
/// mapping, are errors. Only the first document of a multi-document stream is
/// read.
pub fn extract_triggers(content: &str) -> Result<Vec<String>, TriggerError> {
	let document = match serde_yaml_ng::Deserializer::from_str(content).next() {
		Some(document) => Value::deserialize(document)?,
		None => Value::Null,
	};

	match document {
		Value::Null => Ok(Vec::new()),
		Value::Mapping(mapping) => {
			Ok(mapping
				.get(TRIGGER_KEY)
				.map(trigger_names)
				.unwrap_or_default())
		}
		_ => Err(TriggerError::NotAMapping),
	}
}

fn trigger_names(value: &Value) -> Vec<String> {
	let names: Vec<&str> = match value {
		Value::Mapping(mapping) => mapping.iter().filter_map(|(key, _)| key.as_str()).collect(),
		Value::Sequence(items) => items.iter().filter_map(Value::as_str).collect(),
		Value::String(name) => vec![name.as_str()],
		_ => Vec::new(),
	};

	let mut triggers: Vec<String> = Vec::with_capacity(names.len());
	for name in names {
		if !triggers.iter().any(|existing| existing == name) {
			triggers.push(name.to_string());
		}
	}

	triggers
}
