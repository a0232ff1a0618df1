use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum WfdocError {
	#[error(transparent)]
	#[diagnostic(code(wfdoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read workflows directory `{}`", path.display())]
	#[diagnostic(
		code(wfdoc::read_dir),
		help("pass an existing directory with `--workflows` or set `workflows` in wfdoc.toml")
	)]
	ReadDir {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to read workflow file `{}`", path.display())]
	#[diagnostic(code(wfdoc::read_workflow))]
	ReadWorkflow {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse workflow file `{}`: {reason}", path.display())]
	#[diagnostic(
		code(wfdoc::parse_workflow),
		help("the file must be a valid YAML document with a mapping at the top level")
	)]
	ParseWorkflow { path: PathBuf, reason: String },

	#[error("failed to write output file `{}`", path.display())]
	#[diagnostic(
		code(wfdoc::write_output),
		help("check that the parent directory exists and the path is not a directory")
	)]
	WriteOutput {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to read config file `{}`", path.display())]
	#[diagnostic(code(wfdoc::read_config))]
	ReadConfig {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(wfdoc::config_parse),
		help("check that wfdoc.toml is valid TOML with `workflows`, `output`, `title` or `layout` keys")
	)]
	ConfigParse(String),
}

pub type WfdocResult<T> = Result<T, WfdocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
