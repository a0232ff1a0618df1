#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn wfdoc_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("wfdoc"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Write `files` into `<root>/.github/workflows`.
pub fn write_workflows(root: &Path, files: &[(&str, &str)]) -> std::io::Result<()> {
	let dir = root.join(".github").join("workflows");
	std::fs::create_dir_all(&dir)?;
	for (name, content) in files {
		std::fs::write(dir.join(name), content)?;
	}

	Ok(())
}
