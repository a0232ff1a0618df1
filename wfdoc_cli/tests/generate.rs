mod common;

use rstest::rstest;
use similar_asserts::assert_eq;
use wfdoc_core::AnyEmptyResult;

#[test]
fn generate_writes_summary() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_workflows(
		tmp.path(),
		&[
			("a.yml", "## Desc A\non: push"),
			("b.yaml", "on: [push, pull_request]"),
			("c.txt", "## Ignored\non: push"),
		],
	)?;

	common::wfdoc_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Successfully generated"));

	let content = std::fs::read_to_string(tmp.path().join("workflows.md"))?;
	assert_eq!(
		content,
		"# GitHub Workflows Summary\n\n| Filename | Description | Triggers |\n| --- | --- | --- \
		 |\n| [a.yml](.github/workflows/a.yml) | Desc A | push |\n| \
		 [b.yaml](.github/workflows/b.yaml) |  | push, pull_request |\n"
	);

	Ok(())
}

#[test]
fn gen_alias_with_explicit_paths() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("pipelines"))?;
	std::fs::create_dir_all(tmp.path().join("docs"))?;
	std::fs::write(
		tmp.path().join("pipelines").join("release.yml"),
		"## Publish a release\n## Runs on tags\non:\n  push:\n    tags: ['v*']\n",
	)?;

	common::wfdoc_cmd()
		.current_dir(tmp.path())
		.arg("gen")
		.arg("-w")
		.arg("pipelines")
		.arg("-o")
		.arg("docs/workflows.md")
		.assert()
		.success();

	let content = std::fs::read_to_string(tmp.path().join("docs").join("workflows.md"))?;
	assert!(content.contains(
		"| [release.yml](../pipelines/release.yml) | Publish a release<br>Runs on tags | push |"
	));

	Ok(())
}

#[rstest]
#[case::workflows_only(&["-w", ".github/workflows"], "workflows.md", ".github/workflows/ci.yml")]
#[case::output_only(&["-o", "docs/workflows.md"], "docs/workflows.md", "../.github/workflows/ci.yml")]
fn generate_links_with_one_path_flag(
	#[case] flags: &[&str],
	#[case] output: &str,
	#[case] link: &str,
) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_workflows(tmp.path(), &[("ci.yml", "## CI\non: push\n")])?;
	std::fs::create_dir_all(tmp.path().join("docs"))?;

	common::wfdoc_cmd()
		.current_dir(tmp.path())
		.arg("generate")
		.args(flags)
		.assert()
		.success();

	let content = std::fs::read_to_string(tmp.path().join(output))?;
	assert!(
		content.contains(&format!("| [ci.yml]({link}) | CI | push |")),
		"unexpected table:\n{content}"
	);

	Ok(())
}

#[rstest]
#[case::flag(&["--layout", "checkmarks"], "")]
#[case::config(&[], "layout = \"checkmarks\"\n")]
fn generate_checkmark_layout(#[case] flags: &[&str], #[case] config: &str) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_workflows(
		tmp.path(),
		&[
			("ci.yml", "## CI\non: [push, pull_request]\n"),
			("nightly.yml", "on:\n  schedule:\n    - cron: '0 0 * * *'\n"),
		],
	)?;
	if !config.is_empty() {
		std::fs::write(tmp.path().join("wfdoc.toml"), config)?;
	}

	common::wfdoc_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.args(flags)
		.assert()
		.success();

	let content = std::fs::read_to_string(tmp.path().join("workflows.md"))?;
	assert_eq!(
		content,
		"# GitHub Workflows Summary\n\n| Filename | Description | On Push | On PR |\n| --- | --- | \
		 :---: | :---: |\n| [ci.yml](.github/workflows/ci.yml) | CI | ✓ | ✓ |\n| \
		 [nightly.yml](.github/workflows/nightly.yml) |  |  |  |\n"
	);

	Ok(())
}

#[test]
fn generate_uses_config_title_and_paths() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("ci"))?;
	std::fs::write(tmp.path().join("ci").join("lint.yaml"), "## Lint\non: pull_request\n")?;
	std::fs::write(
		tmp.path().join(".wfdoc.toml"),
		"workflows = \"ci\"\noutput = \"CI.md\"\ntitle = \"Pipelines\"\n",
	)?;

	common::wfdoc_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let content = std::fs::read_to_string(tmp.path().join("CI.md"))?;
	assert_eq!(
		content,
		"# Pipelines\n\n| Filename | Description | Triggers |\n| --- | --- | --- |\n| \
		 [lint.yaml](ci/lint.yaml) | Lint | pull_request |\n"
	);

	Ok(())
}

#[test]
fn generate_skips_malformed_files_with_warning() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_workflows(
		tmp.path(),
		&[
			("bad.yml", "## Broken\non: [push\n"),
			("good.yml", "## Good\non: push\n"),
		],
	)?;

	common::wfdoc_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::contains("warning:"))
		.stderr(predicates::str::contains("bad.yml"));

	let content = std::fs::read_to_string(tmp.path().join("workflows.md"))?;
	assert!(content.contains("| [good.yml](.github/workflows/good.yml) | Good | push |"));
	assert!(!content.contains("bad.yml"));

	Ok(())
}

#[test]
fn generate_logs_skipped_files_by_default() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_workflows(tmp.path(), &[("bad.yml", "on: [push\n")])?;

	common::wfdoc_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::contains("WARN"))
		.stderr(predicates::str::contains("skipping workflow file"));

	Ok(())
}

#[test]
fn generate_dry_run_prints_without_writing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_workflows(tmp.path(), &[("ci.yml", "## CI\non: push\n")])?;

	common::wfdoc_cmd()
		.arg("generate")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("# GitHub Workflows Summary"))
		.stdout(predicates::str::contains(
			"| [ci.yml](.github/workflows/ci.yml) | CI | push |",
		));

	assert!(!tmp.path().join("workflows.md").exists());

	Ok(())
}

#[test]
fn generate_missing_directory_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::wfdoc_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to read workflows directory"));

	assert!(!tmp.path().join("workflows.md").exists());

	Ok(())
}

#[test]
fn generate_unwritable_output_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_workflows(tmp.path(), &[("ci.yml", "on: push\n")])?;

	common::wfdoc_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.arg("--output")
		.arg(tmp.path().join("missing").join("workflows.md"))
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to write output file"));

	Ok(())
}

#[test]
fn invalid_config_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_workflows(tmp.path(), &[("ci.yml", "on: push\n")])?;
	std::fs::write(tmp.path().join("wfdoc.toml"), "layout = \"columns\"\n")?;

	common::wfdoc_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}

#[test]
fn no_subcommand_fails() {
	common::wfdoc_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));
}
