//! `wfdoc_core` turns a directory of GitHub Actions workflow files into a
//! markdown summary table.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Workflow directory
//!   → Scanner (lists `*.yml` / `*.yaml` files, no recursion)
//!   → Extractor (leading `##` description block + top-level `on` triggers)
//!   → Renderer (title, header, one row per workflow)
//!   → Output file
//! ```
//!
//! A workflow that opens with
//!
//! ```yaml
//! ## Build and test on every change.
//! ## Publishes coverage.
//! on: [push, pull_request]
//! ```
//!
//! becomes the row
//!
//! ```markdown
//! | [ci.yml](.github/workflows/ci.yml) | Build and test on every change.<br>Publishes coverage. | push, pull_request |
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `wfdoc.toml` and merging with
//!   command line overrides.
//! - [`paths`] — Lexical path helpers used to build portable file links.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use wfdoc_core::TableOptions;
//! use wfdoc_core::generate;
//!
//! let generation = generate(
//! 	Path::new(".github/workflows"),
//! 	Path::new("workflows.md"),
//! 	&TableOptions::default(),
//! )
//! .unwrap();
//!
//! for skipped in &generation.skipped {
//! 	eprintln!("skipped {}: {}", skipped.path.display(), skipped.error);
//! }
//! ```

pub use config::*;
pub use error::*;
pub use generate::*;
pub use render::*;
pub use scanner::*;
pub use workflow::*;

pub mod config;
#[allow(unused_assignments)]
mod error;
mod generate;
pub mod paths;
mod render;
mod scanner;
mod workflow;
