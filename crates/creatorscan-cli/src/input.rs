//! Run-input loading and validation.

use std::path::Path;

use anyhow::Context;
use creatorscan_core::OperatorContext;
use serde::Deserialize;

/// One scan run's worth of input: the profile addresses to visit plus the
/// operator context stamped onto every row.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunInput {
    #[serde(default)]
    pub platform_links: Vec<String>,
    #[serde(flatten)]
    pub context: OperatorContext,
}

/// Loads and validates run input from a JSON file.
///
/// An empty (or absent) `platformLinks` list is a configuration error and
/// is surfaced here, before any processing starts.
pub fn load_run_input(path: &Path) -> anyhow::Result<RunInput> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read run input from {}", path.display()))?;
    parse_run_input(&raw)
}

fn parse_run_input(raw: &str) -> anyhow::Result<RunInput> {
    let input: RunInput = serde_json::from_str(raw).context("run input is not valid JSON")?;
    if input.platform_links.is_empty() {
        anyhow::bail!("no platform links provided; supply at least one creator profile URL");
    }
    Ok(input)
}
