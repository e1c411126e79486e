use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use wordfreq_engine::CountSettings;
use wordfreq_logging::wf_info;

/// Load settings from a RON file, or the defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<CountSettings> {
    let Some(path) = path else {
        return Ok(CountSettings::default());
    };

    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read config {path:?}"))?;
    let settings = parse_settings(&content)
        .with_context(|| format!("failed to parse config {path:?}"))?;
    wf_info!("Loaded settings from {:?}", path);
    Ok(settings)
}

fn parse_settings(content: &str) -> Result<CountSettings> {
    Ok(ron::from_str(content)?)
}
