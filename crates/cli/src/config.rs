use anyhow::{Context, Result, anyhow};
use parseargs::{OptionSchema, ParseConfig};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a full configuration object (`{"argv": ..., "strict": ..., "options": ...}`).
pub fn load_config(path: &Path) -> Result<ParseConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config JSON: {}", path.display()))?;
    ParseConfig::from_json(&value)
        .map_err(|e| anyhow!("{} [{}]", e, e.code()))
        .with_context(|| format!("invalid config: {}", path.display()))
}

/// Parse an inline option schema (`{"name": {"type": "string"}, ...}`).
pub fn parse_schema(raw: &str) -> Result<OptionSchema> {
    let value: Value = serde_json::from_str(raw).context("failed to parse --schema JSON")?;
    OptionSchema::from_json(&value)
        .map_err(|e| anyhow!("{} [{}]", e, e.code()))
        .context("invalid --schema")
}
