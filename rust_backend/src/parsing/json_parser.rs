use anyhow::{Context, Result};
use std::path::Path;

use crate::core::domain::ColumnRouter;

/// Parse a router description file into a [`ColumnRouter`]
pub fn parse_router_json(json_path: &Path) -> Result<ColumnRouter> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read router description: {}", json_path.display()))?;

    parse_router_json_str(&json_content)
}

/// Parse a router description from a JSON string
pub fn parse_router_json_str(json_str: &str) -> Result<ColumnRouter> {
    // First validate that it's valid JSON
    let json_value: serde_json::Value = serde_json::from_str(json_str).with_context(|| {
        let preview = if json_str.len() > 500 {
            format!("{}...", &json_str[..500])
        } else {
            json_str.to_string()
        };
        format!("Invalid JSON syntax. First 500 chars: {}", preview)
    })?;

    // Check the top-level shape before deserializing
    if !json_value.is_object() || json_value.get("groups").is_none() {
        anyhow::bail!(
            "Router description must contain a 'groups' key. Found keys: {:?}",
            json_value
                .as_object()
                .map(|o| o.keys().collect::<Vec<_>>())
        );
    }

    let router: ColumnRouter = serde_json::from_value(json_value)
        .context("Router description does not match the expected structure")?;

    Ok(router)
}
