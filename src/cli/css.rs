//! Css command implementation

use anyhow::{Context, Result};

use article_params::config::Config;
use article_params::store::{SettingsStore, StyleScope};

/// Print the style scope of the configured default settings
pub fn css_command(config: &Config, json: bool) -> Result<()> {
    let store = SettingsStore::new(config.default_settings());
    let scope = store.style_scope();

    if json {
        let rendered = serde_json::to_string_pretty(&scope_to_json(&scope))
            .context("Failed to serialize style scope")?;
        println!("{}", rendered);
    } else {
        println!("{}", scope.to_inline_style());
    }

    Ok(())
}

/// Custom properties as a JSON object, in scope order
fn scope_to_json(scope: &StyleScope) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = scope
        .iter()
        .map(|(name, value)| (name.to_string(), serde_json::Value::String(value.to_string())))
        .collect();
    serde_json::Value::Object(map)
}
