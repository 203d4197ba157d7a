use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SettingItem {
    pub value: String,
    #[serde(default)]
    pub display_name: String,
}

// Option lists behind the pick-and-send flow: endpoint specs, request
// groups and the detail specs of each group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub urls: Vec<SettingItem>,
    #[serde(default)]
    pub types: Vec<SettingItem>,
    #[serde(default)]
    pub details: HashMap<String, Vec<SettingItem>>,
}

impl Settings {
    // A missing settings file is not an error, it just means empty lists.
    pub fn load(path: &Path) -> Result<Settings> {
        if !path.is_file() {
            return Ok(Settings::default());
        }
        let text = fs::read_to_string(path)
            .context(format!("while reading settings file {}", path.display()))?;
        let settings = serde_json::from_str(&text)
            .context(format!("while parsing settings file {}", path.display()))?;
        return Ok(settings);
    }

    pub fn details_for_type(&self, type_value: &str) -> &[SettingItem] {
        return self.details.get(type_value).map(Vec::as_slice).unwrap_or(&[]);
    }
}

// Selection order: an explicitly requested name has to exist; without one a
// remembered value that is still configured wins; otherwise the first item.
pub fn select<'a>(
    items: &'a [SettingItem],
    requested: Option<&str>,
    remembered: Option<&str>,
) -> Result<Option<&'a SettingItem>> {
    if let Some(requested) = requested {
        return match items
            .iter()
            .find(|item| item.display_name == requested || item.value == requested)
        {
            Some(item) => Ok(Some(item)),
            None => Err(anyhow!("no configured entry named '{}'", requested)),
        };
    }
    if let Some(remembered) = remembered {
        if let Some(item) = items.iter().find(|item| item.value == remembered) {
            return Ok(Some(item));
        }
    }
    return Ok(items.first());
}
