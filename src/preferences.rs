use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const PREFERENCES_FILE: &str = "userprefs.json";

// Last used selections of the pick-and-send flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPreferences {
    pub selected_url: Option<String>,
    pub selected_type: Option<String>,
    pub selected_detail: Option<String>,
}

impl UserPreferences {
    // A missing or unreadable preferences file starts fresh.
    pub fn load(path: &Path) -> UserPreferences {
        return fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
    }

    // Saving is best effort; a failure never blocks the request flow.
    pub fn save(&self, path: &Path) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_survive_a_save_and_load() {
        let file = std::env::temp_dir().join(format!("webprobe-prefs-{}.json", uuid::Uuid::new_v4()));
        let prefs = UserPreferences {
            selected_url: Some("http://localhost:8080".to_string()),
            selected_type: Some("values".to_string()),
            selected_detail: Some("GET;api/values".to_string()),
        };
        prefs.save(&file);
        let loaded = UserPreferences::load(&file);
        fs::remove_file(&file).ok();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn missing_file_loads_as_defaults() {
        let file = std::env::temp_dir().join(format!("webprobe-prefs-{}.json", uuid::Uuid::new_v4()));
        assert_eq!(UserPreferences::load(&file), UserPreferences::default());
    }

    #[test]
    fn malformed_file_loads_as_defaults() {
        let file = std::env::temp_dir().join(format!("webprobe-prefs-{}.json", uuid::Uuid::new_v4()));
        fs::write(&file, "{broken").unwrap();
        let loaded = UserPreferences::load(&file);
        fs::remove_file(&file).ok();
        assert_eq!(loaded, UserPreferences::default());
    }
}
