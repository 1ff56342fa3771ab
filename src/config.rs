use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::policy::NumericPolicy;

/// User preferences. Persisted through eframe storage so the theme and the
/// sidebar survive a restart; tool state is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // new fields fall back to their defaults when loading old state
pub struct ToolboxConfig {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
    pub numeric_policy: NumericPolicy,
    /// How long a copy button shows its "copied" state, in seconds
    pub copied_indicator_secs: f64,
    /// How long a toast stays on screen, in seconds
    pub notification_secs: f64,
    /// Where native builds write exported files. `None` means the working directory.
    pub export_dir: Option<PathBuf>,
}

impl Default for ToolboxConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            sidebar_collapsed: false,
            numeric_policy: NumericPolicy::PassThrough,
            copied_indicator_secs: 2.0,
            notification_secs: 1.0,
            export_dir: None,
        }
    }
}

impl ToolboxConfig {
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ToolboxConfig = serde_json::from_str(r#"{"dark_mode": false}"#).unwrap();
        assert!(!config.dark_mode);
        assert_eq!(config.copied_indicator_secs, 2.0);
        assert_eq!(config.notification_secs, 1.0);
        assert_eq!(config.numeric_policy, NumericPolicy::PassThrough);
    }
}
