//! Run configuration: environment settings merged with command-line flags

use cineprompt_config::{AppConfig, OutputFormat};
use cineprompt_ipc::ShotConfig;

/// Settings for one invocation of the binary
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub output: OutputFormat,
    /// Overrides `location.smartFilterEnabled` of every snapshot when set
    pub smart_filter: Option<bool>,
}

impl RunConfig {
    /// Read CINEPROMPT_* variables; `--json` on the command line wins
    pub fn from_env(json_flag: bool) -> Self {
        Self::merge(AppConfig::from_env(), json_flag)
    }

    fn merge(app: AppConfig, json_flag: bool) -> Self {
        Self {
            output: if json_flag { OutputFormat::Json } else { app.output },
            smart_filter: app.smart_filter_override,
        }
    }

    /// Apply process-wide overrides to a snapshot before composing
    pub fn apply_to(&self, shot: &mut ShotConfig) {
        if let Some(enabled) = self.smart_filter {
            shot.location.smart_filter_enabled = enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_wins() {
        let app = AppConfig {
            output: OutputFormat::Text,
            smart_filter_override: None,
        };
        assert_eq!(RunConfig::merge(app.clone(), true).output, OutputFormat::Json);
        assert_eq!(RunConfig::merge(app, false).output, OutputFormat::Text);
    }

    #[test]
    fn test_smart_filter_override() {
        let config = RunConfig::merge(
            AppConfig {
                output: OutputFormat::Text,
                smart_filter_override: Some(false),
            },
            false,
        );
        let mut shot = ShotConfig::default();
        assert!(shot.location.smart_filter_enabled);
        config.apply_to(&mut shot);
        assert!(!shot.location.smart_filter_enabled);

        let untouched = RunConfig::default();
        let mut shot = ShotConfig::default();
        untouched.apply_to(&mut shot);
        assert!(shot.location.smart_filter_enabled);
    }
}
