//! Queue-wide configuration singleton.

use serde::{Deserialize, Serialize};

/// Settings shared by every submitter and moderator of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueConfig {
    /// Whether new submissions are currently accepted.
    #[serde(default = "default_submission_enabled")]
    pub submission_enabled: bool,
}

fn default_submission_enabled() -> bool {
    true
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            submission_enabled: default_submission_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_submissions() {
        assert!(QueueConfig::default().submission_enabled);
    }

    #[test]
    fn test_missing_flag_defaults_to_enabled() {
        let config: QueueConfig = serde_json::from_str("{}").unwrap();
        assert!(config.submission_enabled);

        let config: QueueConfig = serde_json::from_str(r#"{"submissionEnabled":false}"#).unwrap();
        assert!(!config.submission_enabled);
    }
}
