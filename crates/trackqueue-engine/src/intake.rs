//! Submission intake and the queue config switch.

use tracing::{info, warn};
use trackqueue_models::{NewSubmission, QueueConfig, Submission};
use url::Url;

use crate::error::{QueueError, Result};
use crate::queue::SubmissionQueue;

const SOUNDCLOUD_HOST: &str = "soundcloud.com";

/// Checks that `link` is an http(s) URL on soundcloud.com or a subdomain of it.
///
/// Returns the trimmed link.
pub fn validate_link(link: &str) -> Result<String> {
    let link = link.trim();
    if link.is_empty() {
        return Err(QueueError::InvalidInput("soundcloud link is required".into()));
    }

    let url = Url::parse(link)
        .map_err(|e| QueueError::InvalidInput(format!("invalid link {:?}: {}", link, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(QueueError::InvalidInput(format!(
            "link must use http or https, got {}",
            url.scheme()
        )));
    }

    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    let is_soundcloud =
        host == SOUNDCLOUD_HOST || host.ends_with(&format!(".{}", SOUNDCLOUD_HOST));
    if !is_soundcloud {
        return Err(QueueError::InvalidInput(format!(
            "link must point to soundcloud.com, got {}",
            host
        )));
    }

    Ok(link.to_string())
}

/// Normalises an optional contact email. Blank counts as absent.
pub fn validate_email(email: Option<&str>) -> Result<Option<String>> {
    let Some(email) = email.map(str::trim).filter(|e| !e.is_empty()) else {
        return Ok(None);
    };

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(Some(email.to_string()))
        }
        _ => Err(QueueError::InvalidInput(format!("invalid email {:?}", email))),
    }
}

impl SubmissionQueue {
    /// Validates and stores a new submission.
    ///
    /// The submission gets no explicit order key, so it sorts by its
    /// creation time until it is moved.
    pub async fn submit(&self, new: NewSubmission) -> Result<Submission> {
        if !self.store.load_config().await?.submission_enabled {
            warn!("Rejected submission while intake is closed");
            return Err(QueueError::SubmissionsClosed);
        }

        let new = NewSubmission {
            soundcloud_link: validate_link(&new.soundcloud_link)?,
            email: validate_email(new.email.as_deref())?,
            priority: new.priority,
        };

        let submission = self.store.create(new).await?;
        info!(id = %submission.id, priority = submission.priority, "Accepted submission");
        Ok(submission)
    }

    /// Returns the current queue config.
    pub async fn config(&self) -> Result<QueueConfig> {
        Ok(self.store.load_config().await?)
    }

    /// Opens or closes intake.
    pub async fn set_submissions_enabled(&self, enabled: bool) -> Result<QueueConfig> {
        let mut config = self.store.load_config().await?;
        config.submission_enabled = enabled;
        self.store.save_config(config).await?;
        info!(enabled, "Updated submission intake");
        Ok(config)
    }
}
