//! Completed-session reporting -- POST work sessions to an HTTP endpoint.
//!
//! The endpoint accepts the record and may fail; from the scheduler's
//! perspective both outcomes look the same. The relay logs failures.

use reqwest::Client;
use serde_json::json;
use url::Url;

use super::Collaborator;
use crate::error::ReportError;
use crate::scheduler::SessionKind;

/// Reports completed work sessions to `<base_url>/api/session/complete`.
pub struct SessionReporter {
    endpoint: Url,
    client: Client,
    /// Work duration in minutes, as the endpoint expects.
    work_minutes: u32,
}

impl SessionReporter {
    /// Build a reporter for the given endpoint base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn new(base_url: &str, work_minutes: u32) -> Result<Self, ReportError> {
        let endpoint = Url::parse(base_url)?.join("/api/session/complete")?;
        Ok(Self {
            endpoint,
            client: Client::new(),
            work_minutes,
        })
    }

    /// POST one completed work session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the endpoint answers with a
    /// non-success status.
    pub async fn post_completion(&self) -> Result<(), ReportError> {
        let body = json!({
            "duration": self.work_minutes,
            "session_type": SessionKind::Work.as_str(),
            "completed": true,
        });

        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        if resp.status().is_success() {
            tracing::debug!(endpoint = %self.endpoint, "session reported");
            Ok(())
        } else {
            Err(ReportError::Http {
                status: resp.status().as_u16(),
            })
        }
    }
}

impl Collaborator for SessionReporter {
    fn name(&self) -> &str {
        "report"
    }

    fn on_work_session_completed(
        &self,
        _completed_work_sessions: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        // The hook is synchronous and work completions are minutes apart;
        // a throwaway current-thread runtime per call keeps the reporter
        // free of shared runtime state.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.post_completion())?;
        Ok(())
    }
}
