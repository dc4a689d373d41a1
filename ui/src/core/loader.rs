//! One-shot loading of the dashboard snapshot.
//!
//! The view owns the in-flight future, so dropping the view cancels the read.
//! Every load races the read against a timeout and resolves to either a parsed
//! snapshot or a [`LoadError`]; nothing here retries on its own.

use std::pin::pin;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, Either};
use tracing::{debug, info, warn};

use super::config::DataSource;
use super::error::LoadError;
use super::platform::{self, Platform};
use super::snapshot::DashboardSnapshot;

/// What the dashboard view can currently show.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Rc<DashboardSnapshot>),
    Failed(LoadError),
}

impl LoadState {
    /// Map a pending (`None`) or finished load into a view state.
    pub fn from_outcome(outcome: Option<&Result<Rc<DashboardSnapshot>, LoadError>>) -> Self {
        match outcome {
            None => LoadState::Loading,
            Some(Ok(snapshot)) => LoadState::Loaded(Rc::clone(snapshot)),
            Some(Err(err)) => LoadState::Failed(err.clone()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Read and parse the snapshot, giving up after `timeout`.
pub async fn load_snapshot(
    source: &DataSource,
    timeout: Duration,
) -> Result<DashboardSnapshot, LoadError> {
    info!(
        %source,
        platform = Platform::current().as_str(),
        "loading dashboard snapshot"
    );

    let read = pin!(fetch_body(source));
    let timer = pin!(platform::sleep(timeout));

    let body = match future::select(read, timer).await {
        Either::Left((body, _)) => body?,
        Either::Right(((), _)) => {
            let after_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
            warn!(%source, after_ms, "dashboard snapshot load timed out");
            return Err(LoadError::Timeout { after_ms });
        }
    };

    parse_snapshot(&body)
}

/// Parse a snapshot document and log any soft schema issues.
pub fn parse_snapshot(body: &str) -> Result<DashboardSnapshot, LoadError> {
    let snapshot: DashboardSnapshot = serde_json::from_str(body)?;

    for warning in snapshot.validate() {
        warn!(%warning, "dashboard snapshot schema warning");
    }
    debug!(
        total_patients = snapshot.total_patients,
        age_groups = snapshot.age_groups.len(),
        "dashboard snapshot parsed"
    );

    Ok(snapshot)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_body(source: &DataSource) -> Result<String, LoadError> {
    match source {
        DataSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
        DataSource::Url(url) => {
            let response = reqwest::get(url.as_str()).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    code: status.as_u16(),
                    text: status.canonical_reason().unwrap_or_default().to_string(),
                });
            }
            Ok(response.text().await?)
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_body(source: &DataSource) -> Result<String, LoadError> {
    use gloo_net::http::Request;

    match source {
        DataSource::Url(url) => {
            let response = Request::get(url).send().await?;
            if !response.ok() {
                return Err(LoadError::Status {
                    code: response.status(),
                    text: response.status_text(),
                });
            }
            Ok(response.text().await?)
        }
        DataSource::File(_) => Err(LoadError::Unsupported(
            "local files cannot be read from the browser",
        )),
    }
}
