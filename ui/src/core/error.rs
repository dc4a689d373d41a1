use thiserror::Error;

/// Why the snapshot could not be loaded.
///
/// Carries rendered messages rather than source errors so it stays `Clone` and
/// can be passed to components as a prop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server answered {code} {text}")]
    Status { code: u16, text: String },
    #[error("dashboard data is malformed: {0}")]
    Malformed(String),
    #[error("could not read dashboard data: {0}")]
    Io(String),
    #[error("no response after {after_ms} ms")]
    Timeout { after_ms: u64 },
    #[error("{0}")]
    Unsupported(&'static str),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Network(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for LoadError {
    fn from(err: gloo_net::Error) -> Self {
        LoadError::Network(err.to_string())
    }
}
