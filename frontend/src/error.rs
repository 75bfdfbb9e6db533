use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Gateway responded with status {status} for {path}")]
    Status { path: String, status: u16 },
    #[error("Could not decode response from {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("Could not encode request body: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for GatewayError {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(err) => GatewayError::Encode(err.to_string()),
            other => GatewayError::Transport(other.to_string()),
        }
    }
}

/// Why a form submission was dropped before reaching the gateway.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
}
