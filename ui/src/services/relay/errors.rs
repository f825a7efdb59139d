use thiserror::Error;

/// Failures while talking to the form-relay endpoint.
///
/// Server-side rejections are not errors at this level; the relay reports
/// them inside a well-formed response body and the client surfaces them as
/// [`RelayOutcome::Rejected`](super::RelayOutcome::Rejected).
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Invalid relay response: {message}")]
    InvalidResponse { message: String },
}

pub type RelayResult<T> = Result<T, RelayError>;
