use thiserror::Error;

/// Generic error type used by service layer functions.
///
/// The `Display` text of each variant is the message clients receive in the
/// error envelope.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Required input is missing or could not be coerced to its type.
    #[error("bad request")]
    BadRequest,
    /// Requested resource was not found.
    #[error("resource not found")]
    NotFound,
    /// The route exists but does not accept the request method.
    #[error("method not allowed")]
    MethodNotAllowed,
    /// Input is well-formed but cannot be applied.
    #[error("unprocessable")]
    Unprocessable,
    /// An unexpected internal error occurred.
    #[error("internal server error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
