/// The catalog gateway server error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Internal error
    #[error("internal error: {0}")]
    InternalError(String),
    /// Cannot start the HTTP server
    #[error("starting server: {0}")]
    Server(#[source] std::io::Error),
}
