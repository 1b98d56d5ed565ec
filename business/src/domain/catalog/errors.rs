/// Failures while looking up products or stock in the remote catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.not_found")]
    NotFound,
    #[error("catalog.transport")]
    Transport,
    #[error("catalog.timeout")]
    Timeout,
    #[error("catalog.unexpected_status")]
    UnexpectedStatus(u16),
    #[error("catalog.invalid_response")]
    InvalidResponse,
    #[error("catalog.invalid_url")]
    InvalidUrl,
}
