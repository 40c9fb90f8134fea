use crate::gps::GpsError;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Gps(#[from] GpsError),
}
