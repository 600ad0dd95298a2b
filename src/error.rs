use crate::entry::Key;
use thiserror::Error as ThisError;

/// Convenience `Result` type for map lookups.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the ordered maps.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The queried key does not exist in the map.
    #[error("found no value by key '{0}'")]
    NotFound(Key),
}
