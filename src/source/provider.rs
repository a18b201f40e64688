//! Directory source trait definition

use crate::error::FetchError;
use crate::models::Person;

/// Anything that can hand over the full directory in one go
pub trait UserSource: Send + Sync {
    /// Retrieve every person record
    ///
    /// # Returns
    /// The records in the order the source delivered them. A payload of
    /// the wrong shape yields an empty list, not an error.
    fn fetch_users(&self) -> Result<Vec<Person>, FetchError>;

    /// Name of this source for logs and status lines
    fn name(&self) -> &str;
}
