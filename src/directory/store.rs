use async_trait::async_trait;

use crate::error::BackendError;
use crate::models::UserProfile;

/// Fixed page size of a directory query. The backend caps every result set at
/// this many documents; filtering happens client-side on the returned page.
pub const DIRECTORY_PAGE_SIZE: usize = 20;

/// Queryable store of user profiles, ordered by display name.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch one page of profiles, ordered by display name and capped at
    /// [`DIRECTORY_PAGE_SIZE`].
    async fn query(&self) -> Result<Vec<UserProfile>, BackendError>;

    /// Look up a single profile by id.
    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, BackendError>;
}
