//! Persistent storage port for user-created markers
//!
//! The whole collection is read at startup and overwritten on every change.

use async_trait::async_trait;
use domain::entities::CustomMarker;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the single slot holding all custom markers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MarkerStoragePort: Send + Sync {
    /// Read every stored marker
    ///
    /// An absent slot yields an empty list.
    async fn load(&self) -> Result<Vec<CustomMarker>, ApplicationError>;

    /// Replace the stored collection
    async fn save(&self, markers: &[CustomMarker]) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn MarkerStoragePort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn MarkerStoragePort>();
    }
}
