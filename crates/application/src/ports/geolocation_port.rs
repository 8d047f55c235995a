//! One-shot user position port

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for asking where the user currently is
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Resolve the current position once
    async fn current_position(&self) -> Result<GeoLocation, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeolocationPort>();
    }

    #[tokio::test]
    async fn mock_can_fail() {
        let mut mock = MockGeolocationPort::new();
        mock.expect_current_position()
            .returning(|| Err(ApplicationError::ExternalService("denied".to_string())));
        assert!(mock.current_position().await.is_err());
    }
}
