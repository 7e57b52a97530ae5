//! Helpers shared by the integration tests.

use entity::sea_orm_active_enums::Region;
use sea_orm::DatabaseConnection;
use skinvault::{model::account::RegistrationRequest, service::auth::AuthService};

pub const TEST_PASSWORD: &str = "correct horse battery staple";

pub fn registration(username: &str) -> RegistrationRequest {
    RegistrationRequest {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: TEST_PASSWORD.to_string(),
        name: format!("{} Player", username),
        region: Region::Na,
        country: "Canada".to_string(),
    }
}

/// Registers a user through the service so it has a real password hash
pub async fn register_user(db: &DatabaseConnection, username: &str) -> i32 {
    AuthService::new(db)
        .register(registration(username))
        .await
        .expect("registration should succeed")
}
