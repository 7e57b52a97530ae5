//! Factory functions for generating mock account database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable for
//! unit tests of pure rules such as the login gate.

use chrono::Utc;
use entity::sea_orm_active_enums::{BanKind, ModerationStatus, Rank, Region};

use crate::{
    constant::{TEST_COUNTRY, TEST_EMAIL_DOMAIN, TEST_PASSWORD_HASH},
    model::{ProfileModel, UserModel},
};

/// Create a mock active user model with no ban.
pub fn mock_user_model(id: i32, username: &str) -> UserModel {
    UserModel {
        id,
        username: username.to_string(),
        email: format!("{}@{}", username.to_lowercase(), TEST_EMAIL_DOMAIN),
        password_hash: TEST_PASSWORD_HASH.to_string(),
        status: ModerationStatus::Active,
        ban_kind: BanKind::NoBan,
        ban_reason: None,
        suspension_end: None,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock level 1 unranked profile model.
pub fn mock_profile_model(user_id: i32, email_verified: bool) -> ProfileModel {
    ProfileModel {
        user_id,
        name: "Test Player".to_string(),
        region: Region::Eu,
        country: TEST_COUNTRY.to_string(),
        level: 1,
        rank: Rank::Unranked,
        episode: None,
        act: None,
        registration_date: Utc::now().date_naive(),
        phone_verified: false,
        email_verified,
    }
}
