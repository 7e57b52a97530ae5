/// Placeholder stored in `password_hash` for fixture users.
///
/// It is not a valid PHC string, so authenticating against a fixture user always fails unless
/// the user was created through the registration service.
pub const TEST_PASSWORD_HASH: &str = "fixture-password-hash";

/// Email domain used for fixture users, `<username>@skinvault.test`.
pub const TEST_EMAIL_DOMAIN: &str = "skinvault.test";

/// Country stored on fixture profiles.
pub const TEST_COUNTRY: &str = "Testland";
