use chrono::NaiveDateTime;
use thiserror::Error;

/// Reasons a login attempt is refused.
///
/// `InvalidCredentials` covers both an unknown username and a wrong password so callers cannot
/// tell the two apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Credentials do not match")]
    InvalidCredentials,
    #[error("Account is permanently banned")]
    PermanentlyBanned,
    #[error("Account is temporarily banned until {}", format_until(.until))]
    TemporarilyBanned { until: Option<NaiveDateTime> },
    #[error("Account is suspended until {}", format_until(.until))]
    Suspended { until: Option<NaiveDateTime> },
    #[error("Account is locked")]
    Locked,
}

fn format_until(until: &Option<NaiveDateTime>) -> String {
    match until {
        Some(until) => until.format("%Y-%m-%d %H:%M").to_string(),
        None => "further notice".to_string(),
    }
}
