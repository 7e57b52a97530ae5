use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The username or the email is already taken. Which one is deliberately not reported.
    #[error("Username or email already exists")]
    DuplicateIdentity,
}
