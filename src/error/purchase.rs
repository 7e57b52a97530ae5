use thiserror::Error;

/// Reasons the store refuses a purchase, in the order the checks run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("No price found for skin {0:?}")]
    PriceNotFound(String),
    #[error("No wallet found for user ID {0}")]
    WalletNotFound(i32),
    #[error("Skin {0:?} is already owned")]
    AlreadyOwned(String),
    #[error("Every skin in bundle {0:?} is already owned")]
    AllOwned(String),
    #[error("Bundle ID {0} not found")]
    BundleNotFound(i32),
    #[error("Insufficient VP: {required} required, {available} available")]
    InsufficientFunds { required: i64, available: i32 },
}
