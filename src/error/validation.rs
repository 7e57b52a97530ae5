use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid level {0:?}, expected a whole number of at least 1")]
    InvalidLevel(String),
    #[error("Unknown region {0:?}")]
    InvalidRegion(String),
    #[error("Unknown rank {0:?}")]
    InvalidRank(String),
    #[error("Unknown match result {0:?}")]
    InvalidMatchResult(String),
    #[error("Invalid VP price {price} for skin {skin:?}")]
    InvalidPrice { skin: String, price: i32 },
}
