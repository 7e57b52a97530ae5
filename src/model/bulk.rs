use serde::{Deserialize, Serialize};

use crate::model::account::{InventoryDto, MatchDto, ProfileDto, WalletDto};

/// One row of a bulk credential check.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CredentialRow {
    pub username: String,
    pub password: String,
}

/// One row of a bulk registration.
///
/// Fields are kept as submitted; the region is coerced per row so one bad value only fails
/// its own row.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrationRow {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub region: String,
    pub country: String,
}

/// Outcome of one bulk row, in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowStatus {
    pub username: String,
    pub success: bool,
    pub status: String,
}

/// Full per-user snapshot for tabular export.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountExport {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub profile: ProfileDto,
    pub wallet: WalletDto,
    pub inventory: InventoryDto,
    pub match_history: Vec<MatchDto>,
}
