use serde::{Deserialize, Serialize};

use crate::model::account::{InventoryDto, MatchDto, ProfileDto};

/// Unauthenticated view of an account reachable through a shareable link.
///
/// Carries no credentials, email or wallet balances.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicProfile {
    pub username: String,
    pub details: ProfileDto,
    pub inventory: InventoryDto,
    pub match_history: Vec<MatchDto>,
}
