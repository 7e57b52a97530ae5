use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{
    BanKind, InventoryCategory, MatchResult, ModerationStatus, Rank, Region,
};
use serde::{Deserialize, Serialize};

use crate::model::db::{
    InventoryItemModel, MatchRecordModel, ProfileModel, UserModel, WalletModel,
};

/// Result of a successful password check, consumed by the login gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub user_id: i32,
    pub status: ModerationStatus,
    pub ban_kind: BanKind,
    pub suspension_end: Option<NaiveDateTime>,
    /// False when the user has no profile row.
    pub email_verified: bool,
}

impl Credentials {
    pub fn from_models(user: &UserModel, profile: Option<&ProfileModel>) -> Self {
        Self {
            user_id: user.id,
            status: user.status,
            ban_kind: user.ban_kind,
            suspension_end: user.suspension_end,
            email_verified: profile.map(|p| p.email_verified).unwrap_or(false),
        }
    }
}

/// Successful outcomes of a login attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginOutcome {
    /// The user may start a session.
    Authenticated(i32),
    /// The email was unverified and has just been marked verified. No session is started on
    /// this attempt; the caller asks the user to log in again.
    EmailVerified(i32),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub region: Region,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub name: String,
    pub region: Option<Region>,
    pub country: String,
    pub level: i32,
    pub rank: Rank,
    pub episode: Option<String>,
    pub act: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub phone_verified: bool,
    pub email_verified: bool,
}

/// Zero-value profile returned for users without a profile row.
impl Default for ProfileDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            region: None,
            country: String::new(),
            level: 1,
            rank: Rank::Unranked,
            episode: None,
            act: None,
            registration_date: None,
            phone_verified: false,
            email_verified: false,
        }
    }
}

impl From<ProfileModel> for ProfileDto {
    fn from(profile: ProfileModel) -> Self {
        Self {
            name: profile.name,
            region: Some(profile.region),
            country: profile.country,
            level: profile.level,
            rank: profile.rank,
            episode: profile.episode,
            act: profile.act,
            registration_date: Some(profile.registration_date),
            phone_verified: profile.phone_verified,
            email_verified: profile.email_verified,
        }
    }
}

/// Typed partial update of a profile. Only `Some` fields are written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub region: Option<Region>,
    pub country: Option<String>,
    pub level: Option<i32>,
    pub rank: Option<Rank>,
    pub episode: Option<String>,
    pub act: Option<String>,
    pub phone_verified: Option<bool>,
    pub email_verified: Option<bool>,
}

/// Raw profile edit form as submitted by a UI. `None` means the field was left untouched.
///
/// Converted into a [`ProfileUpdate`] with [`crate::util::parse::profile_update_from_form`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub level: Option<String>,
    pub rank: Option<String>,
    pub episode: Option<String>,
    pub act: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDto {
    pub valorant_points: i32,
    pub radiant_points: i32,
    pub kingdom_points: i32,
}

impl From<WalletModel> for WalletDto {
    fn from(wallet: WalletModel) -> Self {
        Self {
            valorant_points: wallet.valorant_points,
            radiant_points: wallet.radiant_points,
            kingdom_points: wallet.kingdom_points,
        }
    }
}

/// Owned item names per category, in acquisition order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryDto {
    pub skins: Vec<String>,
    pub battlepass: Vec<String>,
    pub buddies: Vec<String>,
    pub agents: Vec<String>,
    pub cards: Vec<String>,
    pub titles: Vec<String>,
}

impl InventoryDto {
    pub fn category(&self, category: InventoryCategory) -> &[String] {
        match category {
            InventoryCategory::Skins => &self.skins,
            InventoryCategory::Battlepass => &self.battlepass,
            InventoryCategory::Buddies => &self.buddies,
            InventoryCategory::Agents => &self.agents,
            InventoryCategory::Cards => &self.cards,
            InventoryCategory::Titles => &self.titles,
        }
    }
}

/// Groups items by category, keeping the order they are given in.
impl From<Vec<InventoryItemModel>> for InventoryDto {
    fn from(items: Vec<InventoryItemModel>) -> Self {
        let mut inventory = Self::default();
        for item in items {
            let names = match item.category {
                InventoryCategory::Skins => &mut inventory.skins,
                InventoryCategory::Battlepass => &mut inventory.battlepass,
                InventoryCategory::Buddies => &mut inventory.buddies,
                InventoryCategory::Agents => &mut inventory.agents,
                InventoryCategory::Cards => &mut inventory.cards,
                InventoryCategory::Titles => &mut inventory.titles,
            };
            names.push(item.item_name);
        }

        inventory
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDto {
    pub date: NaiveDate,
    pub result: MatchResult,
    pub score: String,
    pub link: String,
}

impl From<MatchRecordModel> for MatchDto {
    fn from(record: MatchRecordModel) -> Self {
        Self {
            date: record.match_date,
            result: record.result,
            score: record.score,
            link: record.link,
        }
    }
}

/// Everything the account dashboard renders for one user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardDto {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub profile: ProfileDto,
    pub wallet: WalletDto,
    pub inventory: InventoryDto,
    pub match_history: Vec<MatchDto>,
    /// True once the profile holds any rank above Unranked.
    pub is_ranked: bool,
}
