//! Built-in starting state, store catalog and demo account.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{InventoryCategory, MatchResult, Rank, Region};

use crate::model::{
    account::{ProfileUpdate, RegistrationRequest, WalletDto},
    catalog::{BundleSeed, SkinSeed},
};

/// Balances credited to every new account.
pub const STARTING_WALLET: WalletDto = WalletDto {
    valorant_points: 1000,
    radiant_points: 200,
    kingdom_points: 300,
};

/// Items granted to every new account.
pub fn starting_inventory() -> Vec<(InventoryCategory, &'static str)> {
    vec![
        (InventoryCategory::Skins, "Classic Pistol"),
        (InventoryCategory::Skins, "Vandal"),
        (InventoryCategory::Agents, "Jett"),
        (InventoryCategory::Agents, "Phoenix"),
        (InventoryCategory::Battlepass, "Episode 1"),
        (InventoryCategory::Buddies, "Default Buddy"),
        (InventoryCategory::Cards, "Default Card"),
        (InventoryCategory::Titles, "Rookie"),
    ]
}

const GUN_VP: i32 = 1775;
const MELEE_VP: i32 = 3550;

fn bundle(name: &str, guns: [&str; 4], melee: &str) -> BundleSeed {
    let mut skins: Vec<SkinSeed> = guns
        .iter()
        .map(|gun| SkinSeed::new(gun, "gun", GUN_VP))
        .collect();
    skins.push(SkinSeed::new(melee, "melee", MELEE_VP));

    BundleSeed {
        name: name.to_string(),
        skins,
    }
}

pub fn default_bundles() -> Vec<BundleSeed> {
    vec![
        bundle(
            "Prime",
            ["Prime Vandal", "Prime Classic", "Prime Guardian", "Prime Spectre"],
            "Prime Karambit",
        ),
        bundle(
            "Oni",
            ["Oni Phantom", "Oni Guardian", "Oni Bucky", "Oni Shorty"],
            "Oni Claw",
        ),
        bundle(
            "Reaver",
            ["Reaver Vandal", "Reaver Operator", "Reaver Guardian", "Reaver Sheriff"],
            "Reaver Knife",
        ),
    ]
}

/// Skins sold outside any bundle.
pub fn default_skins() -> Vec<SkinSeed> {
    vec![
        SkinSeed::new("Elderflame Operator", "gun", 2475),
        SkinSeed::new("Glitchpop Vandal", "gun", 2175),
        SkinSeed::new("Ion Sheriff", "gun", 1775),
        SkinSeed::new("Magepunk Ghost", "gun", 1775),
        SkinSeed::new("Sovereign Ghost", "gun", 1775),
        SkinSeed::new("Singularity Phantom", "gun", 2175),
        SkinSeed::new("Spectrum Phantom", "gun", 2675),
    ]
}

pub const DEMO_USERNAME: &str = "demo";

pub fn demo_registration() -> RegistrationRequest {
    RegistrationRequest {
        username: DEMO_USERNAME.to_string(),
        email: "demo@valorant.com".to_string(),
        password: "valorant123".to_string(),
        name: "Demo Player".to_string(),
        region: Region::Eu,
        country: "France".to_string(),
    }
}

pub fn demo_profile() -> ProfileUpdate {
    ProfileUpdate {
        level: Some(45),
        rank: Some(Rank::Platinum),
        phone_verified: Some(true),
        email_verified: Some(true),
        ..Default::default()
    }
}

pub const DEMO_WALLET: WalletDto = WalletDto {
    valorant_points: 1200,
    radiant_points: 300,
    kingdom_points: 500,
};

/// Items the demo account holds on top of the starting inventory.
pub fn demo_inventory() -> Vec<(InventoryCategory, &'static str)> {
    vec![
        (InventoryCategory::Skins, "Prime Vandal"),
        (InventoryCategory::Skins, "Elderflame Operator"),
        (InventoryCategory::Agents, "Sage"),
        (InventoryCategory::Battlepass, "Episode 6"),
        (InventoryCategory::Buddies, "Valorant Buddy"),
        (InventoryCategory::Cards, "Valorant Card"),
        (InventoryCategory::Titles, "The Unstoppable"),
    ]
}

pub fn demo_matches() -> Vec<(NaiveDate, MatchResult, &'static str)> {
    [
        ((2023, 6, 1), MatchResult::Win, "13-7"),
        ((2023, 5, 28), MatchResult::Loss, "8-13"),
    ]
    .into_iter()
    .filter_map(|((y, m, d), result, score)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| (date, result, score))
    })
    .collect()
}
