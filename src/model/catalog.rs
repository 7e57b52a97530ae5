use serde::{Deserialize, Serialize};

/// A skin to upsert into the catalog, keyed by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinSeed {
    pub name: String,
    pub skin_type: Option<String>,
    pub value_vp: Option<i32>,
    /// Edition label such as "Premium" or "Ultra"
    pub tier: Option<String>,
    pub image_url: Option<String>,
}

impl SkinSeed {
    pub fn new(name: &str, skin_type: &str, value_vp: i32) -> Self {
        Self {
            name: name.to_string(),
            skin_type: Some(skin_type.to_string()),
            value_vp: Some(value_vp),
            tier: None,
            image_url: None,
        }
    }

    pub fn with_tier(mut self, tier: &str) -> Self {
        self.tier = Some(tier.to_string());
        self
    }
}

/// A bundle to upsert into the catalog together with its member skins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSeed {
    pub name: String,
    pub skins: Vec<SkinSeed>,
}
