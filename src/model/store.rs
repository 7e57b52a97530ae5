use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinListing {
    pub name: String,
    pub value_vp: Option<i32>,
    pub tier: Option<String>,
    /// Name of the bundle the skin belongs to, if any
    pub bundle_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleListing {
    pub id: i32,
    pub name: String,
    /// Every member skin, priced or not.
    pub skin_count: usize,
    /// Sum of member prices, unpriced members excluded.
    pub total_price: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub message: String,
    pub skins_added: Vec<String>,
    pub vp_spent: i64,
    pub vp_remaining: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinValue {
    pub skin_name: String,
    pub bundle_name: Option<String>,
    pub value_vp: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountValue {
    pub total_value_vp: i64,
    pub skins: Vec<SkinValue>,
}
