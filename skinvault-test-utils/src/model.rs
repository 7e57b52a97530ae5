//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main skinvault crate to keep test signatures consistent.

/// Type alias for account credential database model.
pub type UserModel = entity::account_user::Model;

/// Type alias for account profile database model.
pub type ProfileModel = entity::account_profile::Model;

/// Type alias for account wallet database model.
pub type WalletModel = entity::account_wallet::Model;

/// Type alias for inventory item database model.
pub type InventoryItemModel = entity::inventory_item::Model;

/// Type alias for match record database model.
pub type MatchRecordModel = entity::match_record::Model;

/// Type alias for catalog bundle database model.
pub type BundleModel = entity::catalog_bundle::Model;

/// Type alias for catalog skin database model.
pub type SkinModel = entity::catalog_skin::Model;
