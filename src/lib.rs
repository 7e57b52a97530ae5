//! Account, economy and inventory core for a single-player game-account dashboard.
//!
//! The crate owns the persistent account model (credentials, profile, wallet, inventory and
//! match history) together with the virtual store that debits VP for catalog skins and bundles.
//! Presentation layers call into the services in [`service`] with an explicit
//! [`sea_orm::DatabaseConnection`] opened once by [`startup::connect_to_database`].

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
