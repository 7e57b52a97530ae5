mod account;
mod auth;
mod bulk;
mod inventory;
mod match_history;
mod profile;
mod public;
mod store;
mod valuation;
