pub mod amount;
pub mod application;
pub mod budget;
pub mod config;
pub mod error;
pub mod ledger;
pub mod record;
pub mod storage;
pub mod validate;
