//! Account domain types.

pub mod types;

pub use types::{Account, AccountCategory, AccountNature, AccountTypeDef, ReportAffiliation};
