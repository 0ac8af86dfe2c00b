//! Statement aggregation engine for Statera.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! It derives financial statements from a ledger of signed account balances.
//!
//! # Modules
//!
//! - `account` - Account domain types and debit/credit-nature classification
//! - `statements` - Trial balance, balance sheet, and profit & loss generation

pub mod account;
pub mod statements;
