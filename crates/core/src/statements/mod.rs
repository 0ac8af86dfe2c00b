//! Financial statement generation.
//!
//! This module provides the statement aggregation engine:
//! - Trial Balance
//! - Balance Sheet
//! - Profit & Loss
//!
//! Classification, normalization, aggregation, and assembly are pure;
//! retrieval happens through the collaborator traits in [`service`].

pub mod aggregate;
pub mod assemble;
pub mod classify;
pub mod error;
pub mod normalize;
pub mod service;
pub mod types;


pub use assemble::ReportAssembler;
pub use classify::ClassificationMap;
pub use error::StatementError;
pub use service::{AccountDirectory, AccountTypeDirectory, BalanceSource, StatementService};
pub use types::{
    BalanceSheetReport, LineItem, ProfitAndLossReport, ReportingPeriod, ResolvedBalance,
    StatementSection, TrialBalanceReport,
};
