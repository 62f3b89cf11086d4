//! Loyalty Engine - Bonus Ledger & Reward Wheel
//!
//! Accounting core for a retail loyalty program: append-only transaction
//! log, independently-expiring bonus batches spent FIFO-by-expiry, lazily
//! computed balances, and a weighted reward wheel with storage-enforced
//! one-per-customer eligibility.
//!
//! # Modules
//!
//! - [`config`] - Application config and program policy (rates, horizons)
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`customer`] - Customer records and contact lookup
//! - [`ledger`] - Bonus batches, balance calculation, FIFO spending
//! - [`txlog`] - Append-only transaction log
//! - [`engine`] - Accrual and redemption operations
//! - [`wheel`] - Prize catalog, weighted draw, spin engine
//! - [`voucher`] - Issued prize lifecycle
//! - [`error`] - Domain errors
//! - [`logging`] - Tracing setup

pub mod config;
pub mod customer;
pub mod db;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod txlog;
pub mod voucher;
pub mod wheel;

// Convenient re-exports at crate root
pub use config::{AppConfig, ProgramRules};
pub use customer::{Customer, CustomerRepository};
pub use db::Database;
pub use engine::{AccrualReceipt, BonusEngine, RedemptionReceipt};
pub use error::LoyaltyError;
pub use ledger::{BonusBatch, LedgerStore, SpendableBatch};
pub use txlog::{Transaction, TransactionLog, TxKind};
pub use voucher::{ActiveVoucher, Voucher, VoucherStatus, VoucherStore};
pub use wheel::catalog::{Prize, PrizeCatalog, PrizeKind};
pub use wheel::{Fulfillment, SpinOutcome, WheelEngine, WheelType};
