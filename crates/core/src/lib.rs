//! # Minibank Core
//!
//! Domain core for the account system: accounts with validated money
//! movement, strategy-based service charges, and observer notifications.
//!
//! The core is single-threaded and synchronous. Observer handles are
//! `Rc`/`Weak`; embedding in a multi-threaded host requires external
//! mutual exclusion per account.

pub mod account;
pub mod charges;
pub mod client;
pub mod email;
pub mod error;
pub mod money;
pub mod observer;

pub use account::{
    Account, AccountInfo, AccountKind, AccountType, LARGE_TRANSACTION_THRESHOLD,
    LOW_BALANCE_LEVEL,
};
pub use charges::{
    FlatRateStrategy, ManagementFeeStrategy, MinimumBalanceStrategy, OverdraftStrategy,
    ServiceCharge,
};
pub use client::{Client, LogSink, NotificationSink};
pub use error::{CoreError, CoreResult};
pub use observer::{Observer, Subject};
