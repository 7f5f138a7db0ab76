//! # Minibank Data
//!
//! CSV-backed data access: loads clients and accounts from the data
//! directory into domain objects and writes mutated balances back.

pub mod error;
pub mod loader;
pub mod records;

pub use error::{DataError, DataResult};
pub use loader::{load_accounts, load_clients, load_data, update_data, LoadedData};
pub use records::{AccountRecord, ClientRecord};
