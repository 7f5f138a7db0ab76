//! Raw CSV row shapes for clients.csv and accounts.csv.
//!
//! Every field arrives as text; parsing into domain values is the
//! loader's job so that one bad column can be logged without losing the
//! rest of the file.

use serde::{Deserialize, Serialize};

/// One row of clients.csv.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub client_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// One row of accounts.csv.
///
/// The tail columns only apply to some account types and may be empty;
/// an empty or unparseable value falls back to the account's documented
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub account_number: String,
    pub client_number: String,
    #[serde(default)]
    pub account_holder: String,
    pub balance: String,
    pub date_created: String,
    pub account_type: String,
    #[serde(default)]
    pub overdraft_limit: Option<String>,
    #[serde(default)]
    pub overdraft_rate: Option<String>,
    #[serde(default)]
    pub management_fee: Option<String>,
    #[serde(default)]
    pub minimum_balance: Option<String>,
}

impl AccountRecord {
    /// An optional column counts as absent when missing or blank.
    pub fn optional(value: &Option<String>) -> Option<&str> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
