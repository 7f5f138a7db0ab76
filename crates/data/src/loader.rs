//! CSV loading and balance write-back.
//!
//! Loading is lenient the way the surrounding tooling expects: a record
//! that cannot be parsed or constructed is logged and skipped, and a
//! missing data file yields an empty collection rather than an error.
//! Structural problems (unreadable files, malformed CSV) propagate.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use minibank_core::{Account, AccountType, Client};

use crate::error::{DataError, DataResult};
use crate::records::{AccountRecord, ClientRecord};

/// Clients and accounts loaded from a data directory, keyed by number.
pub type LoadedData = (BTreeMap<u32, Client>, BTreeMap<u32, Account>);

/// Load `clients.csv` and `accounts.csv` from `data_dir`.
///
/// Accounts referencing an unknown client are skipped. A missing file is
/// logged and treated as empty.
pub fn load_data(data_dir: impl AsRef<Path>) -> DataResult<LoadedData> {
    let data_dir = data_dir.as_ref();
    let clients_path = data_dir.join("clients.csv");
    let accounts_path = data_dir.join("accounts.csv");

    let clients = if clients_path.exists() {
        load_clients(&clients_path)?
    } else {
        tracing::error!(path = %clients_path.display(), "clients.csv file not found");
        BTreeMap::new()
    };

    let accounts = if accounts_path.exists() {
        load_accounts(&accounts_path, &clients)?
    } else {
        tracing::error!(path = %accounts_path.display(), "accounts.csv file not found");
        BTreeMap::new()
    };

    Ok((clients, accounts))
}

/// Load clients, skipping records that fail to parse or validate.
pub fn load_clients(path: impl AsRef<Path>) -> DataResult<BTreeMap<u32, Client>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut clients = BTreeMap::new();

    for row in reader.deserialize() {
        let record: ClientRecord = match row {
            Ok(record) => record,
            Err(err) => {
                tracing::error!(error = %err, "unable to read client record");
                continue;
            }
        };

        let Ok(client_number) = record.client_number.trim().parse::<u32>() else {
            tracing::error!(
                client_number = %record.client_number,
                "client number must be an integer"
            );
            continue;
        };

        match Client::new(
            client_number,
            &record.first_name,
            &record.last_name,
            &record.email,
        ) {
            Ok(client) => {
                clients.insert(client_number, client);
            }
            Err(err) => {
                tracing::error!(client_number, error = %err, "unable to create client");
            }
        }
    }

    Ok(clients)
}

/// Load accounts, skipping records that fail to parse, construct, or
/// reference a missing client.
pub fn load_accounts(
    path: impl AsRef<Path>,
    clients: &BTreeMap<u32, Client>,
) -> DataResult<BTreeMap<u32, Account>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut accounts = BTreeMap::new();

    for row in reader.deserialize() {
        let record: AccountRecord = match row {
            Ok(record) => record,
            Err(err) => {
                tracing::error!(error = %err, "unable to read account record");
                continue;
            }
        };

        let Some(account) = build_account(&record) else {
            continue;
        };

        if clients.contains_key(&account.client_number()) {
            accounts.insert(account.account_number(), account);
        } else {
            tracing::error!(
                account_number = account.account_number(),
                client_number = account.client_number(),
                "client not found for account"
            );
        }
    }

    Ok(accounts)
}

/// Construct a domain account from one CSV row, logging and returning
/// `None` on any per-record failure.
fn build_account(record: &AccountRecord) -> Option<Account> {
    let number = &record.account_number;

    let Ok(account_number) = number.trim().parse::<u32>() else {
        tracing::error!(account_number = %number, "account number must be an integer");
        return None;
    };
    let Ok(client_number) = record.client_number.trim().parse::<u32>() else {
        tracing::error!(
            account_number,
            client_number = %record.client_number,
            "client number must be an integer"
        );
        return None;
    };
    let Ok(balance) = Decimal::from_str_exact(record.balance.trim()) else {
        tracing::error!(account_number, balance = %record.balance, "balance must be numeric");
        return None;
    };
    let Ok(account_type) = record.account_type.trim().parse::<AccountType>() else {
        tracing::error!(
            account_number,
            account_type = %record.account_type,
            "not a valid account type"
        );
        return None;
    };

    // Unparseable dates fall back to today via the constructor.
    let date_created = parse_date(&record.date_created);

    let account = match account_type {
        AccountType::Chequing => Account::chequing(
            account_number,
            client_number,
            balance,
            date_created,
            parse_config(&record.overdraft_limit),
            parse_config(&record.overdraft_rate),
        ),
        AccountType::Savings => Account::savings(
            account_number,
            client_number,
            balance,
            date_created,
            parse_config(&record.minimum_balance),
        ),
        AccountType::Investment => Account::investment(
            account_number,
            client_number,
            balance,
            date_created,
            parse_config(&record.management_fee),
        ),
    };

    match account {
        Ok(account) => Some(account),
        Err(err) => {
            tracing::error!(account_number, error = %err, "unable to create account");
            None
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Absent or unparseable configuration values become `None`, deferring to
/// the account's documented defaults.
fn parse_config(value: &Option<String>) -> Option<Decimal> {
    AccountRecord::optional(value).and_then(|v| Decimal::from_str_exact(v).ok())
}

/// Rewrite `accounts.csv` with the balance column of the matching row
/// replaced. All other columns and the row order are preserved.
pub fn update_data(path: impl AsRef<Path>, account: &Account) -> DataResult<()> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let column = |name: &str| -> DataResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn {
                column: name.to_string(),
                path: path.display().to_string(),
            })
    };
    let number_idx = column("account_number")?;
    let balance_idx = column("balance")?;

    let mut rows = Vec::new();
    for row in reader.records() {
        let record = row?;
        let matches = record
            .get(number_idx)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .is_some_and(|number| number == account.account_number());

        if matches {
            let mut updated = csv::StringRecord::new();
            for (idx, field) in record.iter().enumerate() {
                if idx == balance_idx {
                    updated.push_field(&account.get_balance().to_string());
                } else {
                    updated.push_field(field);
                }
            }
            rows.push(updated);
        } else {
            rows.push(record);
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&headers)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}
