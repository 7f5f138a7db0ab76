//! Read-only reports: client listing, account details, service charges.

use anyhow::{bail, Result};
use std::path::Path;

use minibank_core::money::format_currency;
use minibank_data::load_data;

/// Print every client followed by their accounts.
pub fn list(data_dir: &Path) -> Result<()> {
    let (clients, accounts) = load_data(data_dir)?;

    println!("=========================================");
    for client in clients.values() {
        println!("{client}");
        println!("{} Accounts", client.client_number());
        println!("=============");
        for account in accounts
            .values()
            .filter(|account| account.client_number() == client.client_number())
        {
            println!("{account}\n");
        }
        println!("=========================================");
    }

    Ok(())
}

/// Print the current service charge for every account.
pub fn charges(data_dir: &Path) -> Result<()> {
    let (_, accounts) = load_data(data_dir)?;

    for account in accounts.values() {
        println!(
            "Account {} ({}): {}",
            account.account_number(),
            account.account_type(),
            format_currency(account.get_service_charges())
        );
    }

    Ok(())
}

/// Print one account, optionally as a JSON snapshot.
pub fn show(data_dir: &Path, account_number: u32, json: bool) -> Result<()> {
    let (_, accounts) = load_data(data_dir)?;

    let Some(account) = accounts.get(&account_number) else {
        bail!("Account not found: {account_number}");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&account.get_account_info())?);
    } else {
        println!("{account}");
        println!(
            "Service Charges: {}",
            format_currency(account.get_service_charges())
        );
    }

    Ok(())
}
