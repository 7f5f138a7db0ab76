//! Balance mutation commands: deposit and withdraw with CSV write-back.
//!
//! The owning client is attached as an observer before the mutation so
//! that low-balance and large-transaction alerts fire exactly as they
//! would inside the full application.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::rc::Rc;

use minibank_core::money::{format_currency, parse_amount};
use minibank_core::Account;
use minibank_data::{load_data, update_data};

pub fn deposit(data_dir: &Path, account_number: u32, amount: &str) -> Result<()> {
    let amount = parse_amount(amount)?;
    with_account(data_dir, account_number, |account| {
        account.deposit(amount)?;
        println!(
            "Deposited {} into account {}",
            format_currency(amount),
            account.account_number()
        );
        Ok(())
    })
}

pub fn withdraw(data_dir: &Path, account_number: u32, amount: &str) -> Result<()> {
    let amount = parse_amount(amount)?;
    with_account(data_dir, account_number, |account| {
        account.withdraw(amount)?;
        println!(
            "Withdrew {} from account {}",
            format_currency(amount),
            account.account_number()
        );
        Ok(())
    })
}

/// Load the account, attach its owning client, run the mutation, and
/// write the new balance back to accounts.csv.
fn with_account(
    data_dir: &Path,
    account_number: u32,
    mutate: impl FnOnce(&mut Account) -> Result<()>,
) -> Result<()> {
    let (mut clients, mut accounts) = load_data(data_dir)?;

    let Some(account) = accounts.get_mut(&account_number) else {
        bail!("Account not found: {account_number}");
    };

    let owner = clients
        .remove(&account.client_number())
        .map(Rc::new)
        .with_context(|| format!("Client not found: {}", account.client_number()))?;
    account.attach(owner.clone());

    mutate(account)?;

    update_data(data_dir.join("accounts.csv"), account)?;
    tracing::info!(account_number, "balance written back to accounts.csv");
    println!("New balance: {}", format_currency(account.get_balance()));

    Ok(())
}
