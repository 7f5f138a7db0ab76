//! Observer demo scenario.
//!
//! Builds two clients and three accounts, wires the clients up as
//! observers, and runs a transaction sequence that exercises both
//! notification triggers plus the validation error paths. Alerts appear
//! as log lines from the default notification sink.

use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::rc::Rc;

use minibank_core::{Account, Client, CoreResult};

pub fn run() -> Result<()> {
    let rohit = Rc::new(Client::new(
        105,
        "Rohit",
        "Sharma",
        "rsharma@pixell-river.com",
    )?);
    let jashanpreet = Rc::new(Client::new(
        106,
        "Jashanpreet",
        "Jattana",
        "jjattana@pixell-river.com",
    )?);

    let mut chequing = Account::chequing(67890, 105, dec!(1500), None, None, None)?;
    let mut savings = Account::savings(12345, 105, dec!(2000), None, None)?;
    let mut savings_second = Account::savings(57684, 106, dec!(1000), None, None)?;

    chequing.attach(rohit.clone());
    savings.attach(rohit.clone());
    savings_second.attach(jashanpreet.clone());

    println!("--- {} ---", rohit);
    report(chequing.deposit(dec!(500)), "Deposited", dec!(500), &chequing);
    report(chequing.withdraw(dec!(1200)), "Withdrew", dec!(1200), &chequing);
    // Drops the balance below the low-balance level.
    report(chequing.withdraw(dec!(770)), "Withdrew", dec!(770), &chequing);

    report(savings.deposit(dec!(300)), "Deposited", dec!(300), &savings);
    // Crosses the large-transaction threshold.
    report(savings.deposit(dec!(10500)), "Deposited", dec!(10500), &savings);
    // More than the balance: validation error, no notification.
    report(savings.withdraw(dec!(20000)), "Withdrew", dec!(20000), &savings);

    println!("--- {} ---", jashanpreet);
    report(
        savings_second.deposit(dec!(200)),
        "Deposited",
        dec!(200),
        &savings_second,
    );
    report(
        savings_second.withdraw(dec!(1180)),
        "Withdrew",
        dec!(1180),
        &savings_second,
    );
    // Non-positive amount: validation error.
    report(
        savings_second.deposit(dec!(-50)),
        "Deposited",
        dec!(-50),
        &savings_second,
    );

    println!();
    for account in [&chequing, &savings, &savings_second] {
        println!("{account}");
        println!(
            "Service Charges: {}\n",
            minibank_core::money::format_currency(account.get_service_charges())
        );
    }

    Ok(())
}

fn report(result: CoreResult<()>, action: &str, amount: Decimal, account: &Account) {
    match result {
        Ok(()) => println!(
            "{} {} on account {}",
            action,
            minibank_core::money::format_currency(amount),
            account.account_number()
        ),
        Err(err) => println!("Error: {err}"),
    }
}
