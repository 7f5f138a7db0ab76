//! Minibank CLI - account operations from command line
//!
//! Usage:
//! ```bash
//! minibank list
//! minibank charges
//! minibank show 12345 --json
//! minibank deposit 12345 250.00
//! minibank withdraw 12345 99.50
//! minibank demo
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{demo, listing, transact};

/// Minibank - bank accounts with service charges and balance alerts
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory containing clients.csv and accounts.csv
    #[arg(long, default_value = "data", global = true)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List clients with their accounts
    List,

    /// Show the service charge for every account
    Charges,

    /// Show one account's details
    Show {
        /// Account number
        account_number: u32,
        /// Print the account snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Deposit funds into an account
    Deposit {
        /// Account number
        account_number: u32,
        /// Amount to deposit
        amount: String,
    },

    /// Withdraw funds from an account
    Withdraw {
        /// Account number
        account_number: u32,
        /// Amount to withdraw
        amount: String,
    },

    /// Run the observer notification demo scenario
    Demo,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            listing::list(&cli.data_dir)?;
        }

        Commands::Charges => {
            listing::charges(&cli.data_dir)?;
        }

        Commands::Show {
            account_number,
            json,
        } => {
            listing::show(&cli.data_dir, account_number, json)?;
        }

        Commands::Deposit {
            account_number,
            amount,
        } => {
            transact::deposit(&cli.data_dir, account_number, &amount)?;
        }

        Commands::Withdraw {
            account_number,
            amount,
        } => {
            transact::withdraw(&cli.data_dir, account_number, &amount)?;
        }

        Commands::Demo => {
            demo::run()?;
        }
    }

    Ok(())
}
