//! # Account Module
//!
//! The account entity: balance ownership, deposit/withdraw validation,
//! service charge delegation, and notification of attached observers on
//! balance mutation.

use crate::charges::{
    self, FlatRateStrategy, ManagementFeeStrategy, MinimumBalanceStrategy, OverdraftStrategy,
    ServiceCharge, DEFAULT_MANAGEMENT_FEE, DEFAULT_MINIMUM_BALANCE, DEFAULT_OVERDRAFT_LIMIT,
    DEFAULT_OVERDRAFT_RATE,
};
use crate::error::{CoreError, CoreResult};
use crate::money::{format_currency, format_rate};
use crate::observer::{Observer, Subject};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use strum_macros::{Display, EnumString};

/// Balance below which observers receive a low-balance warning (50.00)
pub const LOW_BALANCE_LEVEL: Decimal = Decimal::from_parts(5000, 0, 0, false, 2);

/// Absolute transaction amount above which observers receive a
/// large-transaction notice (10000.00)
pub const LARGE_TRANSACTION_THRESHOLD: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 2);

/// Product type tag.
///
/// Parses from both the short name and the CSV `account_type` column
/// (`ChequingAccount`, `SavingsAccount`, `InvestmentAccount`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum AccountType {
    #[strum(to_string = "Chequing", serialize = "ChequingAccount")]
    Chequing,
    #[strum(to_string = "Savings", serialize = "SavingsAccount")]
    Savings,
    #[strum(to_string = "Investment", serialize = "InvestmentAccount")]
    Investment,
}

/// Per-variant configuration, resolved at construction (absent values fall
/// back to the documented defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    Chequing {
        overdraft_limit: Decimal,
        overdraft_rate: Decimal,
    },
    Savings {
        minimum_balance: Decimal,
    },
    Investment {
        management_fee: Decimal,
    },
}

impl AccountKind {
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountKind::Chequing { .. } => AccountType::Chequing,
            AccountKind::Savings { .. } => AccountType::Savings,
            AccountKind::Investment { .. } => AccountType::Investment,
        }
    }
}

/// Read-only snapshot of an account's identifying state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_number: u32,
    pub client_number: u32,
    pub balance: Decimal,
    pub date_created: NaiveDate,
    pub account_type: AccountType,
}

/// A bank account.
///
/// The balance moves only through [`deposit`](Account::deposit) and
/// [`withdraw`](Account::withdraw); every successful mutation re-evaluates
/// the notification triggers and pushes to attached observers. Service
/// charge computation is delegated to the injected strategy.
pub struct Account {
    account_number: u32,
    client_number: u32,
    balance: Decimal,
    date_created: NaiveDate,
    kind: AccountKind,
    strategy: Box<dyn ServiceCharge>,
    subject: Subject,
}

impl Account {
    /// Create a chequing account. Absent overdraft configuration falls
    /// back to [`DEFAULT_OVERDRAFT_LIMIT`] / [`DEFAULT_OVERDRAFT_RATE`].
    pub fn chequing(
        account_number: u32,
        client_number: u32,
        balance: Decimal,
        date_created: Option<NaiveDate>,
        overdraft_limit: Option<Decimal>,
        overdraft_rate: Option<Decimal>,
    ) -> CoreResult<Self> {
        let overdraft_limit = overdraft_limit.unwrap_or(DEFAULT_OVERDRAFT_LIMIT);
        let overdraft_rate = overdraft_rate.unwrap_or(DEFAULT_OVERDRAFT_RATE);
        Self::build(
            account_number,
            client_number,
            balance,
            date_created,
            AccountKind::Chequing {
                overdraft_limit,
                overdraft_rate,
            },
            Box::new(OverdraftStrategy::new(overdraft_limit, overdraft_rate)),
        )
    }

    /// Create a savings account. An absent minimum balance falls back to
    /// [`DEFAULT_MINIMUM_BALANCE`].
    pub fn savings(
        account_number: u32,
        client_number: u32,
        balance: Decimal,
        date_created: Option<NaiveDate>,
        minimum_balance: Option<Decimal>,
    ) -> CoreResult<Self> {
        let minimum_balance = minimum_balance.unwrap_or(DEFAULT_MINIMUM_BALANCE);
        Self::build(
            account_number,
            client_number,
            balance,
            date_created,
            AccountKind::Savings { minimum_balance },
            Box::new(MinimumBalanceStrategy::new(minimum_balance)),
        )
    }

    /// Create an investment account. An absent management fee falls back
    /// to [`DEFAULT_MANAGEMENT_FEE`].
    pub fn investment(
        account_number: u32,
        client_number: u32,
        balance: Decimal,
        date_created: Option<NaiveDate>,
        management_fee: Option<Decimal>,
    ) -> CoreResult<Self> {
        let management_fee = management_fee.unwrap_or(DEFAULT_MANAGEMENT_FEE);
        let date_created = resolve_date(date_created);
        Self::build(
            account_number,
            client_number,
            balance,
            Some(date_created),
            AccountKind::Investment { management_fee },
            Box::new(ManagementFeeStrategy::new(date_created, management_fee)),
        )
    }

    fn build(
        account_number: u32,
        client_number: u32,
        balance: Decimal,
        date_created: Option<NaiveDate>,
        kind: AccountKind,
        strategy: Box<dyn ServiceCharge>,
    ) -> CoreResult<Self> {
        if account_number == 0 {
            return Err(CoreError::InvalidAccountNumber(account_number));
        }
        if client_number == 0 {
            return Err(CoreError::InvalidClientNumber(client_number));
        }
        Ok(Self {
            account_number,
            client_number,
            balance,
            date_created: resolve_date(date_created),
            kind,
            strategy,
            subject: Subject::new(),
        })
    }

    // === Accessors ===

    pub fn account_number(&self) -> u32 {
        self.account_number
    }

    pub fn client_number(&self) -> u32 {
        self.client_number
    }

    pub fn get_balance(&self) -> Decimal {
        self.balance
    }

    pub fn date_created(&self) -> NaiveDate {
        self.date_created
    }

    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Read-only snapshot of the account's state.
    pub fn get_account_info(&self) -> AccountInfo {
        AccountInfo {
            account_number: self.account_number,
            client_number: self.client_number,
            balance: self.balance,
            date_created: self.date_created,
            account_type: self.account_type(),
        }
    }

    // === Money movement ===

    /// Add `amount` to the balance.
    ///
    /// The amount must be strictly positive; otherwise the balance is left
    /// unchanged and a validation error is returned.
    pub fn deposit(&mut self, amount: Decimal) -> CoreResult<()> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::DepositNotPositive(amount));
        }
        self.update_balance(amount);
        Ok(())
    }

    /// Remove `amount` from the balance.
    ///
    /// The amount must be strictly positive and must not exceed the
    /// current balance; otherwise the balance is left unchanged and a
    /// validation error is returned.
    pub fn withdraw(&mut self, amount: Decimal) -> CoreResult<()> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::WithdrawalNotPositive(amount));
        }
        if amount > self.balance {
            return Err(CoreError::InsufficientFunds {
                amount,
                balance: self.balance,
            });
        }
        self.update_balance(-amount);
        Ok(())
    }

    /// Apply a signed delta and fire the notification triggers.
    fn update_balance(&mut self, amount: Decimal) {
        self.balance += amount;

        if self.balance < LOW_BALANCE_LEVEL {
            self.subject.notify(&format!(
                "Low balance warning {}: on account {}.",
                format_currency(self.balance),
                self.account_number
            ));
        }
        if amount.abs() > LARGE_TRANSACTION_THRESHOLD {
            self.subject.notify(&format!(
                "Large transaction {}: on account {}.",
                format_currency(amount.abs()),
                self.account_number
            ));
        }
    }

    // === Service charges ===

    /// Compute this account's service charge via the injected strategy.
    /// Never mutates the balance.
    pub fn get_service_charges(&self) -> Decimal {
        self.strategy.calculate_service_charges(self.balance)
    }

    /// Replace the charge strategy.
    pub fn set_service_charge_strategy(&mut self, strategy: Box<dyn ServiceCharge>) {
        self.strategy = strategy;
    }

    /// Fall back to the flat base charge.
    pub fn use_flat_service_charge(&mut self) {
        self.strategy = Box::new(FlatRateStrategy::default());
    }

    // === Notification wiring ===

    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.subject.attach(observer);
    }

    pub fn detach(&mut self, observer: Rc<dyn Observer>) {
        self.subject.detach(observer);
    }

    pub fn live_observers(&self) -> usize {
        self.subject.live_observers()
    }
}

fn resolve_date(date_created: Option<NaiveDate>) -> NaiveDate {
    date_created.unwrap_or_else(|| Local::now().date_naive())
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("account_number", &self.account_number)
            .field("client_number", &self.client_number)
            .field("balance", &self.balance)
            .field("date_created", &self.date_created)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Number: {}", self.account_number)?;
        writeln!(f, "Client Number: {}", self.client_number)?;
        writeln!(f, "Balance: {}", format_currency(self.balance))?;
        writeln!(f, "Date Created: {}", self.date_created.format("%Y-%m-%d"))?;
        match &self.kind {
            AccountKind::Chequing {
                overdraft_limit,
                overdraft_rate,
            } => {
                writeln!(f, "Overdraft Limit: {}", format_currency(*overdraft_limit))?;
                writeln!(f, "Overdraft Rate: {}", format_rate(*overdraft_rate))?;
            }
            AccountKind::Savings { minimum_balance } => {
                writeln!(f, "Minimum Balance: {}", format_currency(*minimum_balance))?;
            }
            AccountKind::Investment { management_fee } => {
                let age = charges::account_age_years(self.date_created, Local::now().date_naive());
                if age >= 10 {
                    writeln!(f, "Management Fee: Waived")?;
                } else {
                    writeln!(f, "Management Fee: {}", format_currency(*management_fee))?;
                }
            }
        }
        write!(f, "Account Type: {}", self.account_type())
    }
}
