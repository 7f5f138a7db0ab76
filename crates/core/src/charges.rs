//! # Service Charge Module
//!
//! Strategy objects for per-account service charge computation. Each
//! strategy owns its configuration, set once at construction, and computes
//! a charge as a pure function of the balance it is handed.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

/// Base charge applied to chequing and savings accounts (0.50)
pub const BASE_SERVICE_CHARGE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Base charge applied to investment accounts (2.50)
pub const INVESTMENT_BASE_CHARGE: Decimal = Decimal::from_parts(250, 0, 0, false, 2);

/// Multiplier applied to the base charge when a savings balance drops
/// below its minimum (2.0)
pub const SERVICE_CHARGE_PREMIUM: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Flat fee charged on investment accounts older than ten years, replacing
/// the per-account management fee (5.00)
pub const LEGACY_MANAGEMENT_FEE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);

/// Default overdraft limit when the configured value is absent (1000.00)
pub const DEFAULT_OVERDRAFT_LIMIT: Decimal = Decimal::from_parts(100_000, 0, 0, false, 2);

/// Default overdraft rate when the configured value is absent (0.05)
pub const DEFAULT_OVERDRAFT_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Default savings minimum balance when the configured value is absent (50.00)
pub const DEFAULT_MINIMUM_BALANCE: Decimal = Decimal::from_parts(5000, 0, 0, false, 2);

/// Default investment management fee when the configured value is absent (2.55)
pub const DEFAULT_MANAGEMENT_FEE: Decimal = Decimal::from_parts(255, 0, 0, false, 2);

/// Years before an investment account's configured management fee stops
/// applying
const MANAGEMENT_FEE_HORIZON_YEARS: i64 = 10;

/// Strategy interface for service charge computation.
///
/// Implementations are pure: no internal mutation, no side effects, and the
/// result depends only on the balance argument and the configuration fixed
/// at construction.
pub trait ServiceCharge {
    fn calculate_service_charges(&self, balance: Decimal) -> Decimal;
}

/// Whole years elapsed between two dates, counted in 365-day years.
pub fn account_age_years(date_created: NaiveDate, as_of: NaiveDate) -> i64 {
    (as_of - date_created).num_days() / 365
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Charge computation for chequing accounts: a balance below the overdraft
/// limit is charged on the shortfall at the overdraft rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdraftStrategy {
    overdraft_limit: Decimal,
    overdraft_rate: Decimal,
}

impl OverdraftStrategy {
    pub fn new(overdraft_limit: Decimal, overdraft_rate: Decimal) -> Self {
        Self {
            overdraft_limit,
            overdraft_rate,
        }
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    pub fn overdraft_rate(&self) -> Decimal {
        self.overdraft_rate
    }
}

impl ServiceCharge for OverdraftStrategy {
    fn calculate_service_charges(&self, balance: Decimal) -> Decimal {
        if balance >= self.overdraft_limit {
            BASE_SERVICE_CHARGE
        } else {
            BASE_SERVICE_CHARGE + (self.overdraft_limit - balance) * self.overdraft_rate
        }
    }
}

/// Charge computation for savings accounts: the base charge doubles when
/// the balance is below the configured minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumBalanceStrategy {
    minimum_balance: Decimal,
}

impl MinimumBalanceStrategy {
    pub fn new(minimum_balance: Decimal) -> Self {
        Self { minimum_balance }
    }

    pub fn minimum_balance(&self) -> Decimal {
        self.minimum_balance
    }
}

impl ServiceCharge for MinimumBalanceStrategy {
    fn calculate_service_charges(&self, balance: Decimal) -> Decimal {
        if balance >= self.minimum_balance {
            BASE_SERVICE_CHARGE
        } else {
            BASE_SERVICE_CHARGE * SERVICE_CHARGE_PREMIUM
        }
    }
}

/// Charge computation for investment accounts, tiered on account age:
///
/// - under ten years: base charge plus the configured management fee
/// - exactly ten years: base charge only (fee waived)
/// - over ten years: base charge plus [`LEGACY_MANAGEMENT_FEE`], replacing
///   the configured fee
///
/// The boundary is asymmetric on purpose; callers relying on the waiver
/// must create the account exactly ten 365-day years before the charge is
/// computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementFeeStrategy {
    date_created: NaiveDate,
    management_fee: Decimal,
}

impl ManagementFeeStrategy {
    pub fn new(date_created: NaiveDate, management_fee: Decimal) -> Self {
        Self {
            date_created,
            management_fee,
        }
    }

    pub fn management_fee(&self) -> Decimal {
        self.management_fee
    }

    fn charges_as_of(&self, as_of: NaiveDate) -> Decimal {
        let age = account_age_years(self.date_created, as_of);
        if age < MANAGEMENT_FEE_HORIZON_YEARS {
            INVESTMENT_BASE_CHARGE + self.management_fee
        } else if age == MANAGEMENT_FEE_HORIZON_YEARS {
            INVESTMENT_BASE_CHARGE
        } else {
            INVESTMENT_BASE_CHARGE + LEGACY_MANAGEMENT_FEE
        }
    }
}

impl ServiceCharge for ManagementFeeStrategy {
    fn calculate_service_charges(&self, _balance: Decimal) -> Decimal {
        self.charges_as_of(today())
    }
}

/// Flat charge regardless of balance. Used as the base-account strategy
/// and as a drop-in replacement via the strategy setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRateStrategy {
    charge: Decimal,
}

impl FlatRateStrategy {
    pub fn new(charge: Decimal) -> Self {
        Self { charge }
    }
}

impl Default for FlatRateStrategy {
    fn default() -> Self {
        Self::new(BASE_SERVICE_CHARGE)
    }
}

impl ServiceCharge for FlatRateStrategy {
    fn calculate_service_charges(&self, _balance: Decimal) -> Decimal {
        self.charge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    #[test]
    fn test_overdraft_balance_above_limit() {
        let strategy = OverdraftStrategy::new(dec!(1000), dec!(0.05));
        assert_eq!(strategy.calculate_service_charges(dec!(1500)), dec!(0.50));
    }

    #[test]
    fn test_overdraft_balance_below_limit() {
        let strategy = OverdraftStrategy::new(dec!(1000), dec!(0.05));
        // 0.50 + (1000 - 500) * 0.05 = 25.50
        assert_eq!(strategy.calculate_service_charges(dec!(500)), dec!(25.50));
    }

    #[test]
    fn test_overdraft_balance_equal_to_limit() {
        let strategy = OverdraftStrategy::new(dec!(1000), dec!(0.05));
        assert_eq!(strategy.calculate_service_charges(dec!(1000)), dec!(0.50));
    }

    #[test]
    fn test_minimum_balance_above_minimum() {
        let strategy = MinimumBalanceStrategy::new(dec!(50));
        assert_eq!(strategy.calculate_service_charges(dec!(500)), dec!(0.50));
    }

    #[test]
    fn test_minimum_balance_equal_to_minimum() {
        let strategy = MinimumBalanceStrategy::new(dec!(50));
        assert_eq!(strategy.calculate_service_charges(dec!(50)), dec!(0.50));
    }

    #[test]
    fn test_minimum_balance_below_minimum() {
        let strategy = MinimumBalanceStrategy::new(dec!(50));
        assert_eq!(strategy.calculate_service_charges(dec!(49.99)), dec!(1.00));
    }

    #[test]
    fn test_management_fee_within_ten_years() {
        let as_of = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let created = as_of - Duration::days(365 * 5);
        let strategy = ManagementFeeStrategy::new(created, dec!(2.00));
        assert_eq!(strategy.charges_as_of(as_of), dec!(4.50));
    }

    #[test]
    fn test_management_fee_exactly_ten_years_waived() {
        let as_of = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let created = as_of - Duration::days(365 * 10);
        let strategy = ManagementFeeStrategy::new(created, dec!(2.00));
        assert_eq!(strategy.charges_as_of(as_of), dec!(2.50));
    }

    #[test]
    fn test_management_fee_beyond_ten_years_flat_fee() {
        let as_of = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let created = as_of - Duration::days(365 * 11);
        let strategy = ManagementFeeStrategy::new(created, dec!(2.00));
        assert_eq!(
            strategy.charges_as_of(as_of),
            INVESTMENT_BASE_CHARGE + LEGACY_MANAGEMENT_FEE
        );
    }

    #[test]
    fn test_management_fee_trait_uses_today() {
        let created = Local::now().date_naive() - Duration::days(365 * 5);
        let strategy = ManagementFeeStrategy::new(created, dec!(2.00));
        assert_eq!(strategy.calculate_service_charges(dec!(500)), dec!(4.50));
    }

    #[test]
    fn test_account_age_floors_partial_years() {
        let created = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let as_of = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();
        assert_eq!(account_age_years(created, as_of), 0);
        let as_of = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        assert_eq!(account_age_years(created, as_of), 1);
    }

    #[test]
    fn test_flat_rate_ignores_balance() {
        let strategy = FlatRateStrategy::default();
        assert_eq!(strategy.calculate_service_charges(dec!(-100)), dec!(0.50));
        assert_eq!(strategy.calculate_service_charges(dec!(1_000_000)), dec!(0.50));
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_OVERDRAFT_LIMIT, dec!(1000.00));
        assert_eq!(DEFAULT_OVERDRAFT_RATE, dec!(0.05));
        assert_eq!(DEFAULT_MINIMUM_BALANCE, dec!(50.00));
        assert_eq!(DEFAULT_MANAGEMENT_FEE, dec!(2.55));
    }
}
