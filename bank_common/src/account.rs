use crate::errors::AccountingError;
use crate::tx::Tx;
use crate::validation::is_valid_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Deposits strictly above this amount are charged [`DEPOSIT_FEE`].
pub const DEPOSIT_FEE_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Flat fee subtracted from a large deposit before it is credited.
pub const DEPOSIT_FEE: Decimal = Decimal::ONE;

/// **A bank account: an account number and its current balance**
///
/// The account number never changes after creation.
/// The balance is only changed through [`Account::deposit`] and [`Account::withdraw`],
/// and a withdrawal can never make it negative.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Account {
    account_number: u32,
    #[serde(with = "rust_decimal::serde::float")]
    balance: Decimal,
}

impl Account {
    /// Returns a new [`Account`] with the given opening `balance`
    pub fn new(account_number: u32, balance: Decimal) -> Self {
        Account {
            account_number,
            balance,
        }
    }

    pub fn account_number(&self) -> u32 {
        self.account_number
    }

    /// Retrieves the current balance
    pub fn check_balance(&self) -> Decimal {
        self.balance
    }

    /// Credits the `amount` to the account.
    ///
    /// Amounts greater than [`DEPOSIT_FEE_THRESHOLD`] are charged [`DEPOSIT_FEE`],
    /// so depositing 150 credits 149.
    ///
    /// # Errors
    /// - Amount isn't positive, `AccountingError::InvalidAmount`;
    /// - Attempted overflow (account over-funded), `AccountingError::AccountOverFunded`.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Tx, AccountingError> {
        if is_valid_amount(amount).is_some() {
            return Err(AccountingError::InvalidAmount(amount));
        }

        let fee = if amount > DEPOSIT_FEE_THRESHOLD {
            DEPOSIT_FEE
        } else {
            Decimal::ZERO
        };
        let credited = amount - fee;

        self.balance
            .checked_add(credited)
            .map(|r| {
                self.balance = r;
                Tx::Deposit {
                    account: self.account_number,
                    amount,
                    fee,
                    credited,
                    balance: r,
                }
            })
            .ok_or(AccountingError::AccountOverFunded(
                self.account_number,
                amount,
            ))
    }

    /// Withdraws the `amount` from the account, if the balance covers it.
    ///
    /// The balance is left untouched when the withdrawal is rejected.
    ///
    /// # Errors
    /// - Amount isn't positive, `AccountingError::InvalidAmount`;
    /// - Balance is lower than the amount, `AccountingError::InsufficientBalance`.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Tx, AccountingError> {
        if is_valid_amount(amount).is_some() {
            return Err(AccountingError::InvalidAmount(amount));
        }

        if amount > self.balance {
            return Err(AccountingError::InsufficientBalance(
                self.account_number,
                amount,
            ));
        }

        self.balance -= amount;
        Ok(Tx::Withdraw {
            account: self.account_number,
            amount,
            balance: self.balance,
        })
    }

    pub(crate) fn normalize(&mut self) {
        self.balance = self.balance.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn deposit_above_threshold_charges_fee() {
        let mut account = Account::new(1001, dec(500));

        let tx = account.deposit(dec(150));
        assert_eq!(
            Ok(Tx::Deposit {
                account: 1001,
                amount: dec(150),
                fee: dec(1),
                credited: dec(149),
                balance: dec(649),
            }),
            tx
        );
        assert_eq!(dec(649), account.check_balance());
    }

    #[test]
    fn deposit_at_threshold_is_free() {
        let mut account = Account::new(1001, dec(500));

        let tx = account.deposit(dec(100)).unwrap();
        assert_eq!(
            Tx::Deposit {
                account: 1001,
                amount: dec(100),
                fee: Decimal::ZERO,
                credited: dec(100),
                balance: dec(600),
            },
            tx
        );
        assert_eq!(dec(600), account.check_balance());
    }

    #[test]
    fn deposit_just_above_threshold_charges_fee() {
        let mut account = Account::new(1001, Decimal::ZERO);

        let _ = account.deposit(Decimal::new(10001, 2));
        assert_eq!(Decimal::new(9901, 2), account.check_balance());
    }

    #[test]
    fn deposit_multiple_ok() {
        let mut account = Account::new(7, Decimal::ZERO);

        assert!(account.deposit(dec(25)).is_ok());
        assert!(account.deposit(dec(50)).is_ok());
        assert!(account.deposit(dec(200)).is_ok());

        assert_eq!(dec(274), account.check_balance());
    }

    #[test]
    fn deposit_err_over_funded() {
        let mut account = Account::new(7, Decimal::MAX);

        let tx = account.deposit(dec(10));
        assert_eq!(Err(AccountingError::AccountOverFunded(7, dec(10))), tx);
        assert_eq!(Decimal::MAX, account.check_balance());
    }

    #[test]
    fn deposit_err_invalid_amount() {
        let mut account = Account::new(7, dec(10));

        assert_eq!(
            Err(AccountingError::InvalidAmount(Decimal::ZERO)),
            account.deposit(Decimal::ZERO)
        );
        assert_eq!(
            Err(AccountingError::InvalidAmount(dec(-20))),
            account.deposit(dec(-20))
        );
        assert_eq!(dec(10), account.check_balance());
    }

    #[test]
    fn withdraw_multiple_ok() {
        let mut account = Account::new(1003, dec(2000));

        let tx = account.withdraw(dec(500));
        assert_eq!(
            Ok(Tx::Withdraw {
                account: 1003,
                amount: dec(500),
                balance: dec(1500),
            }),
            tx
        );

        let tx = account.withdraw(dec(1500)).unwrap();
        assert_eq!(
            Tx::Withdraw {
                account: 1003,
                amount: dec(1500),
                balance: Decimal::ZERO,
            },
            tx
        );
        assert_eq!(Decimal::ZERO, account.check_balance());
    }

    #[test]
    fn withdraw_err_insufficient_balance() {
        let mut account = Account::new(1002, dec(1000));

        let tx = account.withdraw(dec(1500));
        assert_eq!(
            Err(AccountingError::InsufficientBalance(1002, dec(1500))),
            tx
        );
        assert_eq!(dec(1000), account.check_balance());
    }

    #[test]
    fn withdraw_err_invalid_amount() {
        let mut account = Account::new(1002, dec(1000));

        assert_eq!(
            Err(AccountingError::InvalidAmount(dec(-1))),
            account.withdraw(dec(-1))
        );
        assert_eq!(dec(1000), account.check_balance());
    }

    #[test]
    fn check_balance_has_no_side_effects() {
        let account = Account::new(1001, dec(500));

        for _ in 0..5 {
            assert_eq!(dec(500), account.check_balance());
        }
    }

    #[test]
    fn balance_serializes_as_json_number() {
        let account = Account::new(1001, Decimal::new(5025, 1));

        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(r#"{"account_number":1001,"balance":502.5}"#, json);

        let parsed: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, parsed);
    }

    #[test]
    fn tx_display() {
        let mut account = Account::new(1001, dec(500));

        let tx = account.deposit(dec(150)).unwrap();
        assert_eq!(
            "Deposit of $149 successful (fee: $1). New balance: $649",
            tx.to_string()
        );

        let tx = account.deposit(dec(50)).unwrap();
        assert_eq!("Deposit of $50 successful. New balance: $699", tx.to_string());

        let tx = account.withdraw(dec(99)).unwrap();
        assert_eq!(
            "Withdrawal of $99 successful. Remaining balance: $600",
            tx.to_string()
        );
    }
}
