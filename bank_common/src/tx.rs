use rust_decimal::Decimal;
use std::fmt;

/// **A transaction outcome**
///
/// Returned by successful account operations; `balance` is the balance
/// right after the transaction was applied.
#[derive(Clone, Debug, PartialEq)]
pub enum Tx {
    Deposit {
        account: u32,
        amount: Decimal,
        fee: Decimal,
        credited: Decimal,
        balance: Decimal,
    },
    Withdraw {
        account: u32,
        amount: Decimal,
        balance: Decimal,
    },
}

impl fmt::Display for Tx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tx::Deposit {
                fee,
                credited,
                balance,
                ..
            } if fee.is_zero() => write!(
                f,
                "Deposit of ${} successful. New balance: ${}",
                credited, balance
            ),
            Tx::Deposit {
                fee,
                credited,
                balance,
                ..
            } => write!(
                f,
                "Deposit of ${} successful (fee: ${}). New balance: ${}",
                credited, fee, balance
            ),
            Tx::Withdraw {
                amount, balance, ..
            } => write!(
                f,
                "Withdrawal of ${} successful. Remaining balance: ${}",
                amount, balance
            ),
        }
    }
}
