use rust_decimal::Decimal;
use std::error::Error;
use std::fmt;
use std::io;

pub const AMOUNT_NOT_VALID_MSG: &str = "Amount is not valid";

/// **An application-specific error type**
///
/// Account numbers are carried so the message can name the account.
#[derive(Debug, PartialEq)]
pub enum AccountingError {
    AccountNotFound(u32),
    InsufficientBalance(u32, Decimal),
    AccountOverFunded(u32, Decimal),
    InvalidAmount(Decimal),
}

impl fmt::Display for AccountingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountingError::AccountNotFound(account) => {
                write!(f, "Account {} doesn't exist.", account)
            }
            AccountingError::InsufficientBalance(account, amount) => write!(
                f,
                "Insufficient balance: account {} cannot withdraw ${}.",
                account, amount
            ),
            AccountingError::AccountOverFunded(account, amount) => write!(
                f,
                "Account {} would be over-funded by depositing ${}.",
                account, amount
            ),
            AccountingError::InvalidAmount(amount) => {
                write!(f, "{}: ${}.", AMOUNT_NOT_VALID_MSG, amount)
            }
        }
    }
}

impl Error for AccountingError {}

/// **Errors that can happen while building a [`Directory`](crate::Directory)**
#[derive(Debug)]
pub enum DirectoryError {
    Io(io::Error),
    Parse(serde_json::Error),
    DuplicateAccountNumber(u32),
    NegativeBalance(u32, Decimal),
    InvalidAge(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Io(err) => write!(f, "Failed to read the directory: {}", err),
            DirectoryError::Parse(err) => write!(f, "Failed to parse the directory: {}", err),
            DirectoryError::DuplicateAccountNumber(account) => {
                write!(f, "Account number {} is used more than once.", account)
            }
            DirectoryError::NegativeBalance(account, balance) => write!(
                f,
                "Account {} starts with a negative balance: ${}.",
                account, balance
            ),
            DirectoryError::InvalidAge(name) => {
                write!(f, "Customer \"{}\" must have a positive age.", name)
            }
        }
    }
}

impl Error for DirectoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DirectoryError::Io(err) => Some(err),
            DirectoryError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DirectoryError {
    fn from(err: io::Error) -> Self {
        DirectoryError::Io(err)
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_balance_message_names_account() {
        let err = AccountingError::InsufficientBalance(1002, Decimal::from(1500));
        assert_eq!(
            "Insufficient balance: account 1002 cannot withdraw $1500.",
            err.to_string()
        );
    }

    #[test]
    fn parse_error_has_source() {
        let err: DirectoryError = serde_json::from_str::<Vec<u8>>("{")
            .unwrap_err()
            .into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed to parse the directory"));
    }
}
