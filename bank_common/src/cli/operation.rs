//! The operations a customer can pick from the menu

use crate::cli::constants::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdraw,
    CheckBalance,
    Exit,
}

impl Operation {
    /// All operations, in menu order
    pub const ALL: [Operation; 4] = [
        Operation::Deposit,
        Operation::Withdraw,
        Operation::CheckBalance,
        Operation::Exit,
    ];

    /// **Parses a menu selection.**
    ///
    /// Accepts the 1-based menu position, the full name, or a short variant,
    /// ignoring case and surrounding whitespace.
    pub fn parse(selection: &str) -> Option<Operation> {
        let selection = selection.trim().to_lowercase();
        let selection = selection.split_whitespace().collect::<Vec<_>>().join(" ");

        match selection.as_str() {
            "1" | DEPOSIT | "d" => Some(Operation::Deposit),
            "2" | WITHDRAW | "w" => Some(Operation::Withdraw),
            "3" | CHECK_BALANCE | BALANCE | "b" => Some(Operation::CheckBalance),
            "4" | EXIT | QUIT | "e" | "q" => Some(Operation::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Deposit => "Deposit",
            Operation::Withdraw => "Withdraw",
            Operation::CheckBalance => "Check Balance",
            Operation::Exit => "Exit",
        };
        write!(f, "{}", label)
    }
}
