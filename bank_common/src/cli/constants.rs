/// Operation names, as typed by the user

pub const DEPOSIT: &str = "deposit";
pub const WITHDRAW: &str = "withdraw";
pub const CHECK_BALANCE: &str = "check balance";
pub const BALANCE: &str = "balance";
pub const EXIT: &str = "exit";
pub const QUIT: &str = "quit";

/// Prompts

pub const ACCOUNT_NUMBER_PROMPT: &str = "Enter your account number: ";
pub const OPERATION_PROMPT: &str = "Select an operation: ";
pub const DEPOSIT_AMOUNT_PROMPT: &str = "Enter the amount to deposit: ";
pub const WITHDRAW_AMOUNT_PROMPT: &str = "Enter the amount to withdraw: ";

/// Messages

pub const INVALID_ACCOUNT_MSG: &str = "Invalid account number. Please try again.";
pub const EXITING_MSG: &str = "Exiting Bank program";
pub const GOODBYE_MSG: &str = "Thank you for using our bank service! Goodbye!";
pub const ERROR_PREFIX: &str = "[ERROR]";
