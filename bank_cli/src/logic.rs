//! The interactive loop
//!
//! A [`Session`] is a small synchronous state machine:
//! it writes a prompt, reads one line, validates it, and moves to the next [`State`].
//! Input and output are generic so the whole conversation can be scripted in tests.

use bank_common::cli::constants::*;
use bank_common::cli::helpers::*;
use bank_common::cli::operation::Operation;
use bank_common::errors::{AccountingError, DirectoryError};
use bank_common::tx::Tx;
use bank_common::{Account, Directory};
use rust_decimal::Decimal;
use std::io::{self, stdin, stdout, BufRead, Write};

/// Where the conversation currently is
///
/// Account numbers carried by the states are known to exist in the directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    AwaitAccountNumber,
    AwaitOperationSelect(u32),
    AwaitDepositAmount(u32),
    AwaitWithdrawAmount(u32),
    Terminated,
}

pub struct Session<'a, R, W> {
    directory: &'a mut Directory,
    input: R,
    output: W,
    state: State,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(directory: &'a mut Directory, input: R, output: W) -> Self {
        Session {
            directory,
            input,
            output,
            state: State::AwaitAccountNumber,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Gives the output back, so tests can inspect the transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// **Runs the conversation until the user exits, or the input ends.**
    ///
    /// # Errors
    /// Only I/O errors on the input or output end the session early.
    pub fn run(&mut self) -> io::Result<()> {
        while self.state != State::Terminated {
            self.state = self.step()?;
        }

        Ok(())
    }

    /// Handles exactly one line of input and returns the next state.
    pub fn step(&mut self) -> io::Result<State> {
        match self.state {
            State::AwaitAccountNumber => self.await_account_number(),
            State::AwaitOperationSelect(account) => self.await_operation(account),
            State::AwaitDepositAmount(account) => {
                self.await_amount(account, DEPOSIT_AMOUNT_PROMPT, Account::deposit)
            }
            State::AwaitWithdrawAmount(account) => {
                self.await_amount(account, WITHDRAW_AMOUNT_PROMPT, Account::withdraw)
            }
            State::Terminated => Ok(State::Terminated),
        }
    }

    fn await_account_number(&mut self) -> io::Result<State> {
        let line = match read_line(&mut self.input, &mut self.output, ACCOUNT_NUMBER_PROMPT)? {
            Some(line) => line,
            None => return self.end_of_input(),
        };
        if line.is_empty() {
            return Ok(State::AwaitAccountNumber);
        }

        let account = match parse_account_number(&line) {
            Ok(account) => account,
            Err(msg) => {
                write_error(&mut self.output, &msg)?;
                return Ok(State::AwaitAccountNumber);
            }
        };

        match account.and_then(|n| self.directory.find_by_account_number(n).map(|c| (n, c))) {
            Some((account, customer)) => {
                log::info!("Account {} selected", account);
                writeln!(self.output, "Welcome, {}", customer.full_name())?;
                menu(&mut self.output)?;
                Ok(State::AwaitOperationSelect(account))
            }
            None => {
                log::warn!("No customer with account number {}", line);
                writeln!(self.output, "{}", INVALID_ACCOUNT_MSG)?;
                Ok(State::AwaitAccountNumber)
            }
        }
    }

    fn await_operation(&mut self, account: u32) -> io::Result<State> {
        let line = match read_line(&mut self.input, &mut self.output, OPERATION_PROMPT)? {
            Some(line) => line,
            None => return self.end_of_input(),
        };

        let operation = match Operation::parse(&line) {
            Some(operation) => operation,
            None => {
                writeln!(self.output, "Unrecognized operation '{}'; choose one of:", line)?;
                menu(&mut self.output)?;
                return Ok(State::AwaitOperationSelect(account));
            }
        };
        log::debug!("Operation {:?} on account {}", operation, account);

        match operation {
            Operation::Deposit => Ok(State::AwaitDepositAmount(account)),
            Operation::Withdraw => Ok(State::AwaitWithdrawAmount(account)),
            Operation::CheckBalance => {
                match self.directory.find_by_account_number(account) {
                    Some(customer) => writeln!(
                        self.output,
                        "Current balance: ${}",
                        customer.account().check_balance()
                    )?,
                    None => write_error(
                        &mut self.output,
                        &AccountingError::AccountNotFound(account).to_string(),
                    )?,
                }
                Ok(State::AwaitAccountNumber)
            }
            Operation::Exit => {
                log::info!("Exit selected");
                writeln!(self.output, "{}", EXITING_MSG)?;
                writeln!(self.output, "{}", GOODBYE_MSG)?;
                Ok(State::Terminated)
            }
        }
    }

    fn await_amount(
        &mut self,
        account: u32,
        prompt: &str,
        apply: fn(&mut Account, Decimal) -> Result<Tx, AccountingError>,
    ) -> io::Result<State> {
        let line = match read_line(&mut self.input, &mut self.output, prompt)? {
            Some(line) => line,
            None => return self.end_of_input(),
        };

        let amount = match parse_amount(&line) {
            Ok(amount) => amount,
            Err(msg) => {
                write_error(&mut self.output, &msg)?;
                return Ok(self.state);
            }
        };

        let result = self
            .directory
            .find_by_account_number_mut(account)
            .ok_or(AccountingError::AccountNotFound(account))
            .and_then(|customer| apply(customer.account_mut(), amount));

        match result {
            Ok(tx) => {
                log::info!("{:?}", tx);
                writeln!(self.output, "{}", tx)?;
            }
            Err(err) => {
                log::warn!("{:?}", err);
                write_error(&mut self.output, &err.to_string())?;
            }
        }

        Ok(State::AwaitAccountNumber)
    }

    fn end_of_input(&mut self) -> io::Result<State> {
        log::info!("End of input; leaving");
        writeln!(self.output)?;
        Ok(State::Terminated)
    }
}

/// **Get the customer directory**
///
/// - If the provided argument is the `None` variant,
///   returns the built-in directory.
/// - If it's a `String`, loads the directory from that JSON file.
///
/// # Errors
/// Any [`DirectoryError`] from loading the file.
pub fn get_directory(path: Option<String>) -> Result<Directory, DirectoryError> {
    match path {
        Some(path) => {
            log::info!("Loading the customer directory from {}", path);
            Directory::load(path)
        }
        None => {
            log::info!("No directory file provided; using the built-in customers");
            Ok(Directory::default())
        }
    }
}

/// Runs a session over the standard input and output.
pub fn main_loop(directory: &mut Directory) -> io::Result<()> {
    let mut session = Session::new(directory, stdin().lock(), stdout().lock());
    session.run()
}
