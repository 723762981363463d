//! Helper functions that are common to CLI apps

use crate::cli::constants::ERROR_PREFIX;
use crate::cli::operation::Operation;
use crate::errors::AMOUNT_NOT_VALID_MSG;
use crate::validation;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// **Contains the numbered operation menu.**
///
/// Wrapped by `menu()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added operation.
fn menu_contents() -> String {
    Operation::ALL
        .iter()
        .enumerate()
        .map(|(i, op)| format!("{}) {}", i + 1, op))
        .collect::<Vec<_>>()
        .join("  ")
}

/// **Writes the operation menu.**
pub fn menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", menu_contents())
}

/// **Reads one line of input, after writing `label` as a prompt.**
///
/// Returns `None` at the end of input, and the trimmed line otherwise.
/// Blank lines come back as empty strings, so callers can decide to ignore them.
/// Bytes that aren't valid UTF-8 are replaced with `U+FFFD`, so such a line
/// fails to parse like any other bad input instead of ending the session.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}

/// Writes an error line with the common prefix.
pub fn write_error<W: Write>(output: &mut W, msg: &str) -> io::Result<()> {
    writeln!(output, "{} {}", ERROR_PREFIX, msg)
}

/// **Parses an account number.**
///
/// Any number is accepted as input, in plain or scientific notation,
/// but only a positive integer that fits in a `u32` can name an account:
/// `1001.0` is account 1001, while `0` or `10.5` are `Ok(None)`.
///
/// # Errors
/// The input isn't a number at all.
pub fn parse_account_number(word: &str) -> Result<Option<u32>, String> {
    let word = word.trim();
    let number = Decimal::from_str(word)
        .or_else(|_| Decimal::from_scientific(word))
        .map_err(|_| cannot_parse_account_number(word))?;

    if number <= Decimal::ZERO || !number.fract().is_zero() {
        return Ok(None);
    }

    Ok(number.to_u32())
}

/// Error message for an account number that isn't a number at all,
/// which is friendlier than the standard library's "invalid digit found in string".
pub fn cannot_parse_account_number(word: &str) -> String {
    format!("Please enter a valid number; you provided '{}'.", word)
}

/// **Parses and validates an amount of money.**
///
/// The amount must be a decimal number greater than zero.
///
/// # Errors
/// Returns a message that can be shown to the user as is.
pub fn parse_amount(word: &str) -> Result<Decimal, String> {
    let amount = Decimal::from_str(word.trim()).map_err(|_| {
        format!(
            "Only positive numbers are allowed as the amount; you provided '{}'.",
            word
        )
    })?;

    match validation::is_valid_amount(amount) {
        Some(msg) => Err(format!("{}: '{}'. {}", AMOUNT_NOT_VALID_MSG, word, msg)),
        None => Ok(amount),
    }
}
