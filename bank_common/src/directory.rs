//! The fixed, in-memory collection of customers
//!
//! A [`Directory`] is built once at startup and then handed to the
//! interactive session. Customers are never added or removed afterwards;
//! only their accounts change.

use crate::account::Account;
use crate::customer::Customer;
use crate::errors::DirectoryError;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct Directory {
    customers: Vec<Customer>,
}

impl Directory {
    /// Returns the reference directory of three customers,
    /// with accounts 1001, 1002 and 1003.
    pub fn seeded() -> Self {
        Directory {
            customers: vec![
                Customer::new(
                    "Hamza",
                    "Khan",
                    "Male",
                    35,
                    1234567891,
                    Account::new(1001, Decimal::from(500)),
                ),
                Customer::new(
                    "Aiman",
                    "Khan",
                    "Female",
                    25,
                    1334567891,
                    Account::new(1002, Decimal::from(1000)),
                ),
                Customer::new(
                    "Minal",
                    "Khan",
                    "Female",
                    24,
                    1434567891,
                    Account::new(1003, Decimal::from(2000)),
                ),
            ],
        }
    }

    /// Builds a directory out of the given customers, keeping their order.
    ///
    /// # Errors
    /// - Two customers share an account number, `DirectoryError::DuplicateAccountNumber`;
    /// - An account opens with a negative balance, `DirectoryError::NegativeBalance`;
    /// - A customer's age is zero, `DirectoryError::InvalidAge`.
    pub fn from_customers(customers: Vec<Customer>) -> Result<Self, DirectoryError> {
        let mut seen = BTreeSet::new();

        for customer in &customers {
            let account = customer.account();

            if !seen.insert(account.account_number()) {
                return Err(DirectoryError::DuplicateAccountNumber(
                    account.account_number(),
                ));
            }
            if account.check_balance() < Decimal::ZERO {
                return Err(DirectoryError::NegativeBalance(
                    account.account_number(),
                    account.check_balance(),
                ));
            }
            if customer.age == 0 {
                return Err(DirectoryError::InvalidAge(customer.full_name()));
            }
        }

        Ok(Directory { customers })
    }

    /// Reads a JSON array of customers from `path`, and validates it
    /// the same way as [`Directory::from_customers`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parses a JSON array of customers.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let mut customers: Vec<Customer> = serde_json::from_str(json)?;
        for customer in customers.iter_mut() {
            customer.account_mut().normalize();
        }
        log::debug!("Parsed {} customers", customers.len());

        Self::from_customers(customers)
    }

    /// Returns the first customer whose account number is `account_number`
    pub fn find_by_account_number(&self, account_number: u32) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.account().account_number() == account_number)
    }

    /// Mutable variant of [`Directory::find_by_account_number`]
    pub fn find_by_account_number_mut(&mut self, account_number: u32) -> Option<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| c.account().account_number() == account_number)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

}

impl Default for Directory {
    fn default() -> Self {
        Self::seeded()
    }
}
