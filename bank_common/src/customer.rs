use crate::account::Account;
use serde::{Deserialize, Serialize};

/// **A bank customer**
///
/// Every customer owns exactly one [`Account`] for its whole lifetime.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: u8,
    pub mobile_number: u64,
    account: Account,
}

impl Customer {
    pub fn new(
        first_name: &str,
        last_name: &str,
        gender: &str,
        age: u8,
        mobile_number: u64,
        account: Account,
    ) -> Self {
        Customer {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            gender: gender.to_string(),
            age,
            mobile_number,
            account,
        }
    }

    /// Returns "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn full_name_joins_first_and_last() {
        let customer = Customer::new(
            "Hamza",
            "Khan",
            "Male",
            35,
            1234567891,
            Account::new(1001, Decimal::from(500)),
        );
        assert_eq!("Hamza Khan", customer.full_name());
        assert_eq!(1001, customer.account().account_number());
    }
}
