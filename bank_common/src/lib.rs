pub mod account;
pub mod cli;
pub mod customer;
pub mod directory;
pub mod errors;
pub mod tx;
pub mod validation;

pub use account::Account;
pub use customer::Customer;
pub use directory::Directory;
