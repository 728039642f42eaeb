#![no_std]

pub mod error;
pub mod fungible;
pub mod math;

pub use error::LedgerError;
