#![no_std]

mod constants;
mod contract;
mod events;
mod helpers;
mod storage;

pub use crate::contract::*;
pub use crate::storage::{PoolConfig, PoolTotals, Position};
