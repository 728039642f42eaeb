use ledger_common::LedgerError;
use soroban_sdk::{contracttype, Address, Env};

#[soroban_sdk::contractclient(name = "LedgerTokenClient")]
pub trait LedgerToken {
    fn decimals(env: Env) -> u32;
    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), LedgerError>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LedgerError>;
}

/// Allow-list exposed by the collateral token.
#[soroban_sdk::contractclient(name = "ComplianceRegistryClient")]
pub trait ComplianceRegistry {
    fn is_whitelisted(env: Env, account: Address) -> bool;
}

#[soroban_sdk::contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn get_price(env: Env, asset: Address) -> Result<u128, LedgerError>;
}

#[contracttype]
pub enum DataKey {
    Initialized,
    Admin,
    Config,
    PoolLiquidity, // u128, stable smallest units
    Totals,
    Position(Address),
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub collateral_amount: u128,
    pub debt_amount: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub oracle: Address,
    pub collateral_token: Address,
    pub stable_token: Address,
    pub collateral_decimals: u32,
    pub stable_decimals: u32,
    pub max_ltv_percent: u32,
    pub liquidation_threshold_percent: u32,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolTotals {
    pub total_collateral: u128,
    pub total_debt: u128,
}
