use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInitialized {
    #[topic]
    pub admin: Address,
    pub oracle: Address,
    pub collateral_token: Address,
    pub stable_token: Address,
    pub max_ltv_percent: u32,
    pub liquidation_threshold_percent: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolFunded {
    #[topic]
    pub provider: Address,
    pub amount: u128,
    pub pool_liquidity: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralLocked {
    #[topic]
    pub user: Address,
    pub amount: u128,
    pub collateral_amount: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Borrowed {
    #[topic]
    pub user: Address,
    pub amount: u128,
    pub debt_amount: u128,
    pub pool_liquidity: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Repaid {
    #[topic]
    pub user: Address,
    pub amount: u128,
    pub debt_amount: u128,
    pub pool_liquidity: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralUnlocked {
    #[topic]
    pub user: Address,
    pub amount: u128,
    pub collateral_amount: u128,
}

/// Full-position seizure: the liquidator paid `debt_repaid` and received
/// `collateral_seized`.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Liquidated {
    #[topic]
    pub liquidator: Address,
    #[topic]
    pub user: Address,
    pub debt_repaid: u128,
    pub collateral_seized: u128,
}
