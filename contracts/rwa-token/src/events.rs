use soroban_sdk::{contractevent, Address};

/// Emitted whenever an allow-list flag changes.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistUpdated {
    #[topic]
    pub account: Address,
    pub listed: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminUpdated {
    #[topic]
    pub admin: Address,
}
