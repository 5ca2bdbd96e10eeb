use soroban_sdk::{contracttype, Address, Env};

/// Lifecycle of the single sale configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SalePhase {
    Uninitialized = 0,
    Configured = 1,
    Live = 2,
    Ended = 3,
}

/// What buyers pay with.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum PaymentAsset {
    /// The chain's native currency, reached through its asset contract.
    Native,
    Token(Address),
}

impl PaymentAsset {
    pub fn is_native(&self) -> bool {
        matches!(self, PaymentAsset::Native)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub rate: u128, // sale-token units per accepted-asset unit
    pub start_time: u64,
    pub end_time: u64,
    pub min_amount: u128, // per purchase, accepted-asset units
    pub max_amount: u128,
    pub funding_target: u128, // lifetime cap on total raised
    pub restricted_mode: bool,
    pub accepted_asset: PaymentAsset,
    pub sale_asset: Address,
}

impl SaleConfig {
    /// Zero-valued terms for a sale that has not been initiated yet.
    pub fn unset(accepted_asset: PaymentAsset, sale_asset: Address) -> Self {
        SaleConfig {
            rate: 0,
            start_time: 0,
            end_time: 0,
            min_amount: 0,
            max_amount: 0,
            funding_target: 0,
            restricted_mode: false,
            accepted_asset,
            sale_asset,
        }
    }

    /// Half-open window `[start_time, end_time)`.
    pub fn window_contains(&self, now: u64) -> bool {
        now >= self.start_time && now < self.end_time
    }
}

#[contracttype]
pub enum DataKey {
    // instance
    Owner,
    Treasury,
    NativeToken,
    Config,
    Phase,
    TotalRaised,
    TotalDistributed,
    // persistent, one entry per buyer
    Contribution(Address),
    Distributed(Address),
    // temporary
    ReentrancyLock,
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
