use crate::types::{PaymentAsset, SaleConfig};
use soroban_sdk::{contracttype, symbol_short, Address, Env};

// ==================== Event Payload Structs ====================
// Published under ("SALE", <kind>); indexers filter on the first topic.

#[derive(Clone)]
#[contracttype]
pub struct SaleInitializedEvent {
    pub owner: Address,
    pub treasury: Address,
    pub sale_asset: Address,
    pub accepted_asset: PaymentAsset,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct SaleConfiguredEvent {
    pub config: SaleConfig,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct PhaseChangedEvent {
    pub owner: Address,
    pub total_raised: u128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct PurchaseEvent {
    pub buyer: Address,
    pub accepted_asset: PaymentAsset,
    pub paid_amount: u128,
    pub token_amount: u128,
    pub total_raised: u128,
    pub total_distributed: u128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct WithdrawalEvent {
    pub recipient: Address,
    pub amount: u128,
    pub timestamp: u64,
}

// ==================== Emit Functions ====================

pub fn emit_initialized(
    env: &Env,
    owner: Address,
    treasury: Address,
    sale_asset: Address,
    accepted_asset: PaymentAsset,
) {
    env.events().publish(
        (symbol_short!("SALE"), symbol_short!("INIT")),
        SaleInitializedEvent {
            owner,
            treasury,
            sale_asset,
            accepted_asset,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_sale_configured(env: &Env, config: SaleConfig) {
    env.events().publish(
        (symbol_short!("SALE"), symbol_short!("CONFIG")),
        SaleConfiguredEvent {
            config,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_sale_started(env: &Env, owner: Address, total_raised: u128) {
    env.events().publish(
        (symbol_short!("SALE"), symbol_short!("START")),
        PhaseChangedEvent {
            owner,
            total_raised,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_sale_ended(env: &Env, owner: Address, total_raised: u128) {
    env.events().publish(
        (symbol_short!("SALE"), symbol_short!("END")),
        PhaseChangedEvent {
            owner,
            total_raised,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_purchase(
    env: &Env,
    buyer: Address,
    accepted_asset: PaymentAsset,
    paid_amount: u128,
    token_amount: u128,
    total_raised: u128,
    total_distributed: u128,
) {
    env.events().publish(
        (symbol_short!("SALE"), symbol_short!("BUY")),
        PurchaseEvent {
            buyer,
            accepted_asset,
            paid_amount,
            token_amount,
            total_raised,
            total_distributed,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_unsold_withdrawn(env: &Env, recipient: Address, amount: u128) {
    env.events().publish(
        (symbol_short!("SALE"), symbol_short!("WITHDRAW")),
        WithdrawalEvent {
            recipient,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
