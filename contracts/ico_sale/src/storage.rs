use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_treasury(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Treasury)
        .ok_or(Error::NotInitialized)
}

pub fn set_treasury(env: &Env, treasury: &Address) {
    env.storage().instance().set(&DataKey::Treasury, treasury);
}

pub fn get_native_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(Error::NotInitialized)
}

pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::NativeToken, token);
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_phase(env: &Env) -> SalePhase {
    env.storage()
        .instance()
        .get(&DataKey::Phase)
        .unwrap_or(SalePhase::Uninitialized)
}

pub fn set_phase(env: &Env, phase: SalePhase) {
    env.storage().instance().set(&DataKey::Phase, &phase);
}

pub fn get_total_raised(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, amount: u128) {
    env.storage().instance().set(&DataKey::TotalRaised, &amount);
}

pub fn get_total_distributed(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalDistributed)
        .unwrap_or(0)
}

pub fn set_total_distributed(env: &Env, amount: u128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalDistributed, &amount);
}

pub fn get_contribution(env: &Env, buyer: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(buyer.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, buyer: &Address, amount: u128) {
    let key = DataKey::Contribution(buyer.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn get_distributed(env: &Env, buyer: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Distributed(buyer.clone()))
        .unwrap_or(0)
}

pub fn set_distributed(env: &Env, buyer: &Address, amount: u128) {
    let key = DataKey::Distributed(buyer.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .temporary()
        .get(&DataKey::ReentrancyLock)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env) {
    env.storage()
        .temporary()
        .set(&DataKey::ReentrancyLock, &true);
}

pub fn clear_locked(env: &Env) {
    env.storage().temporary().remove(&DataKey::ReentrancyLock);
}
