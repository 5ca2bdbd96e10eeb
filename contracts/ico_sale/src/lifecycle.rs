//! Owner-gated phase transitions: `configure → start → end`.
//!
//! Transitions are driven by the stored phase. Read liveness
//! ([`is_sale_live`]) is additionally bounded by the sale window, so a sale
//! left `Live` past `end_time` reads as closed until the owner ends it.

use crate::errors::Error;
use crate::events;
use crate::guard::require_owner;
use crate::purchase::settle;
use crate::storage;
use crate::types::*;
use soroban_sdk::{token, Address, Env};

pub fn initiate_sale(
    env: &Env,
    caller: &Address,
    rate: u128,
    start_time: u64,
    end_time: u64,
    min_amount: u128,
    max_amount: u128,
    funding_target: u128,
    restricted_mode: bool,
) -> Result<SaleConfig, Error> {
    require_owner(env, caller)?;

    if storage::get_phase(env) == SalePhase::Live {
        return Err(Error::SaleInProgress);
    }
    if rate == 0 || start_time >= end_time || min_amount > max_amount {
        return Err(Error::InvalidConfig);
    }

    let current = storage::get_config(env)?;
    let config = SaleConfig {
        rate,
        start_time,
        end_time,
        min_amount,
        max_amount,
        funding_target,
        restricted_mode,
        accepted_asset: current.accepted_asset,
        sale_asset: current.sale_asset,
    };

    storage::set_config(env, &config);
    storage::set_phase(env, SalePhase::Configured);

    events::emit_sale_configured(env, config.clone());
    Ok(config)
}

pub fn start_sale(env: &Env, caller: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;

    match storage::get_phase(env) {
        SalePhase::Configured => {}
        SalePhase::Live => return Err(Error::AlreadyLive),
        SalePhase::Uninitialized | SalePhase::Ended => return Err(Error::NotConfigured),
    }

    let config = storage::get_config(env)?;
    let now = get_ledger_timestamp(env);
    if now < config.start_time {
        return Err(Error::TooEarly);
    }
    if now >= config.end_time {
        return Err(Error::WindowClosed);
    }

    storage::set_phase(env, SalePhase::Live);
    events::emit_sale_started(env, caller.clone(), storage::get_total_raised(env));
    Ok(())
}

/// Closes a live sale, whether or not its window has elapsed.
pub fn end_sale(env: &Env, caller: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;

    if storage::get_phase(env) != SalePhase::Live {
        return Err(Error::NotLive);
    }

    storage::set_phase(env, SalePhase::Ended);
    events::emit_sale_ended(env, caller.clone(), storage::get_total_raised(env));
    Ok(())
}

pub fn is_sale_live(env: &Env) -> bool {
    if storage::get_phase(env) != SalePhase::Live {
        return false;
    }
    match storage::get_config(env) {
        Ok(config) => config.window_contains(get_ledger_timestamp(env)),
        Err(_) => false,
    }
}

/// Sends the whole sale-token inventory held by the contract to the treasury.
pub fn withdraw_unsold(env: &Env, caller: &Address) -> Result<u128, Error> {
    require_owner(env, caller)?;

    if storage::get_phase(env) == SalePhase::Live {
        return Err(Error::SaleInProgress);
    }

    let config = storage::get_config(env)?;
    let treasury = storage::get_treasury(env)?;
    let sale_token = token::Client::new(env, &config.sale_asset);
    let contract = env.current_contract_address();

    let balance = sale_token.balance(&contract);
    if balance <= 0 {
        return Ok(0);
    }

    settle(sale_token.try_transfer(&contract, &treasury, &balance))?;

    let amount = u128::try_from(balance).map_err(|_| Error::ArithmeticOverflow)?;
    events::emit_unsold_withdrawn(env, treasury, amount);
    Ok(amount)
}
