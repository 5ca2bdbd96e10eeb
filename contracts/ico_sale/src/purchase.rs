//! Validation and execution of a single purchase.
//!
//! Checks run in a fixed order: liveness, payment route, per-purchase
//! bounds, funding cap, conversion. The ledger update is committed before
//! any token moves; if a transfer fails the staged update is discarded and
//! the call fails with [`Error::TransferFailed`].

use crate::errors::Error;
use crate::events;
use crate::ledger::StagedPurchase;
use crate::lifecycle::is_sale_live;
use crate::storage;
use crate::types::*;
use soroban_sdk::{token, Address, Env};

/// How the buyer's payment reaches the treasury.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaymentRoute {
    /// Buyer-signed transfer of the native asset.
    Native,
    /// Allowance-based pull of the accepted token.
    Asset,
}

impl PaymentRoute {
    fn accepts(self, asset: &PaymentAsset) -> bool {
        match self {
            PaymentRoute::Native => asset.is_native(),
            PaymentRoute::Asset => !asset.is_native(),
        }
    }
}

/// Sale-token amount for `paid_amount` at `rate`.
pub fn convert(paid_amount: u128, rate: u128) -> Result<u128, Error> {
    paid_amount
        .checked_mul(rate)
        .ok_or(Error::ArithmeticOverflow)
}

/// Runs the purchase and returns the sale-token amount delivered.
pub fn execute(
    env: &Env,
    buyer: &Address,
    paid_amount: u128,
    route: PaymentRoute,
) -> Result<u128, Error> {
    buyer.require_auth();

    if !is_sale_live(env) {
        return Err(Error::SaleNotLive);
    }

    let config = storage::get_config(env)?;
    if !route.accepts(&config.accepted_asset) {
        return Err(Error::UnsupportedPaymentAsset);
    }

    if paid_amount < config.min_amount {
        return Err(Error::BelowMinimum);
    }
    if paid_amount > config.max_amount {
        return Err(Error::AboveMaximum);
    }

    // A sum past u128::MAX is past any target.
    let exceeds_cap = storage::get_total_raised(env)
        .checked_add(paid_amount)
        .map_or(true, |raised_after| raised_after > config.funding_target);
    if exceeds_cap {
        return Err(Error::FundingCapExceeded);
    }

    let token_amount = convert(paid_amount, config.rate)?;
    let paid_units = to_token_units(paid_amount)?;
    let token_units = to_token_units(token_amount)?;

    let staged = StagedPurchase::stage(env, buyer, paid_amount, token_amount)?;
    staged.commit(env);

    if let Err(err) = move_funds(env, &config, buyer, paid_units, token_units, route) {
        staged.discard(env);
        return Err(err);
    }

    events::emit_purchase(
        env,
        buyer.clone(),
        config.accepted_asset,
        paid_amount,
        token_amount,
        staged.total_raised(),
        staged.total_distributed(),
    );
    Ok(token_amount)
}

fn move_funds(
    env: &Env,
    config: &SaleConfig,
    buyer: &Address,
    paid_units: i128,
    token_units: i128,
    route: PaymentRoute,
) -> Result<(), Error> {
    let treasury = storage::get_treasury(env)?;
    let contract = env.current_contract_address();

    match (route, &config.accepted_asset) {
        (PaymentRoute::Native, _) => {
            let native = token::Client::new(env, &storage::get_native_token(env)?);
            settle(native.try_transfer(buyer, &treasury, &paid_units))?;
        }
        (PaymentRoute::Asset, PaymentAsset::Token(asset)) => {
            let accepted = token::Client::new(env, asset);
            settle(accepted.try_transfer_from(&contract, buyer, &treasury, &paid_units))?;
        }
        (PaymentRoute::Asset, PaymentAsset::Native) => {
            return Err(Error::UnsupportedPaymentAsset);
        }
    }

    let sale_token = token::Client::new(env, &config.sale_asset);
    settle(sale_token.try_transfer(&contract, buyer, &token_units))
}

/// Collapses a `try_*` token call into the sale's error space.
pub(crate) fn settle<T, E>(outcome: Result<Result<(), T>, E>) -> Result<(), Error> {
    match outcome {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

fn to_token_units(amount: u128) -> Result<i128, Error> {
    i128::try_from(amount).map_err(|_| Error::ArithmeticOverflow)
}
