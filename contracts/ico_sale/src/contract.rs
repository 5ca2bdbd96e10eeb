use crate::errors::Error;
use crate::events;
use crate::guard::non_reentrant;
use crate::lifecycle;
use crate::purchase::{self, PaymentRoute};
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Fixed-rate capped token sale with owner-controlled phases"
);

#[contract]
pub struct IcoSaleContract;

#[contractimpl]
impl IcoSaleContract {
    /// One-time setup. `treasury` receives every payment; `native_token` is
    /// the asset contract of the chain's native currency.
    pub fn initialize(
        env: Env,
        owner: Address,
        treasury: Address,
        sale_token: Address,
        accepted_asset: PaymentAsset,
        native_token: Address,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        set_owner(&env, &owner);
        set_treasury(&env, &treasury);
        set_native_token(&env, &native_token);
        set_config(
            &env,
            &SaleConfig::unset(accepted_asset.clone(), sale_token.clone()),
        );
        set_phase(&env, SalePhase::Uninitialized);
        set_total_raised(&env, 0);
        set_total_distributed(&env, 0);
        extend_instance(&env);

        events::emit_initialized(&env, owner, treasury, sale_token, accepted_asset);
        Ok(())
    }

    // ==================== Lifecycle ====================

    /// Replace the sale terms and move to `Configured`. Not allowed while live.
    pub fn initiate_sale(
        env: Env,
        caller: Address,
        rate: u128,
        start_time: u64,
        end_time: u64,
        min_amount: u128,
        max_amount: u128,
        funding_target: u128,
        restricted_mode: bool,
    ) -> Result<SaleConfig, Error> {
        extend_instance(&env);
        non_reentrant(&env, || {
            lifecycle::initiate_sale(
                &env,
                &caller,
                rate,
                start_time,
                end_time,
                min_amount,
                max_amount,
                funding_target,
                restricted_mode,
            )
        })
    }

    pub fn start_sale(env: Env, caller: Address) -> Result<(), Error> {
        extend_instance(&env);
        non_reentrant(&env, || lifecycle::start_sale(&env, &caller))
    }

    pub fn end_sale(env: Env, caller: Address) -> Result<(), Error> {
        extend_instance(&env);
        non_reentrant(&env, || lifecycle::end_sale(&env, &caller))
    }

    /// Move the contract's remaining sale tokens to the treasury.
    pub fn withdraw_unsold_tokens(env: Env, caller: Address) -> Result<u128, Error> {
        extend_instance(&env);
        non_reentrant(&env, || lifecycle::withdraw_unsold(&env, &caller))
    }

    // ==================== Purchases ====================

    /// Pay `paid_amount` of the native currency; returns the sale tokens delivered.
    pub fn buy_token_with_native_currency(
        env: Env,
        buyer: Address,
        paid_amount: u128,
    ) -> Result<u128, Error> {
        extend_instance(&env);
        non_reentrant(&env, || {
            purchase::execute(&env, &buyer, paid_amount, PaymentRoute::Native)
        })
    }

    /// Pay `paid_amount` of the accepted token. The buyer must have approved
    /// this contract for at least that amount.
    pub fn buy_token_with_asset(
        env: Env,
        buyer: Address,
        paid_amount: u128,
    ) -> Result<u128, Error> {
        extend_instance(&env);
        non_reentrant(&env, || {
            purchase::execute(&env, &buyer, paid_amount, PaymentRoute::Asset)
        })
    }

    /// Route to whichever purchase path matches the accepted asset.
    pub fn buy_token(env: Env, buyer: Address, paid_amount: u128) -> Result<u128, Error> {
        let route = if get_config(&env)?.accepted_asset.is_native() {
            PaymentRoute::Native
        } else {
            PaymentRoute::Asset
        };
        extend_instance(&env);
        non_reentrant(&env, || purchase::execute(&env, &buyer, paid_amount, route))
    }

    // ==================== Views ====================

    pub fn is_sale_live(env: Env) -> bool {
        lifecycle::is_sale_live(&env)
    }

    pub fn accept_token(env: Env) -> Result<PaymentAsset, Error> {
        Ok(get_config(&env)?.accepted_asset)
    }

    pub fn sale_token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.sale_asset)
    }

    /// Current terms; numeric fields are zero until a sale is initiated.
    pub fn sale_infos(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn sale_phase(env: Env) -> SalePhase {
        get_phase(&env)
    }

    pub fn total_funding(env: Env) -> u128 {
        get_total_raised(&env)
    }

    pub fn total_distributed(env: Env) -> u128 {
        get_total_distributed(&env)
    }

    pub fn contribution_of(env: Env, buyer: Address) -> u128 {
        get_contribution(&env, &buyer)
    }

    pub fn tokens_purchased(env: Env, buyer: Address) -> u128 {
        get_distributed(&env, &buyer)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn treasury(env: Env) -> Result<Address, Error> {
        get_treasury(&env)
    }
}
