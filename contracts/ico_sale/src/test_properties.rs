//! Randomized lifecycle/purchase sequences checked against a running model.

#![allow(clippy::unwrap_used)]

use std::vec::Vec as StdVec;

use proptest::prelude::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

use crate::{Error, IcoSaleContract, IcoSaleContractClient, PaymentAsset, SalePhase};

const START: u64 = 1_700_000_000;
const WINDOW: u64 = 3_600;
const RATE: u128 = 7;
const MIN_AMOUNT: u128 = 5;
const MAX_AMOUNT: u128 = 2_500;
const FUNDING_TARGET: u128 = 20_000;
const BUYERS: usize = 4;

#[derive(Clone, Debug)]
enum Step {
    Buy { buyer: usize, amount: u128 },
    Advance { seconds: u64 },
    Start,
    End,
    Reinitiate,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0..BUYERS, 0u128..3_000).prop_map(|(buyer, amount)| Step::Buy { buyer, amount }),
        2 => (0u64..1_200).prop_map(|seconds| Step::Advance { seconds }),
        1 => Just(Step::Start),
        1 => Just(Step::End),
        1 => Just(Step::Reinitiate),
    ]
}

struct Harness {
    env: Env,
    client: IcoSaleContractClient<'static>,
    owner: Address,
    buyers: StdVec<Address>,
}

impl Harness {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.budget().reset_unlimited();
        env.ledger().with_mut(|l| l.timestamp = START);

        let owner = Address::generate(&env);
        let treasury = Address::generate(&env);
        let token_admin = Address::generate(&env);

        let sale_id = env
            .register_stellar_asset_contract_v2(token_admin.clone())
            .address();
        let native_id = env
            .register_stellar_asset_contract_v2(token_admin.clone())
            .address();

        let contract_id = env.register_contract(None, IcoSaleContract);
        let client = IcoSaleContractClient::new(&env, &contract_id);
        client.initialize(&owner, &treasury, &sale_id, &PaymentAsset::Native, &native_id);

        token::StellarAssetClient::new(&env, &sale_id)
            .mint(&contract_id, &((FUNDING_TARGET * RATE) as i128));

        let native = token::StellarAssetClient::new(&env, &native_id);
        let buyers: StdVec<Address> = (0..BUYERS)
            .map(|_| {
                let buyer = Address::generate(&env);
                native.mint(&buyer, &(FUNDING_TARGET as i128));
                buyer
            })
            .collect();

        let harness = Harness {
            env,
            client,
            owner,
            buyers,
        };
        harness.reinitiate().unwrap();
        harness
    }

    fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    fn reinitiate(&self) -> Result<(), Error> {
        let now = self.now();
        match self.client.try_initiate_sale(
            &self.owner,
            &RATE,
            &now,
            &(now + WINDOW),
            &MIN_AMOUNT,
            &MAX_AMOUNT,
            &FUNDING_TARGET,
            &false,
        ) {
            Ok(_) => Ok(()),
            Err(Ok(err)) => Err(err),
            Err(Err(_)) => panic!("host error on initiate_sale"),
        }
    }

    /// Expected rejection for a purchase of `amount`, or `None` if it should pass.
    fn expected_rejection(&self, amount: u128) -> Option<Error> {
        if !self.client.is_sale_live() {
            Some(Error::SaleNotLive)
        } else if amount < MIN_AMOUNT {
            Some(Error::BelowMinimum)
        } else if amount > MAX_AMOUNT {
            Some(Error::AboveMaximum)
        } else if self.client.total_funding() + amount > FUNDING_TARGET {
            Some(Error::FundingCapExceeded)
        } else {
            None
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_random_sequences_preserve_ledger_invariants(
        steps in prop::collection::vec(step_strategy(), 1..60)
    ) {
        let h = Harness::new();
        let mut model_total: u128 = 0;
        let mut model_contrib = [0u128; BUYERS];

        for step in steps {
            match step {
                Step::Buy { buyer, amount } => {
                    let expected = h.expected_rejection(amount);
                    let res = h
                        .client
                        .try_buy_token_with_native_currency(&h.buyers[buyer], &amount);
                    match expected {
                        None => {
                            prop_assert_eq!(res, Ok(Ok(amount * RATE)));
                            model_total += amount;
                            model_contrib[buyer] += amount;
                        }
                        Some(err) => prop_assert_eq!(res, Err(Ok(err))),
                    }
                }
                Step::Advance { seconds } => {
                    let next = h.now() + seconds;
                    h.env.ledger().with_mut(|l| l.timestamp = next);
                }
                Step::Start => {
                    let phase = h.client.sale_phase();
                    let res = h.client.try_start_sale(&h.owner);
                    if phase == SalePhase::Configured && res.is_ok() {
                        prop_assert_eq!(h.client.sale_phase(), SalePhase::Live);
                    } else {
                        prop_assert!(res.is_err());
                        prop_assert_eq!(h.client.sale_phase(), phase);
                    }
                }
                Step::End => {
                    let phase = h.client.sale_phase();
                    let res = h.client.try_end_sale(&h.owner);
                    if phase == SalePhase::Live {
                        prop_assert!(res.is_ok());
                        prop_assert_eq!(h.client.sale_phase(), SalePhase::Ended);
                    } else {
                        prop_assert_eq!(res, Err(Ok(Error::NotLive)));
                        prop_assert_eq!(h.client.sale_phase(), phase);
                    }
                }
                Step::Reinitiate => {
                    let phase = h.client.sale_phase();
                    let res = h.reinitiate();
                    if phase == SalePhase::Live {
                        prop_assert_eq!(res, Err(Error::SaleInProgress));
                    } else {
                        prop_assert_eq!(res, Ok(()));
                        prop_assert_eq!(h.client.sale_phase(), SalePhase::Configured);
                    }
                }
            }

            let total = h.client.total_funding();
            prop_assert!(total <= FUNDING_TARGET, "cap breached: {}", total);
            prop_assert_eq!(total, model_total);
            prop_assert_eq!(h.client.total_distributed(), total * RATE);

            let ledger_sum: u128 = h
                .buyers
                .iter()
                .map(|b| h.client.contribution_of(b))
                .sum();
            prop_assert_eq!(ledger_sum, total);
            for (idx, buyer) in h.buyers.iter().enumerate() {
                prop_assert_eq!(h.client.contribution_of(buyer), model_contrib[idx]);
                prop_assert_eq!(h.client.tokens_purchased(buyer), model_contrib[idx] * RATE);
            }
        }
    }

    #[test]
    fn prop_single_purchase_respects_bounds(amount in 0u128..3_000) {
        let h = Harness::new();
        h.client.start_sale(&h.owner);

        let res = h
            .client
            .try_buy_token_with_native_currency(&h.buyers[0], &amount);
        if amount < MIN_AMOUNT {
            prop_assert_eq!(res, Err(Ok(Error::BelowMinimum)));
            prop_assert_eq!(h.client.total_funding(), 0);
        } else if amount > MAX_AMOUNT {
            prop_assert_eq!(res, Err(Ok(Error::AboveMaximum)));
            prop_assert_eq!(h.client.total_funding(), 0);
        } else {
            prop_assert_eq!(res, Ok(Ok(amount * RATE)));
            prop_assert_eq!(h.client.total_funding(), amount);
        }
    }
}
