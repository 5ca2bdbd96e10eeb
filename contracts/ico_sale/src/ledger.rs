//! Contribution accounting. A purchase is staged in memory, committed
//! before any external transfer, and discarded if that transfer fails.

use crate::errors::Error;
use crate::storage;
use soroban_sdk::{Address, Env};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Totals {
    contribution: u128,
    distributed: u128,
    total_raised: u128,
    total_distributed: u128,
}

impl Totals {
    fn load(env: &Env, buyer: &Address) -> Self {
        Totals {
            contribution: storage::get_contribution(env, buyer),
            distributed: storage::get_distributed(env, buyer),
            total_raised: storage::get_total_raised(env),
            total_distributed: storage::get_total_distributed(env),
        }
    }

    fn store(&self, env: &Env, buyer: &Address) {
        storage::set_contribution(env, buyer, self.contribution);
        storage::set_distributed(env, buyer, self.distributed);
        storage::set_total_raised(env, self.total_raised);
        storage::set_total_distributed(env, self.total_distributed);
    }
}

pub struct StagedPurchase {
    buyer: Address,
    before: Totals,
    after: Totals,
}

impl StagedPurchase {
    pub fn stage(
        env: &Env,
        buyer: &Address,
        paid_amount: u128,
        token_amount: u128,
    ) -> Result<Self, Error> {
        let before = Totals::load(env, buyer);
        let after = Totals {
            contribution: checked(before.contribution.checked_add(paid_amount))?,
            distributed: checked(before.distributed.checked_add(token_amount))?,
            total_raised: checked(before.total_raised.checked_add(paid_amount))?,
            total_distributed: checked(before.total_distributed.checked_add(token_amount))?,
        };
        Ok(StagedPurchase {
            buyer: buyer.clone(),
            before,
            after,
        })
    }

    pub fn commit(&self, env: &Env) {
        self.after.store(env, &self.buyer);
    }

    /// Restores the values read at staging time.
    pub fn discard(&self, env: &Env) {
        self.before.store(env, &self.buyer);
    }

    pub fn total_raised(&self) -> u128 {
        self.after.total_raised
    }

    pub fn total_distributed(&self) -> u128 {
        self.after.total_distributed
    }
}

fn checked(value: Option<u128>) -> Result<u128, Error> {
    value.ok_or(Error::ArithmeticOverflow)
}
