#![no_std]
#![allow(clippy::too_many_arguments)]

#[cfg(test)]
#[macro_use]
extern crate std;

mod contract;
mod errors;
mod events;
mod guard;
mod ledger;
mod lifecycle;
mod purchase;
mod storage;
mod types;

#[cfg(test)]
mod test_properties;

pub use contract::{IcoSaleContract, IcoSaleContractClient};
pub use errors::Error;
pub use events::{PurchaseEvent, SaleConfiguredEvent};
pub use types::{PaymentAsset, SaleConfig, SalePhase};
