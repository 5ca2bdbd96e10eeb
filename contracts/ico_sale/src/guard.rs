//! Single-owner authorization and the in-call re-entrancy flag.

use crate::errors::Error;
use crate::storage;
use soroban_sdk::{Address, Env};

/// `caller` must sign and be the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = storage::get_owner(env)?;
    if *caller != owner {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Runs `body` with the re-entrancy flag held. The flag is cleared on
/// every exit path, including when `body` fails.
///
/// The host already rejects a call back into this contract while one of
/// its frames is on the stack, before any entry point runs. The flag is a
/// second check that holds at the contract level.
pub fn non_reentrant<T>(env: &Env, body: impl FnOnce() -> Result<T, Error>) -> Result<T, Error> {
    if storage::is_locked(env) {
        return Err(Error::ReentrantCall);
    }
    storage::set_locked(env);
    let result = body();
    storage::clear_locked(env);
    result
}
