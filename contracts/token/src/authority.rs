use soroban_sdk::{log, Address, Env};

use crate::{
    errors::TokenError,
    events::TokenEvents,
    ledger,
    storage::{get_authority, set_authority, AuthorityState},
};

fn load(env: &Env) -> Result<AuthorityState, TokenError> {
    get_authority(env).ok_or(TokenError::NotInitialized)
}

fn require_owner(state: &AuthorityState, caller: &Address) -> Result<(), TokenError> {
    if *caller != state.owner {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

/// Only an exact match against the delegated agent passes. The owner has no
/// implicit minting right.
fn require_sale_agent(state: &AuthorityState, caller: &Address) -> Result<(), TokenError> {
    match &state.sale_agent {
        Some(agent) if agent == caller => Ok(()),
        _ => Err(TokenError::Unauthorized),
    }
}

/// Replaces the sale agent. Allowed whether or not minting is finished.
pub fn delegate_agent(env: &Env, caller: &Address, new_agent: &Address) -> Result<(), TokenError> {
    let mut state = load(env)?;
    require_owner(&state, caller)?;

    log!(env, "sale agent delegated", new_agent.clone());
    state.sale_agent = Some(new_agent.clone());
    set_authority(env, &state);
    Ok(())
}

/// Creates `amount` new tokens for `to`.
///
/// # Errors
/// | Error            | Condition                                   |
/// |------------------|---------------------------------------------|
/// | `NotInitialized` | Contract has no authority state yet         |
/// | `Unauthorized`   | `caller` is not the current sale agent      |
/// | `MintingClosed`  | `finish_minting` already succeeded          |
/// | `NegativeAmount` | `amount < 0`                                |
/// | `Overflow`       | Balance or total supply would exceed i128   |
///
/// Authorization is checked before the finished flag, so a stranger calling
/// after finalization sees `Unauthorized`.
pub fn mint(env: &Env, caller: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    let state = load(env)?;
    require_sale_agent(&state, caller)?;

    if state.minting_finished {
        return Err(TokenError::MintingClosed);
    }

    ledger::credit_supply(env, to, amount)?;

    TokenEvents::mint(env, to, amount);
    TokenEvents::transfer(env, None, to, amount);
    Ok(())
}

/// Closes minting for good. There is no path back to an open state.
pub fn finish_minting(env: &Env, caller: &Address) -> Result<(), TokenError> {
    let mut state = load(env)?;
    require_sale_agent(&state, caller)?;

    if state.minting_finished {
        return Err(TokenError::AlreadyFinished);
    }

    log!(env, "minting finished by", caller.clone());
    state.minting_finished = true;
    set_authority(env, &state);

    TokenEvents::mint_finished(env);
    Ok(())
}

pub fn is_finished(env: &Env) -> bool {
    get_authority(env).map(|s| s.minting_finished).unwrap_or(false)
}
