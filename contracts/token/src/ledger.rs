use soroban_sdk::{Address, Env};

use crate::{
    errors::TokenError,
    events::TokenEvents,
    storage::{get_balance, get_total_supply, set_balance, set_total_supply},
};

pub fn balance_of(env: &Env, id: &Address) -> i128 {
    get_balance(env, id)
}

/// Credits freshly created supply to `account`.
///
/// Both the new balance and the new total supply are computed before either
/// is written, so an overflow leaves storage untouched.
pub fn credit_supply(env: &Env, account: &Address, amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }

    let balance = get_balance(env, account)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    set_balance(env, account, balance);
    set_total_supply(env, supply);
    Ok(())
}

/// Moves `amount` between two holders. Independent of the minting state.
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }

    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }

    if from != to {
        let to_balance = get_balance(env, to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        set_balance(env, from, from_balance - amount);
        set_balance(env, to, to_balance);
    }

    TokenEvents::transfer(env, Some(from.clone()), to, amount);
    Ok(())
}
