#![no_std]

mod authority;
mod errors;
mod events;
mod ledger;
mod storage;

#[cfg(test)]
extern crate std;


pub use errors::TokenError;

use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};
use storage::AuthorityState;

/// Highest decimal precision accepted at initialization.
const MAX_DECIMALS: u32 = 18;

#[contract]
pub struct MintableToken;

#[contractimpl]
impl MintableToken {
    pub fn initialize(
        env: Env,
        owner: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if storage::has_authority(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        owner.require_auth();

        if decimal > MAX_DECIMALS {
            return Err(TokenError::InvalidDecimal);
        }

        storage::set_authority(
            &env,
            &AuthorityState { owner, sale_agent: None, minting_finished: false },
        );
        storage::set_total_supply(&env, 0);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata { decimal, name, symbol });
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Minting authority
    // ---------------------------------------------------------------------

    pub fn set_sale_agent(env: Env, caller: Address, new_agent: Address) -> Result<(), TokenError> {
        caller.require_auth();
        authority::delegate_agent(&env, &caller, &new_agent)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        authority::mint(&env, &caller, &to, amount)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn finish_minting(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        authority::finish_minting(&env, &caller)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        storage::get_authority(&env).map(|s| s.owner).ok_or(TokenError::NotInitialized)
    }

    pub fn sale_agent(env: Env) -> Option<Address> {
        storage::get_authority(&env).and_then(|s| s.sale_agent)
    }

    pub fn minting_finished(env: Env) -> bool {
        authority::is_finished(&env)
    }

    // ---------------------------------------------------------------------
    // Ledger
    // ---------------------------------------------------------------------

    pub fn balance(env: Env, id: Address) -> i128 {
        ledger::balance_of(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        if !storage::has_authority(&env) {
            return Err(TokenError::NotInitialized);
        }
        ledger::transfer(&env, &from, &to, amount)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Self::metadata(&env).map(|m| m.decimal)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Self::metadata(&env).map(|m| m.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Self::metadata(&env).map(|m| m.symbol)
    }
}

impl MintableToken {
    fn metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
        if !storage::has_authority(env) {
            return Err(TokenError::NotInitialized);
        }
        Ok(TokenUtils::new(env).metadata().get_metadata())
    }
}
