#![no_std]

use mintgate_authority_interface::AuthorityClient;
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    AlreadyInitialized = 500,
    NotInitialized = 501,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Token,
}

fn get_token(env: &Env) -> Result<Address, SaleError> {
    env.storage().instance().get(&DataKey::Token).ok_or(SaleError::NotInitialized)
}

/// Stand-in for a token sale: mints on every purchase until closed.
/// Must be delegated as the token's sale agent by the token owner.
#[contract]
pub struct MockSaleAgent;

#[contractimpl]
impl MockSaleAgent {
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), SaleError> {
        if env.storage().instance().has(&DataKey::Token) {
            return Err(SaleError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        Ok(())
    }

    /// Mints `amount` to `buyer`. A rejection by the token traps and
    /// reverts the whole purchase.
    pub fn buy(env: Env, buyer: Address, amount: i128) -> Result<(), SaleError> {
        buyer.require_auth();
        let token = get_token(&env)?;
        AuthorityClient::new(&env, &token).mint(&env.current_contract_address(), &buyer, &amount);
        Ok(())
    }

    /// Ends the sale by finalizing minting on the token.
    pub fn close(env: Env) -> Result<(), SaleError> {
        let admin: Address =
            env.storage().instance().get(&DataKey::Admin).ok_or(SaleError::NotInitialized)?;
        admin.require_auth();
        let token = get_token(&env)?;
        AuthorityClient::new(&env, &token).finish_minting(&env.current_contract_address());
        Ok(())
    }

    pub fn token(env: Env) -> Result<Address, SaleError> {
        get_token(&env)
    }
}
