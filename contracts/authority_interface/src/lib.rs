#![no_std]

use soroban_sdk::{contractclient, Address, Env};

/// Minting Authority Interface.
/// The surface a sale agent contract needs from a mintable token.
/// The agent passes its own address as `caller`; the token compares it
/// against the delegated agent after host authentication.
#[contractclient(name = "AuthorityClient")]
pub trait AuthorityInterface {
    fn set_sale_agent(env: Env, caller: Address, new_agent: Address);
    fn mint(env: Env, caller: Address, to: Address, amount: i128);
    fn finish_minting(env: Env, caller: Address);
    fn minting_finished(env: Env) -> bool;
    fn balance(env: Env, id: Address) -> i128;
}
