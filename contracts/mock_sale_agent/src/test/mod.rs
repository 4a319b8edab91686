#![cfg(test)]

use mintgate_token::{MintableToken, MintableTokenClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{MockSaleAgent, MockSaleAgentClient, SaleError};

fn setup<'a>() -> (Env, MintableTokenClient<'a>, MockSaleAgentClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env.register_contract(None, MintableToken);
    let token = MintableTokenClient::new(&env, &token_id);
    let sale_id = env.register_contract(None, MockSaleAgent);
    let sale = MockSaleAgentClient::new(&env, &sale_id);

    let owner = Address::generate(&env);
    token.initialize(
        &owner,
        &7u32,
        &String::from_str(&env, "Mintgate Token"),
        &String::from_str(&env, "MGT"),
    );
    sale.initialize(&owner, &token_id);
    token.set_sale_agent(&owner, &sale_id);

    (env, token, sale, owner)
}

#[test]
fn sale_agent_contract_mints_on_buy() {
    let (env, token, sale, _owner) = setup();
    let buyer = Address::generate(&env);

    sale.buy(&buyer, &250);

    assert_eq!(token.balance(&buyer), 250);
    assert_eq!(token.total_supply(), 250);
}

#[test]
fn close_finishes_minting() {
    let (env, token, sale, _owner) = setup();
    let buyer = Address::generate(&env);
    sale.buy(&buyer, &10);

    sale.close();

    assert!(token.minting_finished());
    assert!(sale.try_buy(&buyer, &10).is_err());
    assert_eq!(token.balance(&buyer), 10);
}

#[test]
fn second_close_reverts() {
    let (_env, _token, sale, _owner) = setup();
    sale.close();
    assert!(sale.try_close().is_err());
}

#[test]
fn undelegated_sale_cannot_mint() {
    let (env, token, sale, owner) = setup();
    let buyer = Address::generate(&env);

    // Owner hands the agent role to someone else.
    token.set_sale_agent(&owner, &owner);

    assert!(sale.try_buy(&buyer, &10).is_err());
    assert_eq!(token.balance(&buyer), 0);
}

#[test]
fn negative_purchase_reverts() {
    let (env, token, sale, _owner) = setup();
    let buyer = Address::generate(&env);

    assert!(sale.try_buy(&buyer, &-1).is_err());
    assert_eq!(token.total_supply(), 0);
}

#[test]
fn initialize_twice_fails() {
    let (env, _token, sale, owner) = setup();
    let other = Address::generate(&env);
    assert_eq!(sale.try_initialize(&owner, &other), Err(Ok(SaleError::AlreadyInitialized)));
}

#[test]
fn buy_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let sale = MockSaleAgentClient::new(&env, &env.register_contract(None, MockSaleAgent));
    let buyer = Address::generate(&env);

    assert_eq!(sale.try_buy(&buyer, &1), Err(Ok(SaleError::NotInitialized)));
    assert_eq!(sale.try_token(), Err(Ok(SaleError::NotInitialized)));
}
