use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const BALANCE_LIFETIME_THRESHOLD: u32 = 17280;
const BALANCE_BUMP_AMOUNT: u32 = 518400;

/// Minting authority state. Lives in instance storage so it shares the
/// contract's lifetime.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorityState {
    pub owner: Address,
    pub sale_agent: Option<Address>,
    pub minting_finished: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Authority,
    TotalSupply,
    Balance(Address),
}

pub fn has_authority(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Authority)
}

pub fn get_authority(env: &Env) -> Option<AuthorityState> {
    env.storage().instance().get(&DataKey::Authority)
}

pub fn set_authority(env: &Env, state: &AuthorityState) {
    env.storage().instance().set(&DataKey::Authority, state);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
