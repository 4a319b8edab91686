use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub struct TokenEvents;

impl TokenEvents {
    /// Emits a `mint` event for newly created supply.
    ///
    /// Topics: `("mint", to)`
    /// Data:   `amount`
    pub fn mint(env: &Env, to: &Address, amount: i128) {
        env.events().publish((symbol_short!("mint"), to.clone()), amount);
    }

    /// Emits a `transfer` event. `from` is `None` when the tokens were
    /// created by a mint rather than moved from an existing holder.
    ///
    /// Topics: `("transfer", from, to)`
    /// Data:   `amount`
    pub fn transfer(env: &Env, from: Option<Address>, to: &Address, amount: i128) {
        env.events().publish((symbol_short!("transfer"), from, to.clone()), amount);
    }

    /// "mint_finished" exceeds the 9-char symbol_short! limit.
    pub fn mint_finished(env: &Env) {
        env.events().publish((Symbol::new(env, "mint_finished"),), ());
    }
}
