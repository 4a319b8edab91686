use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    Unauthorized = 402,
    MintingClosed = 403,
    AlreadyFinished = 404,
    NegativeAmount = 405,
    InsufficientBalance = 406,
    Overflow = 407,
    InvalidDecimal = 408,
}
