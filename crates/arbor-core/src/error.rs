use thiserror::Error;

/// Rule violations returned by token operations.
///
/// Every variant carries a stable numeric code (see [`TokenError::code`]) that
/// hosts surface to callers. `InsufficientAllowance` is kept distinct from
/// `Unauthorized` in Rust but shares its wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Caller lacks the role the operation requires.
    #[error("caller is not authorized")]
    Unauthorized,

    /// Spendable balance is below the requested amount.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// Staked balance is below the requested unstake amount.
    #[error("insufficient stake")]
    InsufficientStake,

    /// Mint would push total supply past the absolute ceiling.
    #[error("max supply exceeded")]
    MaxSupplyExceeded,

    /// Mutating operation attempted while the contract is paused.
    #[error("contract is paused")]
    ContractPaused,

    /// Null address supplied where a real address is required.
    #[error("invalid address")]
    InvalidAddress,

    /// Amount is zero.
    #[error("invalid amount")]
    InvalidAmount,

    /// Mint would push total supply past the current decayed cap.
    #[error("mint cap exceeded")]
    MintCapExceeded,

    /// Delegated transfer asked for more than the spender's allowance.
    #[error("insufficient allowance")]
    InsufficientAllowance,
}

impl TokenError {
    /// Numeric error code returned to the host.
    pub fn code(&self) -> u32 {
        match self {
            TokenError::Unauthorized | TokenError::InsufficientAllowance => 100,
            TokenError::InsufficientBalance => 101,
            TokenError::InsufficientStake => 102,
            TokenError::MaxSupplyExceeded => 103,
            TokenError::ContractPaused => 104,
            TokenError::InvalidAddress => 105,
            TokenError::InvalidAmount => 106,
            TokenError::MintCapExceeded => 107,
        }
    }
}

/// Infrastructure errors for the Arbor workspace (storage, config, parsing).
#[derive(Debug, Error)]
pub enum ArborError {
    /// Storage layer error (snapshot file, in-memory store).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("Config error: {0}")]
    Config(String),

    /// Address string could not be parsed.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// No token state has been deployed yet.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A token operation was rejected.
    #[error("error {code}: {0}", code = .0.code())]
    Token(#[from] TokenError),
}

impl From<serde_json::Error> for ArborError {
    fn from(e: serde_json::Error) -> Self {
        ArborError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for ArborError {
    fn from(e: std::io::Error) -> Self {
        ArborError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let expected = [
            (TokenError::Unauthorized, 100),
            (TokenError::InsufficientBalance, 101),
            (TokenError::InsufficientStake, 102),
            (TokenError::MaxSupplyExceeded, 103),
            (TokenError::ContractPaused, 104),
            (TokenError::InvalidAddress, 105),
            (TokenError::InvalidAmount, 106),
            (TokenError::MintCapExceeded, 107),
        ];
        for (err, code) in expected {
            assert_eq!(err.code(), code, "{:?}", err);
        }
    }

    #[test]
    fn test_allowance_shares_unauthorized_code() {
        assert_eq!(TokenError::InsufficientAllowance.code(), 100);
        assert_ne!(TokenError::InsufficientAllowance, TokenError::Unauthorized);
    }

    #[test]
    fn test_wrapped_token_error_display() {
        let err = ArborError::from(TokenError::ContractPaused);
        assert_eq!(err.to_string(), "error 104: contract is paused");
    }
}
