//! Wallet address parsing.
//!
//! An address is the base58 encoding of a 32-byte ed25519 public key. Parsing
//! up front lets a malformed address fail before any request goes out.

use std::fmt;
use std::str::FromStr;

use solana_pubkey::ParsePubkeyError;
use solana_pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAddressError {
    #[error("address is empty")]
    Empty,
    #[error("{0}")]
    Invalid(ParsePubkeyError),
}

/// A validated wallet address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalletAddress(Pubkey);

impl WalletAddress {
    /// Shortened form for tight layouts, e.g. `7xKX…gAsU`.
    pub fn abbreviated(&self) -> String {
        let full = self.to_string();
        if full.len() <= 10 {
            return full;
        }
        format!("{}…{}", &full[..4], &full[full.len() - 4..])
    }
}

impl FromStr for WalletAddress {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseAddressError::Empty);
        }
        Pubkey::from_str(s)
            .map(Self)
            .map_err(ParseAddressError::Invalid)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // system program id: 32 zero bytes.
    const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";
    const TOKEN_PROGRAM: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

    #[test]
    fn parses_valid_addresses() {
        let system: WalletAddress = SYSTEM_PROGRAM.parse().unwrap();
        assert_eq!(system.0, Pubkey::new_from_array([0u8; 32]));

        let token: WalletAddress = TOKEN_PROGRAM.parse().unwrap();
        assert_eq!(token.to_string(), TOKEN_PROGRAM);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let addr: WalletAddress = format!("  {TOKEN_PROGRAM}\n").parse().unwrap();
        assert_eq!(addr.to_string(), TOKEN_PROGRAM);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<WalletAddress>(), Err(ParseAddressError::Empty));
        assert_eq!("  ".parse::<WalletAddress>(), Err(ParseAddressError::Empty));
        // valid base58, but only 4 bytes.
        assert_eq!(
            "Addr1".parse::<WalletAddress>(),
            Err(ParseAddressError::Invalid(ParsePubkeyError::WrongSize))
        );
        // '0', 'O', 'I' and 'l' are not in the base58 alphabet.
        assert_eq!(
            "0OIl".parse::<WalletAddress>(),
            Err(ParseAddressError::Invalid(ParsePubkeyError::Invalid))
        );
    }

    #[test]
    fn abbreviates_long_addresses() {
        let token: WalletAddress = TOKEN_PROGRAM.parse().unwrap();
        assert_eq!(token.abbreviated(), "Toke…Q5DA");
    }
}
