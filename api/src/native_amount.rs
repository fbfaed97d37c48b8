//! Conversion between lamports and SOL.

use std::fmt;

use rust_decimal::Decimal;

/// Number of decimal places in one SOL.
pub const SOL_DECIMALS: u32 = 9;

/// Lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// A native balance as reported by the node, in lamports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct NativeAmount {
    lamports: u64,
}

impl NativeAmount {
    pub fn from_lamports(lamports: u64) -> Self {
        Self { lamports }
    }

    /// The amount in SOL. Exact: the lamport count becomes the mantissa of a
    /// decimal with scale 9, so nothing is truncated or rounded.
    pub fn to_sol(&self) -> Decimal {
        Decimal::from_i128_with_scale(self.lamports as i128, SOL_DECIMALS)
    }
}

/// Formats as SOL without trailing zeros, e.g. `2.5`.
impl fmt::Display for NativeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sol().normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn whole_and_fractional_sol() {
        let amount = NativeAmount::from_lamports(2_500_000_000);
        assert_eq!(amount.to_sol(), Decimal::from_str("2.5").unwrap());
        assert_eq!(amount.to_string(), "2.5");
    }

    #[test]
    fn single_lamport_is_not_truncated() {
        let amount = NativeAmount::from_lamports(1);
        assert_eq!(amount.to_sol(), Decimal::from_str("0.000000001").unwrap());
    }

    #[test]
    fn zero_and_max() {
        assert_eq!(NativeAmount::default().to_string(), "0");
        let max = NativeAmount::from_lamports(u64::MAX);
        assert_eq!(max.to_sol(), Decimal::from_str("18446744073.709551615").unwrap());
    }

    #[test]
    fn one_sol() {
        let amount = NativeAmount::from_lamports(LAMPORTS_PER_SOL);
        assert_eq!(amount.to_sol(), Decimal::ONE);
    }
}
