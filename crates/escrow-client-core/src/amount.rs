use core::num::IntErrorKind;

use crate::error::{EscrowError, Result};

/// Narrow an integer amount to `u64`.
///
/// Token supplies are `u64` on-chain, so anything negative or above
/// `u64::MAX` is `AmountOutOfRange`.
#[inline]
pub fn checked_amount(n: impl Into<i128>) -> Result<u64> {
    let n = n.into();
    u64::try_from(n).map_err(|_| EscrowError::AmountOutOfRange(n))
}

/// Encode an amount as 8 little-endian bytes, the form the escrow program
/// reads with `u64::from_le_bytes`.
///
/// ```rust
/// use escrow_client_core::encode_amount_le64;
///
/// assert_eq!(encode_amount_le64(10u64).unwrap(), [10, 0, 0, 0, 0, 0, 0, 0]);
/// assert!(encode_amount_le64(-1i64).is_err());
/// ```
#[inline]
pub fn encode_amount_le64(n: impl Into<i128>) -> Result<[u8; 8]> {
    Ok(checked_amount(n)?.to_le_bytes())
}

/// Parse a caller-supplied decimal amount.
pub fn parse_amount(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let n = trimmed.parse::<i128>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => EscrowError::AmountOutOfRange(i128::MAX),
        IntErrorKind::NegOverflow => EscrowError::AmountOutOfRange(i128::MIN),
        _ => EscrowError::InvalidAmount(input.to_owned()),
    })?;
    checked_amount(n)
}
