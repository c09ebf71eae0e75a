use core::str::FromStr;

use solana_pubkey::Pubkey;

use crate::error::{EscrowError, Result};

/// Anything that can stand in for an address argument: a decoded
/// [`Pubkey`] or a base58 string straight from the caller.
///
/// Builders accept `impl AddressArg` so string input is validated in the
/// same call that uses it, and fails with `InvalidAddress` before any
/// bytes are produced.
pub trait AddressArg {
    fn to_pubkey(&self) -> Result<Pubkey>;
}

impl AddressArg for Pubkey {
    #[inline]
    fn to_pubkey(&self) -> Result<Pubkey> {
        Ok(*self)
    }
}

impl AddressArg for str {
    #[inline]
    fn to_pubkey(&self) -> Result<Pubkey> {
        parse_address(self)
    }
}

impl AddressArg for String {
    #[inline]
    fn to_pubkey(&self) -> Result<Pubkey> {
        parse_address(self)
    }
}

impl<T: AddressArg + ?Sized> AddressArg for &T {
    #[inline]
    fn to_pubkey(&self) -> Result<Pubkey> {
        (**self).to_pubkey()
    }
}

/// Decode a base58 address string. The input is taken verbatim; surrounding
/// whitespace makes it invalid.
pub fn parse_address(input: &str) -> Result<Pubkey> {
    Pubkey::from_str(input).map_err(|_| EscrowError::InvalidAddress(input.to_owned()))
}
