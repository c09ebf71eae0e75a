//! Program-derived address resolution.
//!
//! The curve arithmetic behind program addresses belongs to the Solana
//! SDK, so it sits behind the [`DeriveAddress`] capability. The default
//! [`Curve25519Deriver`] forwards to `Pubkey::try_find_program_address`;
//! tests and alternative runtimes can inject their own.
//!
//! [`derive_escrow_authority`] finds the escrow program's authority PDA
//! (seed `b"escrow"`), which owns every temporary token account.

use log::debug;
use solana_pubkey::Pubkey;

use crate::error::{EscrowError, Result};

/// Seed the escrow program uses for its single authority PDA.
pub const ESCROW_SEED: &[u8] = b"escrow";

/// Capability that finds the canonical `(address, bump)` for a seed set.
///
/// Implementations must be deterministic: the same seeds and program id
/// always yield the same pair. `None` means no bump in `0..=255` produced
/// an off-curve address.
pub trait DeriveAddress {
    fn find_program_address(&self, seeds: &[&[u8]], program_id: &Pubkey) -> Option<(Pubkey, u8)>;
}

impl<T: DeriveAddress + ?Sized> DeriveAddress for &T {
    #[inline]
    fn find_program_address(&self, seeds: &[&[u8]], program_id: &Pubkey) -> Option<(Pubkey, u8)> {
        (**self).find_program_address(seeds, program_id)
    }
}

/// Default derivation using the SDK's bump search.
#[derive(Clone, Copy, Debug, Default)]
pub struct Curve25519Deriver;

impl DeriveAddress for Curve25519Deriver {
    #[inline]
    fn find_program_address(&self, seeds: &[&[u8]], program_id: &Pubkey) -> Option<(Pubkey, u8)> {
        Pubkey::try_find_program_address(seeds, program_id)
    }
}

/// Derive the escrow authority PDA and its bump with the given capability.
pub fn derive_escrow_authority_with<D: DeriveAddress + ?Sized>(
    deriver: &D,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8)> {
    let (authority, bump) = deriver
        .find_program_address(&[ESCROW_SEED], program_id)
        .ok_or(EscrowError::NoValidBump)?;
    debug!("escrow authority for {program_id}: {authority} (bump {bump})");
    Ok((authority, bump))
}

/// Derive the escrow authority PDA and its bump.
///
/// ```rust
/// use escrow_client_core::{derive_escrow_authority, programs};
///
/// let (authority, bump) = derive_escrow_authority(&programs::TOKEN).unwrap();
/// assert_eq!(derive_escrow_authority(&programs::TOKEN).unwrap(), (authority, bump));
/// ```
#[inline]
pub fn derive_escrow_authority(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_escrow_authority_with(&Curve25519Deriver, program_id)
}
