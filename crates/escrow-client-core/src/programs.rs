//! Well-known program and sysvar addresses referenced by escrow transactions.

use solana_pubkey::Pubkey;

/// The system program: creates accounts and moves lamports.
pub const SYSTEM: Pubkey = Pubkey::new_from_array([0u8; 32]);

/// SPL Token program (not Token-2022).
///
/// Owns the temporary token account and every account the trade moves
/// tokens between.
pub const TOKEN: Pubkey = spl_token_interface::ID;

/// Sysvar: Rent (lamports_per_byte_year, exemption_threshold, burn_percent).
///
/// Passed to the escrow program's Init instruction.
pub const SYSVAR_RENT: Pubkey =
    Pubkey::from_str_const("SysvarRent111111111111111111111111111111111");
