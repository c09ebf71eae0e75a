//! **escrow-client-core** - pure building blocks for talking to a deployed
//! token escrow program.
//!
//! No I/O. Everything here turns addresses and amounts into bytes (or
//! back) and can be called from any thread.
//!
//! # Escrow record codec
//!
//! | Item | What it does |
//! |---|---|
//! | [`EscrowRecord::pack`] | encode the fixed 105-byte account layout |
//! | [`EscrowRecord::unpack`] | decode it; `MalformedAccount` on any other length |
//! | [`encode_amount_le64`] | range-check an integer and emit 8 LE bytes |
//! | [`parse_amount`] | decimal string to `u64` |
//! | [`SliceCursor`] | bounds-checked sequential field reader |
//!
//! # Instruction builders
//!
//! | Method | Data | Accounts |
//! |---|---|---|
//! | [`EscrowProgram::init_escrow`] | `[0] ++ le64(amount)` | 6 |
//! | [`EscrowProgram::take_trade`] | `[1] ++ le64(amount)` | 9, authority PDA last |
//! | [`EscrowProgram::cancel_escrow`] | `[2, bump]` | 6 |
//!
//! Addresses may be passed as [`Pubkey`] or base58 strings (see
//! [`AddressArg`]); bad strings fail with `InvalidAddress` before any
//! bytes are produced.
//!
//! # Program addresses
//!
//! | Function | What it does |
//! |---|---|
//! | [`derive_escrow_authority`] | find the `b"escrow"` authority PDA + bump |
//! | [`derive_escrow_authority_with`] | same, with an injected [`DeriveAddress`] |
//!
//! # Supporting instructions
//!
//! [`system::create_account`], [`token::initialize_account`] and
//! [`token::transfer`] cover the account setup that precedes InitEscrow;
//! [`token::unpack_token_account`] decodes the SPL Token accounts involved.
//! [`programs`] holds the well-known program and sysvar ids.

/// Return `Err($err.into())` unless `$cond` holds.
///
/// ```rust
/// # use escrow_client_core::{require, EscrowError, Result};
/// fn check(len: usize) -> Result<()> {
///     require!(len == 105, EscrowError::MalformedAccount { len, reason: "size" });
///     Ok(())
/// }
/// assert!(check(104).is_err());
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}

mod address;
mod amount;
mod cursor;
mod error;
mod instruction;
mod pda;
mod program;
pub mod programs;
mod state;
pub mod system;
pub mod token;

pub use address::{parse_address, AddressArg};
pub use amount::{checked_amount, encode_amount_le64, parse_amount};
pub use cursor::SliceCursor;
pub use error::{BoxError, EscrowError, Result};
pub use instruction::{
    CancelEscrowAccounts, EscrowInstruction, InitEscrowAccounts, TakeTradeAccounts,
    IX_CANCEL_ESCROW, IX_INIT_ESCROW, IX_TAKE_TRADE,
};
pub use pda::{
    derive_escrow_authority, derive_escrow_authority_with, Curve25519Deriver, DeriveAddress,
    ESCROW_SEED,
};
pub use program::EscrowProgram;
pub use state::{EscrowRecord, ESCROW_LEN};
pub use token::{TokenAccount, TOKEN_ACCOUNT_LEN};

pub use solana_instruction::{AccountMeta, Instruction};
pub use solana_pubkey::Pubkey;
