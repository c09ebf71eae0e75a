//! Escrow account record.
//!
//! Layout (105 bytes, fixed):
//! ```text
//!   0..1    bool    is_initialized               (non-zero = true)
//!   1..33   Pubkey  initializer                  (who opened the trade)
//!  33..65   Pubkey  temp_token_account           (X tokens held for the taker)
//!  65..97   Pubkey  initializer_receive_account  (where the taker's Y tokens go)
//!  97..105  u64 LE  expected_amount              (Y tokens the initializer wants)
//! ```

use solana_pubkey::Pubkey;

use crate::cursor::SliceCursor;
use crate::error::{EscrowError, Result};

const BOOL_LEN: usize = 1;
const PUBKEY_LEN: usize = 32;
const U64_LEN: usize = 8;

pub const IS_INITIALIZED_OFFSET: usize = 0;
pub const INITIALIZER_OFFSET: usize = IS_INITIALIZED_OFFSET + BOOL_LEN;
pub const TEMP_TOKEN_ACCOUNT_OFFSET: usize = INITIALIZER_OFFSET + PUBKEY_LEN;
pub const RECEIVE_ACCOUNT_OFFSET: usize = TEMP_TOKEN_ACCOUNT_OFFSET + PUBKEY_LEN;
pub const EXPECTED_AMOUNT_OFFSET: usize = RECEIVE_ACCOUNT_OFFSET + PUBKEY_LEN;

/// Total size of an escrow account.
pub const ESCROW_LEN: usize = EXPECTED_AMOUNT_OFFSET + U64_LEN;

const _: () = assert!(ESCROW_LEN == 105);

/// Decoded state of an escrow account.
///
/// Created by the escrow program on Init and closed by it on Take or
/// Cancel. The client only ever reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EscrowRecord {
    pub is_initialized: bool,
    pub initializer: Pubkey,
    pub temp_token_account: Pubkey,
    pub initializer_receive_account: Pubkey,
    pub expected_amount: u64,
}

impl EscrowRecord {
    pub const LEN: usize = ESCROW_LEN;

    /// Decode raw account data.
    ///
    /// The length must be exactly [`ESCROW_LEN`]. Nothing else is checked
    /// here: any non-zero flag byte reads as initialized, and whether the
    /// addresses and amount make sense is the program's business.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        require!(
            data.len() == ESCROW_LEN,
            EscrowError::MalformedAccount {
                len: data.len(),
                reason: "escrow account must be exactly 105 bytes",
            }
        );
        let mut cur = SliceCursor::new(data);
        Ok(Self {
            is_initialized: cur.read_bool()?,
            initializer: cur.read_pubkey()?,
            temp_token_account: cur.read_pubkey()?,
            initializer_receive_account: cur.read_pubkey()?,
            expected_amount: cur.read_u64()?,
        })
    }

    /// Encode into the fixed 105-byte layout.
    pub fn pack(&self) -> [u8; ESCROW_LEN] {
        let mut dst = [0u8; ESCROW_LEN];
        dst[IS_INITIALIZED_OFFSET] = self.is_initialized as u8;
        dst[INITIALIZER_OFFSET..TEMP_TOKEN_ACCOUNT_OFFSET]
            .copy_from_slice(self.initializer.as_ref());
        dst[TEMP_TOKEN_ACCOUNT_OFFSET..RECEIVE_ACCOUNT_OFFSET]
            .copy_from_slice(self.temp_token_account.as_ref());
        dst[RECEIVE_ACCOUNT_OFFSET..EXPECTED_AMOUNT_OFFSET]
            .copy_from_slice(self.initializer_receive_account.as_ref());
        dst[EXPECTED_AMOUNT_OFFSET..].copy_from_slice(&self.expected_amount.to_le_bytes());
        dst
    }
}
