//! Escrow program instruction payloads and their account roles.
//!
//! Data layout:
//! ```text
//! InitEscrow    [0] ++ amount u64 LE    (9 bytes)
//! TakeTrade     [1] ++ amount u64 LE    (9 bytes)
//! CancelEscrow  [2, bump]               (2 bytes)
//! ```
//!
//! Account order and flags are part of the program's ABI; see the
//! builders in [`crate::program::EscrowProgram`].

use solana_pubkey::Pubkey;

use crate::cursor::SliceCursor;
use crate::error::{EscrowError, Result};

pub const IX_INIT_ESCROW: u8 = 0;
pub const IX_TAKE_TRADE: u8 = 1;
pub const IX_CANCEL_ESCROW: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscrowInstruction {
    /// Open a trade: record the terms and hand the temp token account to
    /// the escrow authority.
    InitEscrow {
        /// Y tokens the initializer expects in return.
        amount: u64,
    },
    /// Accept a trade.
    TakeTrade {
        /// X tokens the taker expects to receive; the program checks it
        /// against the temp token account balance.
        amount: u64,
    },
    /// Return the X tokens to the initializer and close the escrow.
    CancelEscrow {
        /// Bump of the escrow authority PDA.
        bump: u8,
    },
}

impl EscrowInstruction {
    pub fn tag(&self) -> u8 {
        match self {
            Self::InitEscrow { .. } => IX_INIT_ESCROW,
            Self::TakeTrade { .. } => IX_TAKE_TRADE,
            Self::CancelEscrow { .. } => IX_CANCEL_ESCROW,
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut data = vec![self.tag()];
        match *self {
            Self::InitEscrow { amount } | Self::TakeTrade { amount } => {
                data.extend_from_slice(&amount.to_le_bytes())
            }
            Self::CancelEscrow { bump } => data.push(bump),
        }
        data
    }

    /// Decode instruction data. Trailing bytes after the variant's fields
    /// are ignored, as the program does.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        let mut cur = SliceCursor::new(data);
        let tag = cur.read_u8().map_err(|_| EscrowError::InvalidInstruction)?;
        let ix = match tag {
            IX_INIT_ESCROW => Self::InitEscrow {
                amount: cur.read_u64().map_err(|_| EscrowError::InvalidInstruction)?,
            },
            IX_TAKE_TRADE => Self::TakeTrade {
                amount: cur.read_u64().map_err(|_| EscrowError::InvalidInstruction)?,
            },
            IX_CANCEL_ESCROW => Self::CancelEscrow {
                bump: cur.read_u8().map_err(|_| EscrowError::InvalidInstruction)?,
            },
            _ => return Err(EscrowError::InvalidInstruction),
        };
        Ok(ix)
    }
}

/// Caller-supplied accounts for InitEscrow. The rent sysvar and token
/// program are appended by the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitEscrowAccounts<A = Pubkey> {
    /// Signs the transaction and owns the temp token account until Init.
    pub initializer: A,
    /// Holds the offered X tokens; authority moves to the escrow PDA.
    pub temp_token_account: A,
    /// Initializer's Y token account, paid on Take.
    pub initializer_receive_account: A,
    /// Freshly created 105-byte account owned by the escrow program.
    pub escrow_account: A,
}

/// Caller-supplied accounts for TakeTrade. The token program and escrow
/// authority are appended by the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TakeTradeAccounts<A = Pubkey> {
    pub taker: A,
    /// Taker's Y token account (debited).
    pub taker_send_account: A,
    /// Taker's X token account (credited).
    pub taker_receive_account: A,
    pub temp_token_account: A,
    /// Initializer's main account; receives the rent of closed accounts.
    pub initializer: A,
    pub initializer_receive_account: A,
    pub escrow_account: A,
}

/// Caller-supplied accounts for CancelEscrow. The token program and escrow
/// authority are inserted by the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CancelEscrowAccounts<A = Pubkey> {
    pub initializer: A,
    pub temp_token_account: A,
    /// Initializer's X token account that gets the tokens back.
    pub initializer_refund_account: A,
    pub escrow_account: A,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_each_variant() {
        assert_eq!(
            EscrowInstruction::InitEscrow { amount: 10 }.pack(),
            vec![0, 10, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            EscrowInstruction::TakeTrade { amount: 258 }.pack(),
            vec![1, 2, 1, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(EscrowInstruction::CancelEscrow { bump: 254 }.pack(), vec![2, 254]);
    }

    #[test]
    fn unpacks_what_the_program_reads() {
        assert_eq!(
            EscrowInstruction::unpack(&[1, 10, 0, 0, 0, 0, 0, 0, 0]).unwrap(),
            EscrowInstruction::TakeTrade { amount: 10 }
        );
        assert_eq!(
            EscrowInstruction::unpack(&[2, 7, 99]).unwrap(),
            EscrowInstruction::CancelEscrow { bump: 7 }
        );
    }

    #[test]
    fn rejects_bad_data() {
        let cases: [&[u8]; 4] = [&[], &[3], &[0, 1, 2, 3], &[2]];
        for data in cases {
            assert!(matches!(
                EscrowInstruction::unpack(data),
                Err(EscrowError::InvalidInstruction)
            ));
        }
    }
}
