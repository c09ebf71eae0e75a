use log::debug;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::address::AddressArg;
use crate::amount::checked_amount;
use crate::error::Result;
use crate::instruction::{
    CancelEscrowAccounts, EscrowInstruction, InitEscrowAccounts, TakeTradeAccounts,
};
use crate::pda::{derive_escrow_authority_with, Curve25519Deriver, DeriveAddress};
use crate::programs;

/// A deployed escrow program: its id plus the address derivation
/// capability used to find its authority PDA.
///
/// The builders are pure. They validate every address and amount, then
/// return an [`Instruction`]; nothing is sent anywhere.
///
/// ```rust
/// use escrow_client_core::{EscrowProgram, CancelEscrowAccounts};
///
/// let program = EscrowProgram::new("5B7bxDnoCG9PvCnSHLN65KvTy1BsUX4oxDmaQpjBPSG").unwrap();
/// let (_, bump) = program.escrow_authority().unwrap();
/// let ix = program
///     .cancel_escrow(
///         &CancelEscrowAccounts {
///             initializer: "BTUDi8DcxQzXp1KQ5p95dkuBgTtqirDxySZrXbM6nHPk",
///             temp_token_account: "pLBauX3VV2QWJsnakYdAjHh193EuhZc6UMpdYT5DsCK",
///             initializer_refund_account: "Fqt59CYejnQGaCgHTP79LvKdXYf91JNXXX99vK7SkrE5",
///             escrow_account: "2CVTH6qZCuYWyCPigStv7rTPfaCW9FTmFtzTfq3u8LBU",
///         },
///         bump,
///     )
///     .unwrap();
/// assert_eq!(ix.data, vec![2, bump]);
/// ```
#[derive(Clone, Debug)]
pub struct EscrowProgram<D = Curve25519Deriver> {
    program_id: Pubkey,
    deriver: D,
}

impl EscrowProgram {
    pub fn new(program_id: impl AddressArg) -> Result<Self> {
        Self::with_deriver(program_id, Curve25519Deriver)
    }
}

impl<D: DeriveAddress> EscrowProgram<D> {
    pub fn with_deriver(program_id: impl AddressArg, deriver: D) -> Result<Self> {
        Ok(Self {
            program_id: program_id.to_pubkey()?,
            deriver,
        })
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn deriver(&self) -> &D {
        &self.deriver
    }

    /// The escrow authority PDA and its bump.
    pub fn escrow_authority(&self) -> Result<(Pubkey, u8)> {
        derive_escrow_authority_with(&self.deriver, &self.program_id)
    }

    /// Build InitEscrow.
    ///
    /// Accounts:
    ///   0. [signer]   initializer
    ///   1. [writable] temp token account
    ///   2. []         initializer receive account
    ///   3. [writable] escrow account
    ///   4. []         rent sysvar
    ///   5. []         token program
    pub fn init_escrow<A: AddressArg>(
        &self,
        accounts: &InitEscrowAccounts<A>,
        amount: impl Into<i128>,
    ) -> Result<Instruction> {
        let initializer = accounts.initializer.to_pubkey()?;
        let temp_token_account = accounts.temp_token_account.to_pubkey()?;
        let initializer_receive_account = accounts.initializer_receive_account.to_pubkey()?;
        let escrow_account = accounts.escrow_account.to_pubkey()?;
        let amount = checked_amount(amount)?;

        debug!("InitEscrow: escrow {escrow_account}, expecting {amount}");
        Ok(self.instruction(
            EscrowInstruction::InitEscrow { amount },
            vec![
                AccountMeta::new_readonly(initializer, true),
                AccountMeta::new(temp_token_account, false),
                AccountMeta::new_readonly(initializer_receive_account, false),
                AccountMeta::new(escrow_account, false),
                AccountMeta::new_readonly(programs::SYSVAR_RENT, false),
                AccountMeta::new_readonly(programs::TOKEN, false),
            ],
        ))
    }

    /// Build TakeTrade.
    ///
    /// Accounts:
    ///   0. [signer]   taker
    ///   1. [writable] taker send account (Y)
    ///   2. [writable] taker receive account (X)
    ///   3. [writable] temp token account
    ///   4. [writable] initializer main account
    ///   5. [writable] initializer receive account (Y)
    ///   6. [writable] escrow account
    ///   7. []         token program
    ///   8. []         escrow authority PDA
    pub fn take_trade<A: AddressArg>(
        &self,
        accounts: &TakeTradeAccounts<A>,
        amount: impl Into<i128>,
    ) -> Result<Instruction> {
        let taker = accounts.taker.to_pubkey()?;
        let taker_send_account = accounts.taker_send_account.to_pubkey()?;
        let taker_receive_account = accounts.taker_receive_account.to_pubkey()?;
        let temp_token_account = accounts.temp_token_account.to_pubkey()?;
        let initializer = accounts.initializer.to_pubkey()?;
        let initializer_receive_account = accounts.initializer_receive_account.to_pubkey()?;
        let escrow_account = accounts.escrow_account.to_pubkey()?;
        let amount = checked_amount(amount)?;
        let (authority, _) = self.escrow_authority()?;

        debug!("TakeTrade: escrow {escrow_account}, taker {taker} expects {amount}");
        Ok(self.instruction(
            EscrowInstruction::TakeTrade { amount },
            vec![
                AccountMeta::new_readonly(taker, true),
                AccountMeta::new(taker_send_account, false),
                AccountMeta::new(taker_receive_account, false),
                AccountMeta::new(temp_token_account, false),
                AccountMeta::new(initializer, false),
                AccountMeta::new(initializer_receive_account, false),
                AccountMeta::new(escrow_account, false),
                AccountMeta::new_readonly(programs::TOKEN, false),
                AccountMeta::new_readonly(authority, false),
            ],
        ))
    }

    /// Build CancelEscrow with an already known authority bump.
    ///
    /// Accounts:
    ///   0. [signer]   initializer
    ///   1. []         token program
    ///   2. [writable] temp token account
    ///   3. [writable] initializer refund account (X)
    ///   4. [writable] escrow account
    ///   5. []         escrow authority PDA
    pub fn cancel_escrow<A: AddressArg>(
        &self,
        accounts: &CancelEscrowAccounts<A>,
        bump: u8,
    ) -> Result<Instruction> {
        let initializer = accounts.initializer.to_pubkey()?;
        let temp_token_account = accounts.temp_token_account.to_pubkey()?;
        let initializer_refund_account = accounts.initializer_refund_account.to_pubkey()?;
        let escrow_account = accounts.escrow_account.to_pubkey()?;
        let (authority, _) = self.escrow_authority()?;

        debug!("CancelEscrow: escrow {escrow_account}, bump {bump}");
        Ok(self.instruction(
            EscrowInstruction::CancelEscrow { bump },
            vec![
                AccountMeta::new_readonly(initializer, true),
                AccountMeta::new_readonly(programs::TOKEN, false),
                AccountMeta::new(temp_token_account, false),
                AccountMeta::new(initializer_refund_account, false),
                AccountMeta::new(escrow_account, false),
                AccountMeta::new_readonly(authority, false),
            ],
        ))
    }

    fn instruction(&self, ix: EscrowInstruction, accounts: Vec<AccountMeta>) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts,
            data: ix.pack(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EscrowError;

    const PROGRAM_ID: &str = "5B7bxDnoCG9PvCnSHLN65KvTy1BsUX4oxDmaQpjBPSG";

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn program() -> EscrowProgram {
        EscrowProgram::new(PROGRAM_ID).unwrap()
    }

    fn take_accounts() -> TakeTradeAccounts {
        TakeTradeAccounts {
            taker: key(1),
            taker_send_account: key(2),
            taker_receive_account: key(3),
            temp_token_account: key(4),
            initializer: key(5),
            initializer_receive_account: key(6),
            escrow_account: key(7),
        }
    }

    #[test]
    fn init_escrow_layout() {
        let accounts = InitEscrowAccounts {
            initializer: key(1),
            temp_token_account: key(2),
            initializer_receive_account: key(3),
            escrow_account: key(4),
        };
        let ix = program().init_escrow(&accounts, 10u64).unwrap();

        assert_eq!(ix.program_id.to_string(), PROGRAM_ID);
        assert_eq!(ix.data, vec![0, 10, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new_readonly(key(1), true),
                AccountMeta::new(key(2), false),
                AccountMeta::new_readonly(key(3), false),
                AccountMeta::new(key(4), false),
                AccountMeta::new_readonly(programs::SYSVAR_RENT, false),
                AccountMeta::new_readonly(programs::TOKEN, false),
            ]
        );
        assert_eq!(
            EscrowInstruction::unpack(&ix.data).unwrap(),
            EscrowInstruction::InitEscrow { amount: 10 }
        );
    }

    #[test]
    fn take_trade_ends_with_authority() {
        let program = program();
        let ix = program.take_trade(&take_accounts(), 10u64).unwrap();
        let (authority, _) = program.escrow_authority().unwrap();

        assert_eq!(ix.data, vec![1, 10, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(ix.accounts.len(), 9);
        assert_eq!(ix.accounts[0], AccountMeta::new_readonly(key(1), true));
        assert!(ix.accounts[1..7].iter().all(|m| m.is_writable && !m.is_signer));
        assert_eq!(ix.accounts[7], AccountMeta::new_readonly(programs::TOKEN, false));
        let last = ix.accounts.last().unwrap();
        assert_eq!(last.pubkey, authority);
        assert!(!last.is_signer);
        assert!(!last.is_writable);
    }

    #[test]
    fn cancel_escrow_layout() {
        let program = program();
        let accounts = CancelEscrowAccounts {
            initializer: key(1),
            temp_token_account: key(2),
            initializer_refund_account: key(3),
            escrow_account: key(4),
        };
        let ix = program.cancel_escrow(&accounts, 7).unwrap();
        let (authority, _) = program.escrow_authority().unwrap();

        assert_eq!(ix.data, vec![2, 7]);
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new_readonly(key(1), true),
                AccountMeta::new_readonly(programs::TOKEN, false),
                AccountMeta::new(key(2), false),
                AccountMeta::new(key(3), false),
                AccountMeta::new(key(4), false),
                AccountMeta::new_readonly(authority, false),
            ]
        );
    }

    #[test]
    fn string_accounts_are_validated() {
        let accounts = InitEscrowAccounts {
            initializer: "BTUDi8DcxQzXp1KQ5p95dkuBgTtqirDxySZrXbM6nHPk",
            temp_token_account: "pLBauX3VV2QWJsnakYdAjHh193EuhZc6UMpdYT5DsCK",
            initializer_receive_account: "definitely not an address",
            escrow_account: "Fqt59CYejnQGaCgHTP79LvKdXYf91JNXXX99vK7SkrE5",
        };
        assert!(matches!(
            program().init_escrow(&accounts, 10u64),
            Err(EscrowError::InvalidAddress(s)) if s == "definitely not an address"
        ));
        assert!(matches!(
            EscrowProgram::new("nope"),
            Err(EscrowError::InvalidAddress(_))
        ));
    }

    #[test]
    fn take_and_cancel_validate_string_accounts() {
        let take = TakeTradeAccounts {
            taker: "BTUDi8DcxQzXp1KQ5p95dkuBgTtqirDxySZrXbM6nHPk",
            taker_send_account: "pLBauX3VV2QWJsnakYdAjHh193EuhZc6UMpdYT5DsCK",
            taker_receive_account: "Fqt59CYejnQGaCgHTP79LvKdXYf91JNXXX99vK7SkrE5",
            temp_token_account: "2CVTH6qZCuYWyCPigStv7rTPfaCW9FTmFtzTfq3u8LBU",
            initializer: "BTUDi8DcxQzXp1KQ5p95dkuBgTtqirDxySZrXbM6nHPk",
            initializer_receive_account: "0OIl",
            escrow_account: "2CVTH6qZCuYWyCPigStv7rTPfaCW9FTmFtzTfq3u8LBU",
        };
        assert!(matches!(
            program().take_trade(&take, 10u64),
            Err(EscrowError::InvalidAddress(s)) if s == "0OIl"
        ));

        let cancel = CancelEscrowAccounts {
            initializer: "BTUDi8DcxQzXp1KQ5p95dkuBgTtqirDxySZrXbM6nHPk",
            temp_token_account: "pLBauX3VV2QWJsnakYdAjHh193EuhZc6UMpdYT5DsCK",
            initializer_refund_account: "Fqt59CYejnQGaCgHTP79LvKdXYf91JNXXX99vK7SkrE5",
            escrow_account: "escrow",
        };
        assert!(matches!(
            program().cancel_escrow(&cancel, 255),
            Err(EscrowError::InvalidAddress(s)) if s == "escrow"
        ));
    }

    #[test]
    fn amounts_are_range_checked() {
        assert!(matches!(
            program().take_trade(&take_accounts(), 1i128 << 64),
            Err(EscrowError::AmountOutOfRange(_))
        ));
        assert!(matches!(
            program().take_trade(&take_accounts(), -1i64),
            Err(EscrowError::AmountOutOfRange(-1))
        ));
    }

    #[test]
    fn injected_deriver_supplies_the_authority() {
        struct Fixed;
        impl DeriveAddress for Fixed {
            fn find_program_address(&self, _: &[&[u8]], _: &Pubkey) -> Option<(Pubkey, u8)> {
                Some((Pubkey::new_from_array([0xaa; 32]), 200))
            }
        }

        let program = EscrowProgram::with_deriver(key(9), Fixed).unwrap();
        assert_eq!(program.escrow_authority().unwrap().1, 200);
        let ix = program.take_trade(&take_accounts(), 1u64).unwrap();
        assert_eq!(ix.accounts[8].pubkey, Pubkey::new_from_array([0xaa; 32]));
    }
}
