//! The SPL Token pieces the Init flow needs: account decoding and the
//! `InitializeAccount` / `Transfer` instructions.
//!
//! Encoding and layout come from `spl-token-interface`; this module only
//! pins the program id and folds its errors into [`EscrowError`].

use solana_instruction::Instruction;
use solana_program_pack::Pack;
use solana_pubkey::Pubkey;
use spl_token_interface::instruction;
pub use spl_token_interface::state::Account as TokenAccount;

use crate::error::{EscrowError, Result};
use crate::programs;

/// Size of an SPL Token account.
pub const TOKEN_ACCOUNT_LEN: usize = TokenAccount::LEN;

/// Decode an initialized SPL Token account.
///
/// Anything that is not exactly [`TOKEN_ACCOUNT_LEN`] bytes of initialized
/// account state is `MalformedAccount`.
pub fn unpack_token_account(data: &[u8]) -> Result<TokenAccount> {
    TokenAccount::unpack(data).map_err(|_| EscrowError::MalformedAccount {
        len: data.len(),
        reason: "not an initialized SPL Token account",
    })
}

/// SPL Token `InitializeAccount`: bind `account` to `mint` with `owner`.
///
/// Accounts:
///   0. [writable] account
///   1. []         mint
///   2. []         owner
///   3. []         rent sysvar
pub fn initialize_account(account: &Pubkey, mint: &Pubkey, owner: &Pubkey) -> Result<Instruction> {
    instruction::initialize_account(&programs::TOKEN, account, mint, owner)
        .map_err(EscrowError::TokenProgram)
}

/// SPL Token `Transfer` of `amount` base units, signed by a single owner.
///
/// Accounts:
///   0. [writable] source
///   1. [writable] destination
///   2. [signer]   owner of source
pub fn transfer(
    source: &Pubkey,
    destination: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Result<Instruction> {
    instruction::transfer(&programs::TOKEN, source, destination, owner, &[], amount)
        .map_err(EscrowError::TokenProgram)
}

#[cfg(test)]
mod tests {
    use solana_instruction::AccountMeta;
    use spl_token_interface::state::AccountState;

    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn packed(account: TokenAccount) -> Vec<u8> {
        let mut data = vec![0u8; TOKEN_ACCOUNT_LEN];
        TokenAccount::pack(account, &mut data).unwrap();
        data
    }

    #[test]
    fn unpacks_initialized_account() {
        let data = packed(TokenAccount {
            mint: key(4),
            owner: key(5),
            amount: 1_000,
            state: AccountState::Initialized,
            ..TokenAccount::default()
        });
        let account = unpack_token_account(&data).unwrap();
        assert_eq!(account.mint, key(4));
        assert_eq!(account.owner, key(5));
        assert_eq!(account.amount, 1_000);
    }

    #[test]
    fn wrong_size_is_malformed() {
        assert_eq!(TOKEN_ACCOUNT_LEN, 165);
        assert!(matches!(
            unpack_token_account(&[0u8; 164]),
            Err(EscrowError::MalformedAccount { len: 164, .. })
        ));
    }

    #[test]
    fn uninitialized_account_is_malformed() {
        assert!(matches!(
            unpack_token_account(&[0u8; 165]),
            Err(EscrowError::MalformedAccount { len: 165, .. })
        ));
    }

    #[test]
    fn transfer_layout() {
        let ix = transfer(&key(1), &key(2), &key(3), 10).unwrap();
        assert_eq!(ix.program_id, programs::TOKEN);
        assert_eq!(ix.data, vec![3, 10, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new(key(1), false),
                AccountMeta::new(key(2), false),
                AccountMeta::new_readonly(key(3), true),
            ]
        );
    }

    #[test]
    fn initialize_account_layout() {
        let ix = initialize_account(&key(1), &key(2), &key(3)).unwrap();
        assert_eq!(ix.program_id, programs::TOKEN);
        assert_eq!(ix.data, vec![1]);
        assert_eq!(ix.accounts.len(), 4);
        assert!(ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, key(2));
        assert_eq!(ix.accounts[2].pubkey, key(3));
        assert_eq!(ix.accounts[3].pubkey, programs::SYSVAR_RENT);
    }
}
