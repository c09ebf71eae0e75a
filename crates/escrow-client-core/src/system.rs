use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::programs;

/// System program `CreateAccount`: fund `new_account` with `lamports`,
/// allocate `space` bytes and assign it to `owner`.
///
/// Both `payer` and `new_account` must sign.
pub fn create_account(
    payer: &Pubkey,
    new_account: &Pubkey,
    lamports: u64,
    space: u64,
    owner: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: programs::SYSTEM,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*new_account, true),
        ],
        data: create_account_data(lamports, space, owner).to_vec(),
    }
}

fn create_account_data(lamports: u64, space: u64, owner: &Pubkey) -> [u8; 52] {
    let mut data = [0u8; 52];
    data[0..4].copy_from_slice(&0u32.to_le_bytes());
    data[4..12].copy_from_slice(&lamports.to_le_bytes());
    data[12..20].copy_from_slice(&space.to_le_bytes());
    data[20..52].copy_from_slice(owner.as_ref());
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_create_account() {
        let payer = Pubkey::new_from_array([1; 32]);
        let new_account = Pubkey::new_from_array([2; 32]);
        let owner = Pubkey::new_from_array([3; 32]);
        let ix = create_account(&payer, &new_account, 1_461_600, 105, &owner);

        assert_eq!(ix.program_id, programs::SYSTEM);
        assert_eq!(&ix.data[0..4], &[0, 0, 0, 0]);
        assert_eq!(&ix.data[4..12], &1_461_600u64.to_le_bytes());
        assert_eq!(&ix.data[12..20], &105u64.to_le_bytes());
        assert_eq!(&ix.data[20..], owner.as_ref());
        assert!(ix.accounts.iter().all(|m| m.is_signer && m.is_writable));
    }
}
