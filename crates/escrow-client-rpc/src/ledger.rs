use escrow_client_core::Result;
use solana_account::Account;
use solana_hash::Hash;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_transaction::Transaction;

/// What the client needs from a blockchain node.
///
/// [`RpcLedger`](crate::RpcLedger) implements it over JSON-RPC; tests plug
/// in an in-memory double. Implementations report transport problems as
/// `SubmissionFailed` and on-chain rejections as `TransactionRejected`,
/// and never retry on their own.
pub trait Ledger {
    /// Fetch an account, `None` if it does not exist.
    fn account(&self, address: &Pubkey) -> Result<Option<Account>>;

    fn lamport_balance(&self, address: &Pubkey) -> Result<u64>;

    /// Raw token amount (base units) held by an SPL Token account.
    fn token_balance(&self, address: &Pubkey) -> Result<u64>;

    /// Token accounts owned by `owner` that hold `mint`.
    fn token_accounts_by_owner(&self, owner: &Pubkey, mint: &Pubkey) -> Result<Vec<Pubkey>>;

    fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64>;

    fn latest_blockhash(&self) -> Result<Hash>;

    /// Broadcast a fully signed transaction and wait for confirmation.
    fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature>;
}

impl<T: Ledger + ?Sized> Ledger for &T {
    fn account(&self, address: &Pubkey) -> Result<Option<Account>> {
        (**self).account(address)
    }

    fn lamport_balance(&self, address: &Pubkey) -> Result<u64> {
        (**self).lamport_balance(address)
    }

    fn token_balance(&self, address: &Pubkey) -> Result<u64> {
        (**self).token_balance(address)
    }

    fn token_accounts_by_owner(&self, owner: &Pubkey, mint: &Pubkey) -> Result<Vec<Pubkey>> {
        (**self).token_accounts_by_owner(owner, mint)
    }

    fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64> {
        (**self).minimum_balance_for_rent_exemption(data_len)
    }

    fn latest_blockhash(&self) -> Result<Hash> {
        (**self).latest_blockhash()
    }

    fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature> {
        (**self).send_and_confirm(transaction)
    }
}
