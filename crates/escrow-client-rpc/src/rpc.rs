use escrow_client_core::{parse_address, EscrowError, Result};
use log::debug;
use solana_account::Account;
use solana_commitment_config::CommitmentConfig;
use solana_hash::Hash;
use solana_pubkey::Pubkey;
use solana_rpc_client::rpc_client::RpcClient;
use solana_rpc_client_api::client_error::Error as ClientError;
use solana_rpc_client_api::request::TokenAccountsFilter;
use solana_signature::Signature;
use solana_transaction::Transaction;

use crate::config::ClientConfig;
use crate::ledger::Ledger;

/// [`Ledger`] backed by a blocking JSON-RPC client.
///
/// Every query and confirmation uses the configured commitment
/// (`confirmed` unless the config says otherwise).
pub struct RpcLedger {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcLedger {
    pub fn new(config: &ClientConfig) -> Self {
        debug!("rpc ledger at {} ({:?})", config.json_rpc_url, config.commitment.commitment);
        Self {
            client: RpcClient::new_with_commitment(config.json_rpc_url.clone(), config.commitment),
            commitment: config.commitment,
        }
    }

    /// Wrap an existing client, keeping its commitment.
    pub fn from_client(client: RpcClient) -> Self {
        let commitment = client.commitment();
        Self { client, commitment }
    }

    pub fn client(&self) -> &RpcClient {
        &self.client
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }
}

impl Ledger for RpcLedger {
    fn account(&self, address: &Pubkey) -> Result<Option<Account>> {
        let response = self
            .client
            .get_account_with_commitment(address, self.commitment)
            .map_err(map_client_error)?;
        Ok(response.value)
    }

    fn lamport_balance(&self, address: &Pubkey) -> Result<u64> {
        let response = self
            .client
            .get_balance_with_commitment(address, self.commitment)
            .map_err(map_client_error)?;
        Ok(response.value)
    }

    fn token_balance(&self, address: &Pubkey) -> Result<u64> {
        let response = self
            .client
            .get_token_account_balance_with_commitment(address, self.commitment)
            .map_err(map_client_error)?;
        response
            .value
            .amount
            .parse::<u64>()
            .map_err(|err| EscrowError::SubmissionFailed(Box::new(err)))
    }

    fn token_accounts_by_owner(&self, owner: &Pubkey, mint: &Pubkey) -> Result<Vec<Pubkey>> {
        let response = self
            .client
            .get_token_accounts_by_owner_with_commitment(
                owner,
                TokenAccountsFilter::Mint(*mint),
                self.commitment,
            )
            .map_err(map_client_error)?;
        response
            .value
            .iter()
            .map(|keyed| parse_address(&keyed.pubkey))
            .collect()
    }

    fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64> {
        self.client
            .get_minimum_balance_for_rent_exemption(data_len)
            .map_err(map_client_error)
    }

    fn latest_blockhash(&self) -> Result<Hash> {
        self.client.get_latest_blockhash().map_err(map_client_error)
    }

    fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature> {
        self.client
            .send_and_confirm_transaction(transaction)
            .map_err(map_client_error)
    }
}

/// Split RPC failures into on-chain rejections and everything else.
fn map_client_error(err: ClientError) -> EscrowError {
    match err.get_transaction_error() {
        Some(tx_err) => EscrowError::TransactionRejected(tx_err),
        None => EscrowError::SubmissionFailed(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use solana_rpc_client_api::client_error::ErrorKind;
    use solana_transaction_error::TransactionError;

    use super::*;

    #[test]
    fn rejections_keep_the_transaction_error() {
        let err = map_client_error(ClientError::from(TransactionError::AccountInUse));
        assert!(matches!(
            err,
            EscrowError::TransactionRejected(TransactionError::AccountInUse)
        ));
    }

    #[test]
    fn transport_errors_are_submission_failures() {
        let refused = ErrorKind::Custom("connection refused".into());
        let err = map_client_error(ClientError::from(refused));
        match err {
            EscrowError::SubmissionFailed(source) => {
                assert!(source.to_string().contains("connection refused"))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn uses_configured_commitment() {
        let config = ClientConfig {
            json_rpc_url: "http://127.0.0.1:1".into(),
            commitment: CommitmentConfig::finalized(),
            ..ClientConfig::default()
        };
        let ledger = RpcLedger::new(&config);
        assert_eq!(ledger.commitment(), CommitmentConfig::finalized());
        assert_eq!(ledger.client().url(), "http://127.0.0.1:1");
    }
}
