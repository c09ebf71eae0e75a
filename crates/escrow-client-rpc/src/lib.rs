//! **escrow-client-rpc** - the networked half of the escrow client.
//!
//! All node access goes through the [`Ledger`] trait, passed in
//! explicitly. [`RpcLedger`] implements it over a blocking JSON-RPC client;
//! tests substitute an in-memory ledger.
//!
//! # Transactions
//!
//! | Method | Sends |
//! |---|---|
//! | [`EscrowClient::submit`] | arbitrary instructions, first signer pays |
//! | [`EscrowClient::initialize_trade`] | temp account setup + escrow account + InitEscrow |
//! | [`EscrowClient::take_trade`] | TakeTrade |
//! | [`EscrowClient::cancel_trade`] | CancelEscrow with the derived bump |
//!
//! # Reads
//!
//! | Method | Returns |
//! |---|---|
//! | [`EscrowClient::read_escrow_account`] | decoded [`EscrowRecord`](escrow_client_core::EscrowRecord) |
//! | [`EscrowClient::read_token_balance`] | raw token amount |
//! | [`EscrowClient::read_lamport_balance`] | lamports |
//! | [`EscrowClient::read_token_account_mint`] | mint of a token account |
//! | [`EscrowClient::find_token_account`] | the owner's single account for a mint |
//!
//! # Setup
//!
//! [`ClientConfig`] holds the endpoint and commitment (default
//! `http://localhost:8899`, `confirmed`) and can be read from the Solana
//! CLI `config.yml`. [`keypair_from_secret_list`] and [`read_keypair_json`]
//! turn secret key material into signers.
//!
//! ```rust,no_run
//! use escrow_client_rpc::{ClientConfig, EscrowClient, RpcLedger};
//!
//! let ledger = RpcLedger::new(&ClientConfig::default());
//! let client = EscrowClient::new(ledger, "5B7bxDnoCG9PvCnSHLN65KvTy1BsUX4oxDmaQpjBPSG")?;
//! let record = client.read_escrow_account("2CVTH6qZCuYWyCPigStv7rTPfaCW9FTmFtzTfq3u8LBU")?;
//! println!("expects {}", record.expected_amount);
//! # Ok::<(), escrow_client_core::EscrowError>(())
//! ```

mod client;
mod config;
mod keypair;
mod ledger;
mod rpc;

pub use client::{EscrowClient, InitializeTrade, InitializedTrade};
pub use config::{ClientConfig, DEFAULT_RPC_URL};
pub use keypair::{keypair_from_secret_list, read_keypair_json};
pub use ledger::Ledger;
pub use rpc::RpcLedger;

pub use solana_commitment_config::CommitmentConfig;
pub use solana_keypair::Keypair;
pub use solana_signature::Signature;
pub use solana_signer::Signer;
