//! **escrow-client** - build, submit and inspect trades against a deployed
//! two-party SPL token escrow program.
//!
//! An initializer locks X tokens in a temp account handed to the program's
//! `b"escrow"` authority PDA and names the Y amount they want back. A taker
//! settles the trade atomically, or the initializer cancels and gets the X
//! tokens back. This crate is the client side of that exchange.
//!
//! # Quick-start
//!
//! ```rust,no_run
//! use escrow_client::prelude::*;
//!
//! let ledger = RpcLedger::new(&ClientConfig::default());
//! let client = EscrowClient::new(ledger, "5B7bxDnoCG9PvCnSHLN65KvTy1BsUX4oxDmaQpjBPSG")?;
//! let initializer = read_keypair_json("id.json")?;
//!
//! let opened = client.initialize_trade(
//!     &initializer,
//!     &InitializeTrade {
//!         initializer_send_account: "pLBauX3VV2QWJsnakYdAjHh193EuhZc6UMpdYT5DsCK",
//!         initializer_receive_account: "Fqt59CYejnQGaCgHTP79LvKdXYf91JNXXX99vK7SkrE5",
//!         send_amount: 100,
//!         expected_amount: 10,
//!     },
//! )?;
//! let record = client.read_escrow_account(opened.escrow_account)?;
//! assert_eq!(record.expected_amount, 10);
//! # Ok::<(), EscrowError>(())
//! ```
//!
//! # Crates
//!
//! | Crate | Contents | Feature |
//! |---|---|---|
//! | [`escrow_client_core`] | record codec, instruction builders, PDA derivation, errors | always |
//! | `escrow_client_rpc` | [`Ledger`] trait, JSON-RPC ledger, orchestrator, readers, config | `rpc` (default) |
//!
//! With `default-features = false` only the pure core is compiled: no
//! network stack, nothing that performs I/O.
//!
//! # Escrow record
//!
//! ```text
//! offset  size  field
//!      0     1  is_initialized (non-zero = true)
//!      1    32  initializer
//!     33    32  temp_token_account
//!     65    32  initializer_receive_account
//!     97     8  expected_amount (u64 LE)
//!            105 bytes total
//! ```
//!
//! # Errors
//!
//! Everything returns [`Result<T, EscrowError>`](Result). Bad addresses,
//! amounts and keypairs are rejected locally before any RPC call; node
//! failures arrive as `SubmissionFailed`, program rejections as
//! `TransactionRejected`.
//!
//! # Logging
//!
//! The crates log through the [`log`](https://docs.rs/log) facade and never
//! install a logger. Instruction building and PDA derivation log at
//! `debug`, confirmed signatures at `info`, failed submissions at `warn`.

pub mod prelude;

pub use escrow_client_core::*;

#[cfg(feature = "rpc")]
pub use escrow_client_rpc::{
    keypair_from_secret_list, read_keypair_json, ClientConfig, CommitmentConfig, EscrowClient,
    InitializeTrade, InitializedTrade, Keypair, Ledger, RpcLedger, Signature, Signer,
    DEFAULT_RPC_URL,
};
