//! Convenience re-exports for the common client usage pattern.
//!
//! ```rust
//! use escrow_client::prelude::*;
//! ```

// ── Codec ────────────────────────────────────────────────────────────────────
pub use escrow_client_core::{encode_amount_le64, parse_amount, EscrowRecord, ESCROW_LEN};

// ── Instruction builders ─────────────────────────────────────────────────────
pub use escrow_client_core::{
    CancelEscrowAccounts, EscrowInstruction, EscrowProgram, InitEscrowAccounts,
    TakeTradeAccounts,
};

// ── Program addresses ────────────────────────────────────────────────────────
pub use escrow_client_core::{derive_escrow_authority, programs, DeriveAddress};

// ── Errors ───────────────────────────────────────────────────────────────────
pub use escrow_client_core::{require, EscrowError, Result};

// ── Solana types ─────────────────────────────────────────────────────────────
pub use escrow_client_core::{AccountMeta, AddressArg, Instruction, Pubkey};

// ── Client (feature `rpc`) ───────────────────────────────────────────────────
#[cfg(feature = "rpc")]
pub use escrow_client_rpc::{
    keypair_from_secret_list, read_keypair_json, ClientConfig, EscrowClient, InitializeTrade,
    Keypair, Ledger, RpcLedger, Signer,
};
