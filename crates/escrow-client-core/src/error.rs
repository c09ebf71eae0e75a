use solana_program_error::ProgramError;
use solana_pubkey::Pubkey;
use solana_transaction_error::TransactionError;
use thiserror::Error;

/// Boxed error payload from an external collaborator (RPC transport, signer).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every failure the escrow client can report.
///
/// Local validation failures (`InvalidAddress`, `AmountOutOfRange`,
/// `InvalidAmount`, `InvalidKeypair`) are raised before any network call.
/// `SubmissionFailed` and `TransactionRejected` carry the external error
/// untouched so callers can decide whether to retry.
#[derive(Debug, Error)]
pub enum EscrowError {
    /// An address string is not a base58-encoded 32-byte key.
    #[error("invalid address `{0}`")]
    InvalidAddress(String),

    /// Amount is negative or larger than `u64::MAX`.
    #[error("amount {0} is outside the unsigned 64-bit range")]
    AmountOutOfRange(i128),

    /// Amount string is not a decimal integer.
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),

    /// Instruction data has an unknown tag or is too short for its variant.
    #[error("invalid escrow instruction data")]
    InvalidInstruction,

    #[error("malformed account data ({len} bytes): {reason}")]
    MalformedAccount { len: usize, reason: &'static str },

    #[error("account {0} not found")]
    AccountNotFound(Pubkey),

    /// More than one token account exists for an owner + mint pair.
    #[error("{count} token accounts owned by {owner} hold mint {mint}; expected exactly one")]
    AmbiguousTokenAccount {
        owner: Pubkey,
        mint: Pubkey,
        count: usize,
    },

    /// The address derivation capability ran out of bump seeds.
    #[error("no valid bump seed produces an off-curve program address")]
    NoValidBump,

    #[error("invalid secret key: {0}")]
    InvalidKeypair(String),

    #[error("transaction signing failed: {0}")]
    Signing(#[source] BoxError),

    /// Transport-level failure talking to the RPC node.
    #[error("rpc submission failed: {0}")]
    SubmissionFailed(#[source] BoxError),

    /// The runtime or the escrow program rejected the transaction.
    #[error("transaction rejected: {0}")]
    TransactionRejected(#[source] TransactionError),

    /// The SPL Token instruction builder refused its arguments.
    #[error("spl token instruction: {0}")]
    TokenProgram(ProgramError),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T, E = EscrowError> = core::result::Result<T, E>;
