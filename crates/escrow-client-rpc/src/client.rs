use escrow_client_core::{
    programs, system, token, AddressArg, CancelEscrowAccounts, Curve25519Deriver, DeriveAddress,
    EscrowError, EscrowProgram, EscrowRecord, InitEscrowAccounts, Instruction, Result,
    TakeTradeAccounts, ESCROW_LEN, TOKEN_ACCOUNT_LEN,
};
use log::{debug, info, warn};
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::Signer;
use solana_transaction::Transaction;

use crate::ledger::Ledger;

/// Terms of a new trade, from the initializer's side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializeTrade<A = Pubkey> {
    /// Initializer's X token account; `send_amount` leaves it.
    pub initializer_send_account: A,
    /// Initializer's Y token account; paid on Take.
    pub initializer_receive_account: A,
    /// X tokens moved into the temp account.
    pub send_amount: u64,
    /// Y tokens the initializer wants back.
    pub expected_amount: u64,
}

/// Accounts created by [`EscrowClient::initialize_trade`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializedTrade {
    pub escrow_account: Pubkey,
    pub temp_token_account: Pubkey,
    pub signature: Signature,
}

/// Transaction orchestrator and account reader for one escrow program.
///
/// Holds a [`Ledger`] by value; pass `&ledger` to share one between
/// clients. Every method takes `&self`.
pub struct EscrowClient<L, D = Curve25519Deriver> {
    ledger: L,
    program: EscrowProgram<D>,
}

impl<L: Ledger> EscrowClient<L> {
    pub fn new(ledger: L, program_id: impl AddressArg) -> Result<Self> {
        Ok(Self::with_program(ledger, EscrowProgram::new(program_id)?))
    }
}

impl<L: Ledger, D: DeriveAddress> EscrowClient<L, D> {
    pub fn with_program(ledger: L, program: EscrowProgram<D>) -> Self {
        Self { ledger, program }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn program(&self) -> &EscrowProgram<D> {
        &self.program
    }

    // -- orchestration ---------------------------------------------------

    /// Send `instructions` as one transaction, in order.
    ///
    /// The first signer pays the fee. Signing failures (missing or
    /// mismatched signers) surface as `Signing`; the ledger decides between
    /// `SubmissionFailed` and `TransactionRejected`. Nothing is retried.
    pub fn submit(
        &self,
        instructions: &[Instruction],
        signers: &[&dyn Signer],
    ) -> Result<Signature> {
        let payer = signers
            .first()
            .ok_or_else(|| EscrowError::Signing("transaction needs at least one signer".into()))?
            .pubkey();

        let mut transaction = Transaction::new_with_payer(instructions, Some(&payer));
        let blockhash = self.ledger.latest_blockhash()?;
        transaction
            .try_sign(signers, blockhash)
            .map_err(|err| EscrowError::Signing(Box::new(err)))?;

        debug!(
            "submitting {} instruction(s), {} signer(s), payer {payer}",
            instructions.len(),
            signers.len()
        );
        match self.ledger.send_and_confirm(&transaction) {
            Ok(signature) => {
                info!("confirmed {signature}");
                Ok(signature)
            }
            Err(err) => {
                warn!("transaction from {payer} failed: {err}");
                Err(err)
            }
        }
    }

    /// Open a trade in a single transaction:
    ///
    /// 1. create a temp token account for the send account's mint
    /// 2. move `send_amount` X tokens into it
    /// 3. create the rent-exempt escrow account, owned by the program
    /// 4. InitEscrow
    ///
    /// Signed by the initializer (fee payer) and the two fresh accounts.
    pub fn initialize_trade<A: AddressArg>(
        &self,
        initializer: &dyn Signer,
        trade: &InitializeTrade<A>,
    ) -> Result<InitializedTrade> {
        let send_account = trade.initializer_send_account.to_pubkey()?;
        let receive_account = trade.initializer_receive_account.to_pubkey()?;
        let owner = initializer.pubkey();

        let mint = self.read_token_account_mint(send_account)?;
        let temp = Keypair::new();
        let escrow = Keypair::new();
        let temp_rent = self.ledger.minimum_balance_for_rent_exemption(TOKEN_ACCOUNT_LEN)?;
        let escrow_rent = self.ledger.minimum_balance_for_rent_exemption(ESCROW_LEN)?;

        let instructions = [
            system::create_account(
                &owner,
                &temp.pubkey(),
                temp_rent,
                TOKEN_ACCOUNT_LEN as u64,
                &programs::TOKEN,
            ),
            token::initialize_account(&temp.pubkey(), &mint, &owner)?,
            token::transfer(&send_account, &temp.pubkey(), &owner, trade.send_amount)?,
            system::create_account(
                &owner,
                &escrow.pubkey(),
                escrow_rent,
                ESCROW_LEN as u64,
                self.program.program_id(),
            ),
            self.program.init_escrow(
                &InitEscrowAccounts {
                    initializer: owner,
                    temp_token_account: temp.pubkey(),
                    initializer_receive_account: receive_account,
                    escrow_account: escrow.pubkey(),
                },
                trade.expected_amount,
            )?,
        ];

        let signers: [&dyn Signer; 3] = [initializer, &temp, &escrow];
        let signature = self.submit(&instructions, &signers)?;
        info!(
            "escrow {} opened: {} of mint {mint} for {}",
            escrow.pubkey(),
            trade.send_amount,
            trade.expected_amount
        );
        Ok(InitializedTrade {
            escrow_account: escrow.pubkey(),
            temp_token_account: temp.pubkey(),
            signature,
        })
    }

    /// Accept a trade. `expected_amount` is the X amount the taker expects
    /// to receive.
    pub fn take_trade<A: AddressArg>(
        &self,
        taker: &dyn Signer,
        accounts: &TakeTradeAccounts<A>,
        expected_amount: impl Into<i128>,
    ) -> Result<Signature> {
        let ix = self.program.take_trade(accounts, expected_amount)?;
        self.submit(&[ix], &[taker])
    }

    /// Cancel a trade, deriving the authority bump first.
    pub fn cancel_trade<A: AddressArg>(
        &self,
        initializer: &dyn Signer,
        accounts: &CancelEscrowAccounts<A>,
    ) -> Result<Signature> {
        let (_, bump) = self.program.escrow_authority()?;
        let ix = self.program.cancel_escrow(accounts, bump)?;
        self.submit(&[ix], &[initializer])
    }

    // -- reads -----------------------------------------------------------

    pub fn read_escrow_account(&self, address: impl AddressArg) -> Result<EscrowRecord> {
        let address = address.to_pubkey()?;
        let account = self
            .ledger
            .account(&address)?
            .ok_or(EscrowError::AccountNotFound(address))?;
        EscrowRecord::unpack(&account.data)
    }

    pub fn read_token_balance(&self, address: impl AddressArg) -> Result<u64> {
        self.ledger.token_balance(&address.to_pubkey()?)
    }

    pub fn read_lamport_balance(&self, address: impl AddressArg) -> Result<u64> {
        self.ledger.lamport_balance(&address.to_pubkey()?)
    }

    /// Mint of an SPL Token account, decoded from its raw data.
    ///
    /// `MalformedAccount` if the data is not an initialized token account.
    pub fn read_token_account_mint(&self, address: impl AddressArg) -> Result<Pubkey> {
        let address = address.to_pubkey()?;
        let account = self
            .ledger
            .account(&address)?
            .ok_or(EscrowError::AccountNotFound(address))?;
        Ok(token::unpack_token_account(&account.data)?.mint)
    }

    /// The owner's only token account for `mint`.
    ///
    /// Fails with `AccountNotFound(owner)` when there is none and
    /// `AmbiguousTokenAccount` when there is more than one.
    pub fn find_token_account(
        &self,
        owner: impl AddressArg,
        mint: impl AddressArg,
    ) -> Result<Pubkey> {
        let owner = owner.to_pubkey()?;
        let mint = mint.to_pubkey()?;
        let found = self.ledger.token_accounts_by_owner(&owner, &mint)?;
        match found.as_slice() {
            [] => Err(EscrowError::AccountNotFound(owner)),
            [only] => Ok(*only),
            _ => Err(EscrowError::AmbiguousTokenAccount {
                owner,
                mint,
                count: found.len(),
            }),
        }
    }
}
