use std::collections::HashMap;
use std::fs;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader;
use anchor_lang::solana_program::instruction::{Instruction, InstructionError};
use litesvm::LiteSVM;
use solana_keypair::Keypair;
use solana_message::Message;
use solana_signer::Signer as _;
use solana_transaction::Transaction;
use solana_transaction_error::TransactionError;

use crate::commitment;
use crate::settlement::{Payout, Settlement};
use crate::state::{House, HouseConfig};

pub const BID: u64 = 1_000_000;
pub const TIMEOUT_SPAN: u64 = 600;
pub const COOLDOWN: u64 = 10;
pub const FEE_BPS: u16 = 100;
pub const START: i64 = 1_700_000_000;
pub const STARTING_BALANCE: u64 = 10 * BID;

pub const SECRET: &[u8] = b"abcddbe576b4818846aa77e82f4ed5fa78f92766b141f282d36703886d196df3";

pub fn default_config() -> HouseConfig {
    HouseConfig {
        bid_lamports: BID,
        timeout_span: TIMEOUT_SPAN,
        cooldown: COOLDOWN,
        fee_bps: FEE_BPS,
    }
}

/// A house plus a lamport ledger and a clock, applying engine results the
/// same way the instruction handlers do: engine call first, transfers only
/// when it succeeds.
pub struct Table {
    pub house: House,
    pub balances: HashMap<Pubkey, u64>,
    pub vault: u64,
    pub now: i64,
    pub player1: Pubkey,
    pub player2: Pubkey,
    pub outsider: Pubkey,
    pub fee_wallet: Pubkey,
}

impl Table {
    pub fn new() -> Self {
        let player1 = Pubkey::new_unique();
        let player2 = Pubkey::new_unique();
        let outsider = Pubkey::new_unique();
        let fee_wallet = Pubkey::new_unique();
        let house = House::open(Pubkey::new_unique(), fee_wallet, default_config(), 254).unwrap();

        let mut balances = HashMap::new();
        for player in [player1, player2, outsider] {
            balances.insert(player, STARTING_BALANCE);
        }
        balances.insert(fee_wallet, 0);

        Self {
            house,
            balances,
            vault: 0,
            now: START,
            player1,
            player2,
            outsider,
            fee_wallet,
        }
    }

    pub fn balance(&self, who: &Pubkey) -> u64 {
        self.balances.get(who).copied().unwrap_or_default()
    }

    /// Lamports held by everyone plus the house custody.
    pub fn total_lamports(&self) -> u64 {
        self.balances.values().sum::<u64>() + self.vault
    }

    fn deposit(&mut self, from: Pubkey, amount: u64) {
        let balance = self.balances.entry(from).or_default();
        *balance = balance.checked_sub(amount).expect("player cannot cover stake");
        self.vault += amount;
    }

    fn apply(&mut self, payout: Payout) {
        self.vault = self
            .vault
            .checked_sub(payout.amount + payout.fee)
            .expect("house paid out more than it holds");
        if let Some(recipient) = payout.recipient {
            *self.balances.entry(recipient).or_default() += payout.amount;
        }
        *self.balances.entry(self.fee_wallet).or_default() += payout.fee;
    }

    pub fn commit(&mut self, parity_odd: bool, secret: &[u8], choice: i8) -> Result<()> {
        let commitment = commitment::compute(secret, choice);
        self.init_as(self.player1, parity_odd, commitment, BID)
    }

    pub fn init_as(
        &mut self,
        caller: Pubkey,
        parity_odd: bool,
        commitment: [u8; 32],
        stake: u64,
    ) -> Result<()> {
        self.house
            .init_game(caller, parity_odd, commitment, stake, self.now)?;
        self.deposit(caller, stake);
        Ok(())
    }

    pub fn quit_as(&mut self, caller: Pubkey) -> Result<()> {
        let payout = self.house.quit_game(caller)?;
        self.apply(payout);
        Ok(())
    }

    pub fn accept(&mut self, choice: i8) -> Result<()> {
        self.accept_as(self.player2, choice, BID)
    }

    pub fn accept_as(&mut self, caller: Pubkey, choice: i8, stake: u64) -> Result<()> {
        let payout = self.house.accept_game(caller, choice, stake, self.now)?;
        self.deposit(caller, stake);
        self.apply(payout);
        Ok(())
    }

    pub fn reveal(&mut self, secret: &[u8], choice: i8) -> Result<Settlement> {
        self.reveal_as(self.player1, secret, choice)
    }

    pub fn reveal_as(&mut self, caller: Pubkey, secret: &[u8], choice: i8) -> Result<Settlement> {
        let settlement = self.house.result_game(caller, secret, choice)?;
        self.apply(settlement.payout);
        Ok(settlement)
    }

    pub fn claim(&mut self) -> Result<()> {
        let payout = self.house.claim_game(self.now)?;
        self.apply(payout);
        Ok(())
    }

    /// First moment acceptance is allowed.
    pub fn open_accept_window(&mut self) {
        self.now = self.house.game.lock_time + 1;
    }

    /// Commit, wait out the lock time and accept in one go.
    pub fn play_until_reveal(&mut self, parity_odd: bool, choice_p1: i8, choice_p2: i8) {
        self.commit(parity_odd, SECRET, choice_p1).unwrap();
        self.open_accept_window();
        self.accept(choice_p2).unwrap();
    }
}

pub fn deploy_program(litesvm: &mut LiteSVM, program_id: &Pubkey, program_path: &str) {
    let program_bytes = fs::read(program_path).expect("Failed to read program binary");
    litesvm
        .set_account(
            *program_id,
            solana_account::Account {
                lamports: litesvm.minimum_balance_for_rent_exemption(program_bytes.len()),
                data: program_bytes,
                owner: bpf_loader::ID,
                executable: true,
                rent_epoch: 0,
            },
        )
        .expect("Failed to deploy program");
}

pub fn create_wallet(litesvm: &mut LiteSVM, airdrop_amount: u64) -> Keypair {
    let wallet = Keypair::new();
    litesvm
        .airdrop(&wallet.pubkey(), airdrop_amount)
        .expect("Failed to airdrop to wallet");
    wallet
}

pub fn send_transaction_from_instructions(
    litesvm: &mut LiteSVM,
    instructions: Vec<Instruction>,
    signers: &[&Keypair],
    fee_payer: &Pubkey,
) -> std::result::Result<(), TransactionError> {
    // Identical transactions in one blockhash would be rejected as duplicates
    litesvm.expire_blockhash();
    let recent_blockhash = litesvm.latest_blockhash();
    let message = Message::new(&instructions, Some(fee_payer));
    let mut transaction = Transaction::new_unsigned(message);
    transaction.sign(signers, recent_blockhash);
    litesvm
        .send_transaction(transaction)
        .map(|_| ())
        .map_err(|failed| failed.err)
}

/// Custom program error code carried by a failed transaction, if any.
pub fn custom_error_code(error: &TransactionError) -> Option<u32> {
    match error {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(*code),
        _ => None,
    }
}

pub fn assert_program_error(
    result: std::result::Result<(), TransactionError>,
    expected: crate::error::OddOrEvenError,
    message: &str,
) {
    let error = result.expect_err(message);
    assert_eq!(custom_error_code(&error), Some(u32::from(expected)), "{}", message);
}
