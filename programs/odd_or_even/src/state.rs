use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::OddOrEvenError;
use crate::timeout::InitDeadlines;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HouseConfig {
    pub bid_lamports: u64, // stake each player pays
    pub timeout_span: u64, // seconds, accept window and reveal window
    pub cooldown: u64,     // seconds between commit and lock time
    pub fee_bps: u16,      // house fee on cancel and accept
}

impl HouseConfig {
    pub const LEN: usize = 8 + 8 + 8 + 2;

    pub fn validate(&self) -> Result<()> {
        require!(self.bid_lamports > 0, OddOrEvenError::InvalidBidAmount);
        require!(
            self.timeout_span > 0 && i64::try_from(self.timeout_span).is_ok(),
            OddOrEvenError::InvalidTimeout
        );
        require!(
            i64::try_from(self.cooldown).is_ok(),
            OddOrEvenError::InvalidTimeout
        );
        require!(self.fee_bps <= MAX_FEE_BPS, OddOrEvenError::InvalidFeeBps);
        Ok(())
    }
}

/// Whether Player 2 has joined. Replaces the `-1` choice sentinel.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Acceptance {
    #[default]
    Pending,
    Accepted {
        player2: Pubkey,
        choice: i8,
        reveal_deadline: i64,
    },
}

impl Acceptance {
    pub const LEN: usize = 1 + 32 + 1 + 8;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameRecord {
    pub commitment: [u8; 32],   // all zero when the slot is empty
    pub timeout_span: u64,
    pub lock_time: i64,         // acceptance opens strictly after this
    pub accept_deadline: i64,   // acceptance closes strictly after this
    pub parity_odd: bool,
    pub player1: Pubkey,
    pub acceptance: Acceptance,
    pub choice_p1: i8,          // set at settlement
    pub secret_used: Vec<u8>,   // set at settlement
    pub pot: u64,               // lamports custodied for this game
}

impl GameRecord {
    pub const LEN: usize = 32 + // commitment
        8 +  // timeout_span
        8 +  // lock_time
        8 +  // accept_deadline
        1 +  // parity_odd
        32 + // player1
        Acceptance::LEN +
        1 +  // choice_p1
        4 + MAX_SECRET_LEN + // secret_used
        8;   // pot

    pub fn is_empty(&self) -> bool {
        self.commitment == EMPTY_COMMITMENT
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.acceptance, Acceptance::Accepted { .. })
    }

    pub fn player2(&self) -> Option<Pubkey> {
        match self.acceptance {
            Acceptance::Accepted { player2, .. } => Some(player2),
            Acceptance::Pending => None,
        }
    }

    pub fn reveal_deadline(&self) -> Option<i64> {
        match self.acceptance {
            Acceptance::Accepted { reveal_deadline, .. } => Some(reveal_deadline),
            Acceptance::Pending => None,
        }
    }

    pub fn deadlines(&self) -> InitDeadlines {
        InitDeadlines {
            lock_time: self.lock_time,
            accept_deadline: self.accept_deadline,
        }
    }
}

#[account]
pub struct House {
    pub authority: Pubkey,   // may reconfigure between games
    pub fee_wallet: Pubkey,  // receives house fees
    pub config: HouseConfig,
    pub game: GameRecord,    // live slot
    pub last_game: GameRecord,
    pub bump: u8,
}

impl House {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // fee_wallet
        HouseConfig::LEN +
        GameRecord::LEN + // game
        GameRecord::LEN + // last_game
        1;   // bump

    pub fn open(
        authority: Pubkey,
        fee_wallet: Pubkey,
        config: HouseConfig,
        bump: u8,
    ) -> Result<Self> {
        require!(fee_wallet != Pubkey::default(), OddOrEvenError::InvalidFeeWallet);
        config.validate()?;
        Ok(Self {
            authority,
            fee_wallet,
            config,
            game: GameRecord::default(),
            last_game: GameRecord::default(),
            bump,
        })
    }

    pub fn reconfigure(&mut self, config: HouseConfig, fee_wallet: Pubkey) -> Result<()> {
        require!(self.game.is_empty(), OddOrEvenError::GameInProgress);
        require!(fee_wallet != Pubkey::default(), OddOrEvenError::InvalidFeeWallet);
        config.validate()?;
        self.config = config;
        self.fee_wallet = fee_wallet;
        Ok(())
    }
}

/// Flat read-only shape of a [`GameRecord`], with `choice_p2 == -1` until
/// Player 2 accepts.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub commitment: [u8; 32],
    pub timeout_span: u64,
    pub lock_time: i64,
    pub accept_deadline: i64,
    pub reveal_deadline: i64,
    pub parity_odd: bool,
    pub player1: Pubkey,
    pub player2: Pubkey,
    pub choice_p2: i8,
    pub choice_p1: i8,
    pub secret_used: Vec<u8>,
    pub pot: u64,
}

impl From<&GameRecord> for GameView {
    fn from(record: &GameRecord) -> Self {
        let (player2, choice_p2, reveal_deadline) = match record.acceptance {
            Acceptance::Accepted {
                player2,
                choice,
                reveal_deadline,
            } => (player2, choice, reveal_deadline),
            Acceptance::Pending => (Pubkey::default(), -1, 0),
        };
        Self {
            commitment: record.commitment,
            timeout_span: record.timeout_span,
            lock_time: record.lock_time,
            accept_deadline: record.accept_deadline,
            reveal_deadline,
            parity_odd: record.parity_odd,
            player1: record.player1,
            player2,
            choice_p2,
            choice_p1: record.choice_p1,
            secret_used: record.secret_used.clone(),
            pot: record.pot,
        }
    }
}

// Events for indexing
#[event]
pub struct HouseOpened {
    pub house: Pubkey,
    pub authority: Pubkey,
    pub fee_wallet: Pubkey,
    pub bid_lamports: u64,
    pub timeout_span: u64,
    pub cooldown: u64,
    pub fee_bps: u16,
}

#[event]
pub struct HouseUpdated {
    pub house: Pubkey,
    pub fee_wallet: Pubkey,
    pub bid_lamports: u64,
    pub timeout_span: u64,
    pub cooldown: u64,
    pub fee_bps: u16,
}

#[event]
pub struct GameInitialized {
    pub house: Pubkey,
    pub player1: Pubkey,
    pub parity_odd: bool,
    pub commitment: [u8; 32],
    pub lock_time: i64,
    pub accept_deadline: i64,
}

#[event]
pub struct GameQuit {
    pub house: Pubkey,
    pub player1: Pubkey,
    pub refund: u64,
    pub fee_amount: u64,
}

#[event]
pub struct GameAccepted {
    pub house: Pubkey,
    pub player2: Pubkey,
    pub choice: i8,
    pub reveal_deadline: i64,
    pub fee_amount: u64,
}

#[event]
pub struct GameSettled {
    pub house: Pubkey,
    pub winner: Pubkey,
    pub player1_won: bool,
    pub valid_reveal: bool,
    pub winner_amount: u64,
}

#[event]
pub struct GameClaimed {
    pub house: Pubkey,
    pub player2: Pubkey,
    pub amount: u64,
}
