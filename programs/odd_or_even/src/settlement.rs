//! Game transitions and fund distribution.
//!
//! Every transition validates fully before touching the record, then returns
//! the lamport movements the handler has to apply out of the house account.

use anchor_lang::prelude::*;

use crate::commitment;
use crate::constants::*;
use crate::error::OddOrEvenError;
use crate::state::{Acceptance, GameRecord, House};
use crate::timeout;

/// Lamports leaving the house account in one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub recipient: Option<Pubkey>,
    pub amount: u64,
    pub fee: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub winner: Side,
    pub valid_reveal: bool,
    pub payout: Payout,
}

/// Splits `amount` into `(to_party, to_owner)`.
pub fn fee_of(amount: u64, fee_bps: u16) -> Result<(u64, u64)> {
    require!(fee_bps as u64 <= BPS_DENOMINATOR, OddOrEvenError::InvalidFeeBps);
    let to_owner = (amount as u128)
        .checked_mul(fee_bps as u128)
        .and_then(|scaled| scaled.checked_div(BPS_DENOMINATOR as u128))
        .and_then(|fee| u64::try_from(fee).ok())
        .ok_or(OddOrEvenError::MathOverflow)?;
    let to_party = amount
        .checked_sub(to_owner)
        .ok_or(OddOrEvenError::MathOverflow)?;
    Ok((to_party, to_owner))
}

/// Player 1 wins when the parity of the sum matches the declared parity.
pub fn player1_wins(parity_odd: bool, choice_p1: i8, choice_p2: i8) -> bool {
    let sum = i16::from(choice_p1) + i16::from(choice_p2);
    let is_odd = sum.rem_euclid(2) == 1;
    is_odd == parity_odd
}

impl House {
    pub fn init_game(
        &mut self,
        player1: Pubkey,
        parity_odd: bool,
        commitment: [u8; 32],
        stake: u64,
        now: i64,
    ) -> Result<()> {
        require!(self.game.is_empty(), OddOrEvenError::AlreadyInProgress);
        require!(stake == self.config.bid_lamports, OddOrEvenError::InvalidStake);
        require!(commitment != EMPTY_COMMITMENT, OddOrEvenError::EmptyCommitment);

        let timeout_span = self.config.timeout_span;
        let deadlines = timeout::schedule(now, self.config.cooldown, timeout_span)?;

        self.game = GameRecord {
            commitment,
            timeout_span,
            lock_time: deadlines.lock_time,
            accept_deadline: deadlines.accept_deadline,
            parity_odd,
            player1,
            acceptance: Acceptance::Pending,
            choice_p1: 0,
            secret_used: Vec::new(),
            pot: stake,
        };
        Ok(())
    }

    pub fn quit_game(&mut self, caller: Pubkey) -> Result<Payout> {
        require!(
            !self.game.is_empty() && caller == self.game.player1,
            OddOrEvenError::NotAuthorized
        );
        require!(!self.game.is_accepted(), OddOrEvenError::AlreadyAccepted);

        let (refund, fee) = fee_of(self.game.pot, self.config.fee_bps)?;
        let player1 = self.game.player1;
        self.game = GameRecord::default();

        Ok(Payout {
            recipient: Some(player1),
            amount: refund,
            fee,
        })
    }

    /// Records Player 2 and charges the house fee on the pooled stakes.
    pub fn accept_game(
        &mut self,
        player2: Pubkey,
        choice: i8,
        stake: u64,
        now: i64,
    ) -> Result<Payout> {
        require!(!self.game.is_empty(), OddOrEvenError::NoGameInProgress);
        require!(!self.game.is_accepted(), OddOrEvenError::AlreadyAccepted);
        require!(choice >= 0, OddOrEvenError::NegativeChoice);
        require!(stake == self.config.bid_lamports, OddOrEvenError::InvalidStake);
        timeout::check_accept_window(now, self.game.deadlines())?;

        let reveal_deadline = timeout::reveal_deadline(now, self.game.timeout_span)?;
        let pool = self
            .game
            .pot
            .checked_add(stake)
            .ok_or(OddOrEvenError::MathOverflow)?;
        let (kept, fee) = fee_of(pool, self.config.fee_bps)?;

        self.game.acceptance = Acceptance::Accepted {
            player2,
            choice,
            reveal_deadline,
        };
        self.game.pot = kept;

        Ok(Payout {
            recipient: None,
            amount: 0,
            fee,
        })
    }

    /// Verifies Player 1's reveal and pays the whole pot to the winner.
    ///
    /// A reveal that does not match the commitment, or a negative choice,
    /// hands the game to Player 2. Only matching reveals reach the archive;
    /// anything else leaves an empty archive behind.
    ///
    /// The reveal deadline only opens [`House::claim_game`]; it does not close
    /// this path. A reveal landing after the deadline still settles as long as
    /// nobody has claimed, so Player 2 has to claim promptly once it passes.
    pub fn result_game(
        &mut self,
        caller: Pubkey,
        secret: &[u8],
        choice_p1: i8,
    ) -> Result<Settlement> {
        let Acceptance::Accepted {
            player2,
            choice: choice_p2,
            ..
        } = self.game.acceptance
        else {
            return err!(OddOrEvenError::NotYetAccepted);
        };
        require_keys_eq!(caller, self.game.player1, OddOrEvenError::RevealNotAuthorized);
        require!(secret.len() <= MAX_SECRET_LEN, OddOrEvenError::SecretTooLong);

        let valid_reveal =
            choice_p1 >= 0 && commitment::verify(&self.game.commitment, secret, choice_p1);
        let winner = if valid_reveal && player1_wins(self.game.parity_odd, choice_p1, choice_p2) {
            Side::Player1
        } else {
            Side::Player2
        };
        let recipient = match winner {
            Side::Player1 => self.game.player1,
            Side::Player2 => player2,
        };

        let mut settled = std::mem::take(&mut self.game);
        let amount = settled.pot;
        self.last_game = if valid_reveal {
            settled.choice_p1 = choice_p1;
            settled.secret_used = secret.to_vec();
            settled
        } else {
            GameRecord::default()
        };

        Ok(Settlement {
            winner,
            valid_reveal,
            payout: Payout {
                recipient: Some(recipient),
                amount,
                fee: 0,
            },
        })
    }

    /// Player 1 never revealed: Player 2 takes the pot.
    pub fn claim_game(&mut self, now: i64) -> Result<Payout> {
        let Acceptance::Accepted {
            player2,
            reveal_deadline,
            ..
        } = self.game.acceptance
        else {
            return err!(OddOrEvenError::NotAccepted);
        };
        timeout::check_claimable(now, reveal_deadline)?;

        let amount = self.game.pot;
        self.game = GameRecord::default();
        self.last_game = GameRecord::default();

        Ok(Payout {
            recipient: Some(player2),
            amount,
            fee: 0,
        })
    }
}
