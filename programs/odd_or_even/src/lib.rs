//! Odd-or-even wager settled on chain.
//!
//! Player 1 commits to a hidden choice and a parity, Player 2 accepts with a
//! public choice, Player 1 reveals. Timeouts let either side recover the pot
//! when the other stalls.

use anchor_lang::prelude::*;

pub mod commitment;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod settlement;
pub mod state;
pub mod timeout;

#[cfg(test)]
mod test_helpers;

use instructions::*;
use state::{GameView, HouseConfig};

declare_id!("AHsqxFsYWrSpsmtPMo8waqPouvRmk7nRJ28DZVrVkWLk");

#[program]
pub mod odd_or_even {
    use super::*;

    pub fn open_house(ctx: Context<OpenHouse>, config: HouseConfig) -> Result<()> {
        instructions::open_house::handler(ctx, config)
    }

    pub fn update_house(ctx: Context<UpdateHouse>, config: HouseConfig) -> Result<()> {
        instructions::update_house::handler(ctx, config)
    }

    pub fn player_init(
        ctx: Context<PlayerInit>,
        parity_odd: bool,
        commitment: [u8; 32],
        stake: u64,
    ) -> Result<()> {
        instructions::player_init::handler(ctx, parity_odd, commitment, stake)
    }

    pub fn quit_game(ctx: Context<QuitGame>) -> Result<()> {
        instructions::quit_game::handler(ctx)
    }

    pub fn accept_game(ctx: Context<AcceptGame>, choice: i8, stake: u64) -> Result<()> {
        instructions::accept_game::handler(ctx, choice, stake)
    }

    pub fn result_game(ctx: Context<ResultGame>, secret: Vec<u8>, choice_p1: i8) -> Result<()> {
        instructions::result_game::handler(ctx, secret, choice_p1)
    }

    pub fn claim_game(ctx: Context<ClaimGame>) -> Result<()> {
        instructions::claim_game::handler(ctx)
    }

    pub fn game_data(ctx: Context<ViewHouse>) -> Result<GameView> {
        instructions::views::game_data(ctx)
    }

    pub fn last_game(ctx: Context<ViewHouse>) -> Result<GameView> {
        instructions::views::last_game(ctx)
    }

    pub fn balance(ctx: Context<ViewHouse>) -> Result<u64> {
        instructions::views::balance(ctx)
    }
}
