use anchor_lang::prelude::*;

use crate::{constants::HOUSE_SEED, state::*};

#[derive(Accounts)]
pub struct ViewHouse<'info> {
    #[account(
        seeds = [HOUSE_SEED, house.authority.as_ref()],
        bump = house.bump
    )]
    pub house: Account<'info, House>,
}

pub fn game_data(ctx: Context<ViewHouse>) -> Result<GameView> {
    Ok(GameView::from(&ctx.accounts.house.game))
}

pub fn last_game(ctx: Context<ViewHouse>) -> Result<GameView> {
    Ok(GameView::from(&ctx.accounts.house.last_game))
}

/// Lamports custodied for the live game, excluding the account's rent reserve.
pub fn balance(ctx: Context<ViewHouse>) -> Result<u64> {
    Ok(ctx.accounts.house.game.pot)
}
