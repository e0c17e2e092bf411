use anchor_lang::prelude::*;

use crate::instructions::shared::deposit_stake;
use crate::{constants::HOUSE_SEED, state::*};

#[derive(Accounts)]
pub struct PlayerInit<'info> {
    #[account(mut)]
    pub player1: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED, house.authority.as_ref()],
        bump = house.bump
    )]
    pub house: Account<'info, House>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<PlayerInit>,
    parity_odd: bool,
    commitment: [u8; 32],
    stake: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let player1 = ctx.accounts.player1.key();

    ctx.accounts
        .house
        .init_game(player1, parity_odd, commitment, stake, now)?;

    deposit_stake(
        &ctx.accounts.player1,
        &ctx.accounts.house.to_account_info(),
        stake,
        &ctx.accounts.system_program,
    )?;

    let house = &ctx.accounts.house;
    emit!(GameInitialized {
        house: house.key(),
        player1,
        parity_odd,
        commitment,
        lock_time: house.game.lock_time,
        accept_deadline: house.game.accept_deadline,
    });

    Ok(())
}
