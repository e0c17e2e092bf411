use anchor_lang::prelude::*;

use crate::instructions::shared::apply_payout;
use crate::{constants::HOUSE_SEED, error::OddOrEvenError, state::*};

#[derive(Accounts)]
pub struct ClaimGame<'info> {
    // Anyone may push a timed-out game to Player 2
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED, house.authority.as_ref()],
        bump = house.bump
    )]
    pub house: Account<'info, House>,

    /// CHECK: Player2 account - validated against the accepted game
    #[account(mut)]
    pub player2_account: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<ClaimGame>) -> Result<()> {
    if let Some(player2) = ctx.accounts.house.game.player2() {
        require_keys_eq!(
            ctx.accounts.player2_account.key(),
            player2,
            OddOrEvenError::PlayerAccountMismatch
        );
    }

    let now = Clock::get()?.unix_timestamp;
    let payout = ctx.accounts.house.claim_game(now)?;

    apply_payout(
        &ctx.accounts.house.to_account_info(),
        &payout,
        Some(&ctx.accounts.player2_account.to_account_info()),
        None,
    )?;

    emit!(GameClaimed {
        house: ctx.accounts.house.key(),
        player2: ctx.accounts.player2_account.key(),
        amount: payout.amount,
    });

    Ok(())
}
