use anchor_lang::prelude::*;

use crate::instructions::shared::apply_payout;
use crate::{constants::HOUSE_SEED, error::OddOrEvenError, state::*};

#[derive(Accounts)]
pub struct QuitGame<'info> {
    #[account(mut)]
    pub player1: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED, house.authority.as_ref()],
        bump = house.bump,
        has_one = fee_wallet @ OddOrEvenError::InvalidFeeWallet
    )]
    pub house: Account<'info, House>,

    /// CHECK: Fee wallet - validated against house.fee_wallet
    #[account(mut)]
    pub fee_wallet: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<QuitGame>) -> Result<()> {
    let caller = ctx.accounts.player1.key();
    let payout = ctx.accounts.house.quit_game(caller)?;

    apply_payout(
        &ctx.accounts.house.to_account_info(),
        &payout,
        Some(&ctx.accounts.player1.to_account_info()),
        Some(&ctx.accounts.fee_wallet.to_account_info()),
    )?;

    emit!(GameQuit {
        house: ctx.accounts.house.key(),
        player1: caller,
        refund: payout.amount,
        fee_amount: payout.fee,
    });

    Ok(())
}
