use anchor_lang::prelude::*;

use crate::instructions::shared::{apply_payout, deposit_stake};
use crate::{constants::HOUSE_SEED, error::OddOrEvenError, state::*};

#[derive(Accounts)]
pub struct AcceptGame<'info> {
    #[account(mut)]
    pub player2: Signer<'info>,

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

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AcceptGame>, choice: i8, stake: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let player2 = ctx.accounts.player2.key();

    let payout = ctx.accounts.house.accept_game(player2, choice, stake, now)?;

    // Stake has to land before the fee can leave the pool
    let house_info = ctx.accounts.house.to_account_info();
    deposit_stake(
        &ctx.accounts.player2,
        &house_info,
        stake,
        &ctx.accounts.system_program,
    )?;
    apply_payout(
        &house_info,
        &payout,
        None,
        Some(&ctx.accounts.fee_wallet.to_account_info()),
    )?;

    let house = &ctx.accounts.house;
    emit!(GameAccepted {
        house: house.key(),
        player2,
        choice,
        reveal_deadline: house.game.reveal_deadline().unwrap_or_default(),
        fee_amount: payout.fee,
    });

    Ok(())
}
