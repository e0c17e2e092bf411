use anchor_lang::prelude::*;

use crate::instructions::shared::apply_payout;
use crate::settlement::Side;
use crate::{constants::HOUSE_SEED, error::OddOrEvenError, state::*};

#[derive(Accounts)]
pub struct ResultGame<'info> {
    #[account(mut)]
    pub player1: Signer<'info>,

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

pub fn handler(ctx: Context<ResultGame>, secret: Vec<u8>, choice_p1: i8) -> Result<()> {
    if let Some(player2) = ctx.accounts.house.game.player2() {
        require_keys_eq!(
            ctx.accounts.player2_account.key(),
            player2,
            OddOrEvenError::PlayerAccountMismatch
        );
    }

    let caller = ctx.accounts.player1.key();
    let settlement = ctx.accounts.house.result_game(caller, &secret, choice_p1)?;

    let winner_account = match settlement.winner {
        Side::Player1 => ctx.accounts.player1.to_account_info(),
        Side::Player2 => ctx.accounts.player2_account.to_account_info(),
    };
    apply_payout(
        &ctx.accounts.house.to_account_info(),
        &settlement.payout,
        Some(&winner_account),
        None,
    )?;

    msg!(
        "Game settled: winner {} takes {} lamports (valid reveal: {})",
        winner_account.key(),
        settlement.payout.amount,
        settlement.valid_reveal
    );

    emit!(GameSettled {
        house: ctx.accounts.house.key(),
        winner: winner_account.key(),
        player1_won: settlement.winner == Side::Player1,
        valid_reveal: settlement.valid_reveal,
        winner_amount: settlement.payout.amount,
    });

    Ok(())
}
