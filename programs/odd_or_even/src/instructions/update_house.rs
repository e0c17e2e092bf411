use anchor_lang::prelude::*;

use crate::instructions::shared::require_rent_exempt;
use crate::{constants::HOUSE_SEED, error::OddOrEvenError, state::*};

#[derive(Accounts)]
pub struct UpdateHouse<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED, house.authority.as_ref()],
        bump = house.bump,
        has_one = authority @ OddOrEvenError::UnauthorizedAuthority
    )]
    pub house: Account<'info, House>,

    /// CHECK: New fee wallet, any rent-exempt account
    pub fee_wallet: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<UpdateHouse>, config: HouseConfig) -> Result<()> {
    require_rent_exempt(&ctx.accounts.fee_wallet)?;

    let house = &mut ctx.accounts.house;

    // Deadlines and the fee of a live game depend on the config
    house.reconfigure(config, ctx.accounts.fee_wallet.key())?;

    emit!(HouseUpdated {
        house: house.key(),
        fee_wallet: house.fee_wallet,
        bid_lamports: config.bid_lamports,
        timeout_span: config.timeout_span,
        cooldown: config.cooldown,
        fee_bps: config.fee_bps,
    });

    Ok(())
}
