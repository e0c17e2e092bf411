use anchor_lang::prelude::*;

use crate::instructions::shared::require_rent_exempt;
use crate::{constants::HOUSE_SEED, state::*};

#[derive(Accounts)]
pub struct OpenHouse<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = House::LEN,
        seeds = [HOUSE_SEED, authority.key().as_ref()],
        bump
    )]
    pub house: Account<'info, House>,

    /// CHECK: Fee wallet can be any rent-exempt account
    pub fee_wallet: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<OpenHouse>, config: HouseConfig) -> Result<()> {
    require_rent_exempt(&ctx.accounts.fee_wallet)?;

    let house = House::open(
        ctx.accounts.authority.key(),
        ctx.accounts.fee_wallet.key(),
        config,
        ctx.bumps.house,
    )?;
    ctx.accounts.house.set_inner(house);

    emit!(HouseOpened {
        house: ctx.accounts.house.key(),
        authority: ctx.accounts.authority.key(),
        fee_wallet: ctx.accounts.fee_wallet.key(),
        bid_lamports: config.bid_lamports,
        timeout_span: config.timeout_span,
        cooldown: config.cooldown,
        fee_bps: config.fee_bps,
    });

    Ok(())
}
