use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::OddOrEvenError;
use crate::settlement::Payout;

// Move a player's stake into the house account
pub fn deposit_stake<'info>(
    player: &Signer<'info>,
    house: &AccountInfo<'info>,
    amount: u64,
    system: &Program<'info, System>,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system.to_account_info(),
            system_program::Transfer {
                from: player.to_account_info(),
                to: house.clone(),
            },
        ),
        amount,
    )
}

// A fee wallet below the rent floor would reject every fee credit
pub fn require_rent_exempt(fee_wallet: &AccountInfo) -> Result<()> {
    let minimum = Rent::get()?.minimum_balance(fee_wallet.data_len());
    require!(
        fee_wallet.lamports() >= minimum,
        OddOrEvenError::FeeWalletNotRentExempt
    );
    Ok(())
}

// Debit the program-owned house account directly; no CPI needed
pub fn release_lamports<'info>(
    house: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let house_lamports = house
        .lamports()
        .checked_sub(amount)
        .ok_or(OddOrEvenError::MathOverflow)?;
    let to_lamports = to
        .lamports()
        .checked_add(amount)
        .ok_or(OddOrEvenError::MathOverflow)?;

    **house.try_borrow_mut_lamports()? = house_lamports;
    **to.try_borrow_mut_lamports()? = to_lamports;
    Ok(())
}

// Apply a payout plan. `recipient` must be the account named by the plan.
pub fn apply_payout<'info>(
    house: &AccountInfo<'info>,
    payout: &Payout,
    recipient: Option<&AccountInfo<'info>>,
    fee_wallet: Option<&AccountInfo<'info>>,
) -> Result<()> {
    if let Some(expected) = payout.recipient {
        let recipient = recipient.ok_or(OddOrEvenError::PlayerAccountMismatch)?;
        require_keys_eq!(recipient.key(), expected, OddOrEvenError::PlayerAccountMismatch);
        release_lamports(house, recipient, payout.amount)?;
    }

    if payout.fee > 0 {
        let fee_wallet = fee_wallet.ok_or(OddOrEvenError::InvalidFeeWallet)?;
        release_lamports(house, fee_wallet, payout.fee)?;
    }
    Ok(())
}
