use anchor_lang::prelude::*;

use crate::error::OddOrEvenError;

/// Deadlines fixed when Player 1 commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitDeadlines {
    pub lock_time: i64,
    pub accept_deadline: i64,
}

fn seconds(span: u64) -> Result<i64> {
    i64::try_from(span).map_err(|_| error!(OddOrEvenError::MathOverflow))
}

fn after(now: i64, span: u64) -> Result<i64> {
    now.checked_add(seconds(span)?)
        .ok_or_else(|| error!(OddOrEvenError::MathOverflow))
}

pub fn schedule(now: i64, cooldown: u64, timeout_span: u64) -> Result<InitDeadlines> {
    let lock_time = after(now, cooldown)?;
    let accept_deadline = after(lock_time, timeout_span)?;
    Ok(InitDeadlines {
        lock_time,
        accept_deadline,
    })
}

/// Latest moment Player 1 may reveal, counted from acceptance.
pub fn reveal_deadline(accepted_at: i64, timeout_span: u64) -> Result<i64> {
    after(accepted_at, timeout_span)
}

/// The accept window is `(lock_time, accept_deadline]`.
pub fn check_accept_window(now: i64, deadlines: InitDeadlines) -> Result<()> {
    require!(now > deadlines.lock_time, OddOrEvenError::TooEarly);
    require!(
        now <= deadlines.accept_deadline,
        OddOrEvenError::Player1TimedOut
    );
    Ok(())
}

pub fn check_claimable(now: i64, reveal_deadline: i64) -> Result<()> {
    require!(now > reveal_deadline, OddOrEvenError::TooEarly);
    Ok(())
}
