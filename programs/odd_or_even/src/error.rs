use anchor_lang::prelude::*;

#[error_code]
pub enum OddOrEvenError {
    #[msg("Player1 already chose")]
    AlreadyInProgress,

    #[msg("Invalid Bid")]
    InvalidStake,

    #[msg("Commitment cannot be the empty digest")]
    EmptyCommitment,

    #[msg("Only player1 can quit the game")]
    NotAuthorized,

    #[msg("Game Already Accepted")]
    AlreadyAccepted,

    #[msg("No game in progress")]
    NoGameInProgress,

    #[msg("Cannot accept negative numbers")]
    NegativeChoice,

    #[msg("TX locktime cant be lower than base locktime")]
    TooEarly,

    #[msg("Cannot accept after player 1 timeout")]
    Player1TimedOut,

    #[msg("Cant verify result before player 2 acceptance")]
    NotYetAccepted,

    #[msg("Only player1 can reveal the result")]
    RevealNotAuthorized,

    #[msg("Secret is longer than the archive can hold")]
    SecretTooLong,

    #[msg("Only accepted game can be claimed")]
    NotAccepted,

    #[msg("Bid amount must be greater than 0")]
    InvalidBidAmount,

    #[msg("Timeout span must be greater than 0 and fit a timestamp")]
    InvalidTimeout,

    #[msg("Fee basis points above the house maximum")]
    InvalidFeeBps,

    #[msg("Fee wallet cannot be zero")]
    InvalidFeeWallet,

    #[msg("Fee wallet must hold a rent-exempt balance")]
    FeeWalletNotRentExempt,

    #[msg("Only the house authority can perform this action")]
    UnauthorizedAuthority,

    #[msg("Cannot update the house while a game is in progress")]
    GameInProgress,

    #[msg("Account does not match the recorded player")]
    PlayerAccountMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
