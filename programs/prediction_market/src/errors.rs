use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    // --- LIFECYCLE ---
    #[msg("Market is not open for trading")]
    MarketNotOpen,
    #[msg("Market has not closed yet")]
    MarketNotClosed,
    #[msg("Market is already resolved")]
    AlreadyResolved,
    #[msg("Market is not resolved")]
    NotResolved,
    #[msg("Market schedule can only change before trading opens")]
    ScheduleLocked,
    #[msg("Market state is already initialized")]
    AlreadyInitialized,
    #[msg("Outcome tokens are not swappable under the current policy")]
    SwapsDisabled,

    // --- AMOUNTS ---
    #[msg("Computed output amount is zero")]
    ZeroAmount,
    #[msg("Winning side has no unclaimed supply")]
    NoSupply,
    #[msg("Position holds fewer tokens than requested")]
    InsufficientPosition,
    #[msg("Math operation overflow")]
    MathOverflow,

    // --- EXTERNAL ---
    #[msg("Token transfer was rejected")]
    ExternalTransfer,
    #[msg("Token account does not belong to the expected holder")]
    CustodyMismatch,
    #[msg("Position account does not belong to this market")]
    PositionMismatch,

    // --- ADMIN / INPUT ---
    #[msg("Unauthorized action")]
    Unauthorized,
    #[msg("Protocol is paused")]
    ProtocolPaused,
    #[msg("Trading window must be positive and must not overflow")]
    InvalidSchedule,
    #[msg("Question exceeds maximum length")]
    QuestionTooLong,
    #[msg("Pool event does not match the supplied accounts")]
    HookTargetMismatch,
}
