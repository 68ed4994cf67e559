use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-9)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // ACCOUNT ERRORS (20-29)
    // ============================================
    /// No account registered for this address
    AccountNotFound = 20,
    /// Address already has an account
    AlreadyRegistered = 21,
    /// Invite code does not belong to any account
    InvalidInviteCode = 22,
    /// Bank name, account holder or IBAN is empty
    InvalidBankDetails = 23,

    // ============================================
    // LEVEL ERRORS (30-39)
    // ============================================
    /// Level not in the catalog
    LevelNotFound = 30,
    /// Account already holds an active subscription to this level
    AlreadyOwned = 31,
    /// Account holds no active level
    NoActiveLevel = 32,
    /// No active subscription to deactivate
    SubscriptionNotFound = 33,
    /// Level definition has a non-positive value
    InvalidLevel = 34,

    // ============================================
    // TASK ERRORS (40-49)
    // ============================================
    /// Task already completed for the current local day
    AlreadyCompletedToday = 40,
    /// Task processing hit an internal fault
    TaskFailed = 41,

    // ============================================
    // AMOUNT/BALANCE ERRORS (50-59)
    // ============================================
    /// Amount must be positive
    InvalidAmount = 50,
    /// Balance too low for the requested debit
    InsufficientFunds = 51,
    /// Checked arithmetic overflowed
    ArithmeticOverflow = 52,
    /// Ledger entry source does not match the direction of the entry
    InvalidEntry = 53,

    // ============================================
    // WITHDRAWAL ERRORS (60-69)
    // ============================================
    /// A pending or approved withdrawal already exists today
    DailyLimitReached = 60,
    /// Current local time is outside the withdrawal window
    OutsideWindow = 61,
    /// Account has no bank details on file
    MissingBankDetails = 62,
    /// Amount below the configured minimum withdrawal
    BelowMinimum = 63,
    /// Withdrawal not found
    WithdrawalNotFound = 64,
    /// Invalid withdrawal status transition
    InvalidStatus = 65,

    // ============================================
    // DEPOSIT ERRORS (70-79)
    // ============================================
    /// Deposit not found
    DepositNotFound = 70,
    /// Deposit was already approved and credited
    DepositAlreadyApproved = 71,
    /// Proof of payment reference is empty
    MissingProof = 72,

    // ============================================
    // ROULETTE ERRORS (80-89)
    // ============================================
    /// Account has no spins remaining
    NoSpinsLeft = 80,
    /// Prize list is empty or contains an invalid amount
    InvalidPrizeList = 81,

    // ============================================
    // OPERATIONAL ERRORS (90-99)
    // ============================================
    /// Config values out of range
    InvalidConfig = 90,
    /// Contract is paused
    ContractPaused = 91,
}

impl Error {
    /// Validation failures reported to the account holder as-is.
    ///
    /// Anything else is an internal fault and is masked at the task boundary.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            Error::ArithmeticOverflow | Error::InvalidEntry | Error::NotInitialized | Error::TaskFailed
        )
    }
}
