use soroban_sdk::{contracttype, Address, String, Symbol, Vec};

// Constants
pub const CENTS: i128 = 100; // 2 decimals
pub const BASIS_POINTS: i128 = 10_000; // 100% = 10,000 basis points
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_HOUR: u32 = 3_600;

/// Upward tiers paid by every commission cascade (A, B, C)
pub const CASCADE_DEPTH: u32 = 3;
/// Fixed bonus per tier when a referral completes a daily task
pub const TASK_TIER_BONUS: [i128; 3] = [100 * CENTS, 30 * CENTS, 10 * CENTS];
/// Share of the deposit value per tier when a referral buys a level
pub const PURCHASE_TIER_BPS: [i128; 3] = [1_500, 300, 100];

pub const DEFAULT_MIN_WITHDRAWAL: i128 = 3_000 * CENTS;
pub const DEFAULT_WINDOW_START: u32 = 9 * SECONDS_PER_HOUR;
pub const DEFAULT_WINDOW_END: u32 = 17 * SECONDS_PER_HOUR;
pub const DEFAULT_UTC_OFFSET: i32 = 3_600; // Africa/Luanda

pub const RECENT_WINNERS_LIMIT: u32 = 10;
pub const INVITE_CODE_LEN: usize = 8;

// ============================================
// ACCOUNTS & LEDGER
// ============================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Account {
    pub address: Address,
    /// Code other users register with to join this account's team
    pub invite_code: Symbol,
    /// Direct referrer (tier A above this account)
    pub referrer: Option<Address>,
    pub available_balance: i128,
    /// Commission and prize earnings, mirrored into `available_balance`
    pub subsidy_balance: i128,
    pub roulette_spins: u32,
    pub level_active: bool,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Bucket {
    Available = 0,
    Subsidy = 1,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EntrySource {
    Deposit = 0,
    Task = 1,
    Commission = 2,
    Roulette = 3,
    Refund = 4,
    Purchase = 5,
    Withdrawal = 6,
}

/// Running per-account totals of every ledger entry, used by `reconcile`
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LedgerTotals {
    pub deposits: i128,
    pub task_earnings: i128,
    pub commissions: i128,
    pub roulette_prizes: i128,
    pub refunds: i128,
    pub purchases: i128,
    pub withdrawals: i128,
    pub subsidy_credited: i128,
    pub subsidy_debited: i128,
    /// Sum of withdrawals an administrator approved (reporting only)
    pub approved_withdrawals: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BankDetails {
    pub bank_name: String,
    pub account_holder: String,
    pub iban: String,
}

// ============================================
// LEVELS
// ============================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Level {
    pub id: u32,
    pub name: String,
    /// Price paid from available balance
    pub deposit_value: i128,
    pub daily_gain: i128,
    pub monthly_gain: i128,
    pub cycle_days: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LevelSubscription {
    pub level_id: u32,
    pub activated_at: u64,
    pub active: bool,
}

// ============================================
// DEPOSITS & WITHDRAWALS
// ============================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub id: u64,
    pub account: Address,
    pub amount: i128,
    /// Reference to the uploaded proof of payment
    pub proof_ref: String,
    pub approved: bool,
    pub created_at: u64,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WithdrawalStatus {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    pub id: u64,
    pub account: Address,
    pub amount: i128,
    pub status: WithdrawalStatus,
    pub created_at: u64,
    /// Local calendar day the request was made on
    pub day: u64,
}

// ============================================
// TASKS & ROULETTE
// ============================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskRecord {
    pub account: Address,
    pub level_id: u32,
    pub earnings: i128,
    pub completed_at: u64,
    pub day: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpinRecord {
    pub id: u64,
    pub account: Address,
    pub prize: i128,
    pub approved: bool,
    pub spun_at: u64,
}

// ============================================
// CONFIGURATION
// ============================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformConfig {
    /// Seconds after local midnight the withdrawal window opens
    pub withdrawal_window_start: u32,
    /// Seconds after local midnight the window closes (inclusive)
    pub withdrawal_window_end: u32,
    pub min_withdrawal: i128,
    /// Offset of platform local time from UTC, in seconds
    pub utc_offset: i32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformSettings {
    pub support_link: String,
    pub history_text: String,
    pub deposit_instruction: String,
    pub withdrawal_instruction: String,
}

/// Bank account users pay deposits into
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformBankAccount {
    pub bank_name: String,
    pub account_holder: String,
    pub iban: String,
}

// ============================================
// RESULTS & REPORTS
// ============================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommissionPayout {
    /// 1 = direct referrer
    pub tier: u32,
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskReceipt {
    pub earnings: i128,
    pub day: u64,
    pub payouts: Vec<CommissionPayout>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchaseReceipt {
    pub level_id: u32,
    pub level_name: String,
    pub amount_paid: i128,
    pub payouts: Vec<CommissionPayout>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpinResult {
    pub prize: i128,
    pub remaining_spins: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TeamTier {
    pub members: u32,
    /// Members holding at least one active level
    pub investors: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TeamSummary {
    pub invite_code: Symbol,
    pub subsidy_balance: i128,
    /// Tier A first
    pub tiers: Vec<TeamTier>,
    pub team_count: u32,
    pub total_investors: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountSummary {
    pub available_balance: i128,
    pub subsidy_balance: i128,
    pub approved_deposit_total: i128,
    pub daily_income: i128,
    pub total_withdrawals: i128,
    /// All task earnings plus the subsidy balance
    pub total_income: i128,
    pub active_level: Option<u32>,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Initialized,
    Paused,
    Config,
    Settings,
    PlatformBanks,
    RoulettePrizes,
    Account(Address),
    Totals(Address),
    BankDetails(Address),
    InviteCode(Symbol),        // invite code -> Address
    ReferralCount(Address),    // referrer -> number of direct referrals
    Referral(Address, u32),    // (referrer, index) -> direct referral
    Level(u32),
    LevelIds,
    Subscriptions(Address),
    Deposit(u64),
    DepositCounter,
    AccountDeposits(Address),
    Withdrawal(u64),
    WithdrawalCounter,
    AccountWithdrawals(Address),
    DailyWithdrawals(Address, u64), // (account, local day) -> withdrawal ids
    Task(Address, u64),             // (account, local day) -> TaskRecord
    Spin(u64),
    SpinCounter,
    RecentSpins,
}
