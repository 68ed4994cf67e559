use crate::types::{Bucket, EntrySource, PlatformConfig, PlatformSettings, WithdrawalStatus};
use soroban_sdk::{contracttype, Address, String, Symbol, Vec};

#[contracttype]
#[derive(Clone, Debug)]
pub struct RegisteredEvent {
    pub account: Address,
    pub invite_code: Symbol,
    pub referrer: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct LedgerEntryEvent {
    pub account: Address,
    pub bucket: Bucket,
    pub source: EntrySource,
    /// Positive for credits, negative for debits
    pub delta: i128,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct DepositRequestedEvent {
    pub deposit_id: u64,
    pub account: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct DepositApprovedEvent {
    pub deposit_id: u64,
    pub account: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct LevelPurchasedEvent {
    pub account: Address,
    pub level_id: u32,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct CommissionPaidEvent {
    pub origin: Address,
    pub beneficiary: Address,
    pub tier: u32,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TaskCompletedEvent {
    pub account: Address,
    pub level_id: u32,
    pub earnings: i128,
    pub day: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct WithdrawalRequestedEvent {
    pub withdrawal_id: u64,
    pub account: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct WithdrawalStatusEvent {
    pub withdrawal_id: u64,
    pub account: Address,
    pub status: WithdrawalStatus,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SpinEvent {
    pub spin_id: u64,
    pub account: Address,
    pub prize: i128,
    pub remaining_spins: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SpinsGrantedEvent {
    pub account: Address,
    pub granted: u32,
    pub total: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SubscriptionDeactivatedEvent {
    pub account: Address,
    pub level_id: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BankDetailsUpdatedEvent {
    pub account: Address,
}

// Admin events

#[contracttype]
#[derive(Clone, Debug)]
pub struct PauseChangedEvent {
    pub admin: Address,
    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ConfigUpdatedEvent {
    pub admin: Address,
    pub config: PlatformConfig,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SettingsUpdatedEvent {
    pub admin: Address,
    pub settings: PlatformSettings,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PlatformBankAddedEvent {
    pub admin: Address,
    pub bank_name: String,
    pub count: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PrizesUpdatedEvent {
    pub prizes: Vec<i128>,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct LevelUpsertedEvent {
    pub level_id: u32,
    pub deposit_value: i128,
    pub daily_gain: i128,
}
