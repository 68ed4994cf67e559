#![no_std]

mod accounts;
mod admin;
mod cascade;
mod config;
mod deposits;
mod error;
mod events;
mod ledger;
mod levels;
mod referral;
mod roulette;
mod storage;
mod tasks;
mod types;
mod validation;
mod withdrawals;


pub use error::Error;
pub use types::*;

use accounts::Accounts;
use admin::Admin;
use config::Config;
use deposits::Deposits;
use ledger::Ledger;
use levels::Levels;
use referral::ReferralGraph;
use roulette::Roulette;
use storage::Storage;
use tasks::Tasks;
use withdrawals::Withdrawals;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

#[contract]
pub struct RewardsLedger;

#[contractimpl]
impl RewardsLedger {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the platform
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        Admin::initialize(&env, &admin)
    }

    /// Pause user operations (emergency)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn pause(env: Env) -> Result<(), Error> {
        Admin::set_paused(&env, true)
    }

    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn unpause(env: Env) -> Result<(), Error> {
        Admin::set_paused(&env, false)
    }

    /// Replace the withdrawal policy and local time offset
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidConfig`: Window inverted or out of day range, minimum not positive,
    ///   offset outside -12:00..=+14:00
    pub fn set_config(env: Env, config: PlatformConfig) -> Result<(), Error> {
        Admin::set_config(&env, &config)
    }

    /// Replace support link and instruction texts
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn set_settings(env: Env, settings: PlatformSettings) -> Result<(), Error> {
        Admin::set_settings(&env, &settings)
    }

    /// Add a bank account users can pay deposits into, returns the new count
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn add_platform_bank_account(
        env: Env,
        bank_name: String,
        account_holder: String,
        iban: String,
    ) -> Result<u32, Error> {
        Admin::add_bank_account(
            &env,
            PlatformBankAccount {
                bank_name,
                account_holder,
                iban,
            },
        )
    }

    /// Create or edit a level in the catalog
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidLevel`: Price, daily gain or cycle not positive, or monthly gain negative
    pub fn upsert_level(
        env: Env,
        level_id: u32,
        name: String,
        deposit_value: i128,
        daily_gain: i128,
        monthly_gain: i128,
        cycle_days: u32,
    ) -> Result<(), Error> {
        Admin::authorize(&env)?;
        Levels::upsert(
            &env,
            &Level {
                id: level_id,
                name,
                deposit_value,
                daily_gain,
                monthly_gain,
                cycle_days,
            },
        )
    }

    /// # Errors
    /// - `AccountNotFound`: Account not registered
    /// - `SubscriptionNotFound`: No active subscription to this level
    pub fn deactivate_subscription(env: Env, account: Address, level_id: u32) -> Result<(), Error> {
        Admin::authorize(&env)?;
        Levels::deactivate(&env, &account, level_id)
    }

    /// Approve a deposit and credit the account
    ///
    /// # Errors
    /// - `DepositNotFound`: Unknown deposit id
    /// - `DepositAlreadyApproved`: Deposit was already credited
    pub fn approve_deposit(env: Env, deposit_id: u64) -> Result<(), Error> {
        Admin::authorize(&env)?;
        Deposits::approve(&env, deposit_id)
    }

    /// Approve or reject a pending withdrawal; rejection refunds the amount
    ///
    /// # Errors
    /// - `WithdrawalNotFound`: Unknown withdrawal id
    /// - `InvalidStatus`: Withdrawal not pending, or target status is Pending
    pub fn set_withdrawal_status(
        env: Env,
        withdrawal_id: u64,
        status: WithdrawalStatus,
    ) -> Result<(), Error> {
        Admin::authorize(&env)?;
        Withdrawals::set_status(&env, withdrawal_id, status)
    }

    /// Returns the account's new spin count
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Count is zero
    /// - `AccountNotFound`: Account not registered
    /// - `ArithmeticOverflow`: Spin count would overflow
    pub fn grant_spins(env: Env, account: Address, count: u32) -> Result<u32, Error> {
        Admin::authorize(&env)?;
        Roulette::grant_spins(&env, &account, count)
    }

    /// Replace the prize pool from a comma separated list such as `"0, 500, 1000"`
    ///
    /// # Errors
    /// - `InvalidPrizeList`: Empty list, empty entry, or an entry that is not a
    ///   non-negative amount with at most two decimals
    pub fn set_roulette_prizes(env: Env, prizes: String) -> Result<Vec<i128>, Error> {
        Admin::authorize(&env)?;
        Roulette::set_prizes(&env, &prizes)
    }

    // ============================================
    // ACCOUNTS
    // ============================================

    /// Register an account, returns its invite code
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `AlreadyRegistered`: Address already has an account
    /// - `InvalidInviteCode`: Invite code belongs to no account
    pub fn register(env: Env, account: Address, invite_code: Option<Symbol>) -> Result<Symbol, Error> {
        Admin::check_not_paused(&env)?;
        account.require_auth();
        Accounts::register(&env, &account, invite_code)
    }

    /// Store the bank account withdrawals are paid to
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `AccountNotFound`: Account not registered
    /// - `InvalidBankDetails`: Bank name, holder or IBAN is empty
    pub fn set_bank_details(
        env: Env,
        account: Address,
        bank_name: String,
        account_holder: String,
        iban: String,
    ) -> Result<(), Error> {
        Admin::check_not_paused(&env)?;
        account.require_auth();
        Accounts::set_bank_details(
            &env,
            &account,
            &BankDetails {
                bank_name,
                account_holder,
                iban,
            },
        )
    }

    // ============================================
    // DEPOSITS
    // ============================================

    /// Record a deposit awaiting admin approval, returns its id
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidAmount`: Amount must be positive
    /// - `MissingProof`: Proof of payment reference is empty
    pub fn request_deposit(
        env: Env,
        account: Address,
        amount: i128,
        proof_ref: String,
    ) -> Result<u64, Error> {
        Admin::check_not_paused(&env)?;
        account.require_auth();
        Deposits::request(&env, &account, amount, proof_ref)
    }

    // ============================================
    // LEVELS
    // ============================================

    /// Buy a level with available balance and pay the gated purchase cascade
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `LevelNotFound`: Level not in the catalog
    /// - `AlreadyOwned`: Level already active on this account
    /// - `InsufficientFunds`: Available balance below the level's deposit value
    pub fn purchase_level(env: Env, account: Address, level_id: u32) -> Result<PurchaseReceipt, Error> {
        Admin::check_not_paused(&env)?;
        account.require_auth();
        Levels::purchase(&env, &account, level_id)
    }

    // ============================================
    // TASKS
    // ============================================

    /// Complete today's task and pay the ungated task cascade
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `NoActiveLevel`: Account holds no active level
    /// - `AlreadyCompletedToday`: Task already done this local day
    /// - `TaskFailed`: Internal fault while processing
    pub fn complete_task(env: Env, account: Address) -> Result<TaskReceipt, Error> {
        Admin::check_not_paused(&env)?;
        account.require_auth();
        Tasks::complete(&env, &account)
    }

    // ============================================
    // WITHDRAWALS
    // ============================================

    /// Request a withdrawal, debiting the amount immediately; returns its id
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `DailyLimitReached`: A pending or approved withdrawal exists today
    /// - `OutsideWindow`: Outside the withdrawal window
    /// - `MissingBankDetails`: No bank details on file
    /// - `BelowMinimum`: Amount under the minimum withdrawal
    /// - `InsufficientFunds`: Available balance below amount
    pub fn request_withdrawal(env: Env, account: Address, amount: i128) -> Result<u64, Error> {
        Admin::check_not_paused(&env)?;
        account.require_auth();
        Withdrawals::request(&env, &account, amount)
    }

    // ============================================
    // ROULETTE
    // ============================================

    /// Spend one spin on a weighted prize draw
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `NoSpinsLeft`: Account has no spins
    pub fn spin(env: Env, account: Address) -> Result<SpinResult, Error> {
        Admin::check_not_paused(&env)?;
        account.require_auth();
        Roulette::spin(&env, &account)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn get_account(env: Env, account: Address) -> Result<Account, Error> {
        Storage::get_account(&env, &account)
    }

    pub fn bank_details(env: Env, account: Address) -> Option<BankDetails> {
        Storage::get_bank_details(&env, &account)
    }

    pub fn account_summary(env: Env, account: Address) -> Result<AccountSummary, Error> {
        Accounts::summary(&env, &account)
    }

    pub fn team_summary(env: Env, account: Address) -> Result<TeamSummary, Error> {
        ReferralGraph::team_summary(&env, &account)
    }

    pub fn upward_chain(env: Env, account: Address, depth: u32) -> Result<Vec<Address>, Error> {
        ReferralGraph::upward_chain(&env, &account, depth)
    }

    pub fn downward_set(env: Env, account: Address, depth: u32) -> Vec<Address> {
        ReferralGraph::downward_set(&env, &account, depth)
    }

    pub fn get_level(env: Env, level_id: u32) -> Result<Level, Error> {
        Storage::get_level(&env, level_id)
    }

    pub fn levels(env: Env) -> Vec<Level> {
        Levels::catalog(&env)
    }

    pub fn active_subscriptions(env: Env, account: Address) -> Vec<LevelSubscription> {
        Levels::active_subscriptions(&env, &account)
    }

    pub fn get_deposit(env: Env, deposit_id: u64) -> Result<Deposit, Error> {
        Storage::get_deposit(&env, deposit_id)
    }

    pub fn account_deposits(env: Env, account: Address) -> Vec<u64> {
        Storage::get_ids(&env, &DataKey::AccountDeposits(account))
    }

    pub fn get_withdrawal(env: Env, withdrawal_id: u64) -> Result<Withdrawal, Error> {
        Storage::get_withdrawal(&env, withdrawal_id)
    }

    pub fn account_withdrawals(env: Env, account: Address) -> Vec<u64> {
        Storage::get_ids(&env, &DataKey::AccountWithdrawals(account))
    }

    pub fn get_task(env: Env, account: Address, day: u64) -> Option<TaskRecord> {
        Storage::get_task(&env, &account, day)
    }

    /// Local calendar day (days since epoch at the configured offset)
    pub fn current_day(env: Env) -> u64 {
        Config::current_day(&env, &Config::load(&env))
    }

    pub fn roulette_prizes(env: Env) -> Vec<i128> {
        Config::roulette_prizes(&env)
    }

    pub fn recent_winners(env: Env) -> Vec<SpinRecord> {
        Roulette::recent_winners(&env)
    }

    pub fn get_config(env: Env) -> PlatformConfig {
        Config::load(&env)
    }

    pub fn get_settings(env: Env) -> PlatformSettings {
        Config::settings(&env)
    }

    pub fn platform_bank_accounts(env: Env) -> Vec<PlatformBankAccount> {
        Config::bank_accounts(&env)
    }

    pub fn ledger_totals(env: Env, account: Address) -> LedgerTotals {
        Storage::get_totals(&env, &account)
    }

    /// Check both balances against the recorded ledger entries
    pub fn reconcile(env: Env, account: Address) -> Result<bool, Error> {
        Ledger::reconcile(&env, &account)
    }
}
