use crate::error::Error;
use crate::types::{
    Account, BankDetails, DataKey, Deposit, Level, LedgerTotals, LevelSubscription, TaskRecord,
    Withdrawal,
};
use soroban_sdk::{Address, Env, Symbol, Vec};

pub struct Storage;

impl Storage {
    // Admin
    pub fn get_admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    pub fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Paused)
            .unwrap_or(false)
    }

    // Counters
    pub fn next_id(env: &Env, counter: DataKey) -> u64 {
        let id = env
            .storage()
            .instance()
            .get::<DataKey, u64>(&counter)
            .unwrap_or(0)
            + 1;
        env.storage().instance().set(&counter, &id);
        id
    }

    // Accounts
    pub fn get_account(env: &Env, address: &Address) -> Result<Account, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Account(address.clone()))
            .ok_or(Error::AccountNotFound)
    }

    pub fn set_account(env: &Env, account: &Account) {
        env.storage()
            .persistent()
            .set(&DataKey::Account(account.address.clone()), account);
    }

    pub fn has_account(env: &Env, address: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Account(address.clone()))
    }

    pub fn get_totals(env: &Env, address: &Address) -> LedgerTotals {
        env.storage()
            .persistent()
            .get(&DataKey::Totals(address.clone()))
            .unwrap_or_default()
    }

    pub fn set_totals(env: &Env, address: &Address, totals: &LedgerTotals) {
        env.storage()
            .persistent()
            .set(&DataKey::Totals(address.clone()), totals);
    }

    pub fn get_bank_details(env: &Env, address: &Address) -> Option<BankDetails> {
        env.storage()
            .persistent()
            .get(&DataKey::BankDetails(address.clone()))
    }

    pub fn set_bank_details(env: &Env, address: &Address, details: &BankDetails) {
        env.storage()
            .persistent()
            .set(&DataKey::BankDetails(address.clone()), details);
    }

    // Referral graph
    pub fn invite_owner(env: &Env, code: &Symbol) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::InviteCode(code.clone()))
    }

    pub fn set_invite_owner(env: &Env, code: &Symbol, owner: &Address) {
        env.storage()
            .persistent()
            .set(&DataKey::InviteCode(code.clone()), owner);
    }

    pub fn referral_count(env: &Env, referrer: &Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::ReferralCount(referrer.clone()))
            .unwrap_or(0)
    }

    pub fn referral_at(env: &Env, referrer: &Address, index: u32) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Referral(referrer.clone(), index))
    }

    /// Append one direct referral; each entry is its own key so the cost does
    /// not grow with team size
    pub fn push_referral(env: &Env, referrer: &Address, referral: &Address) -> u32 {
        let index = Self::referral_count(env, referrer);
        env.storage()
            .persistent()
            .set(&DataKey::Referral(referrer.clone(), index), referral);
        env.storage()
            .persistent()
            .set(&DataKey::ReferralCount(referrer.clone()), &(index + 1));
        index + 1
    }

    // Levels
    pub fn get_level(env: &Env, level_id: u32) -> Result<Level, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Level(level_id))
            .ok_or(Error::LevelNotFound)
    }

    pub fn set_level(env: &Env, level: &Level) {
        env.storage()
            .persistent()
            .set(&DataKey::Level(level.id), level);
    }

    pub fn get_level_ids(env: &Env) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::LevelIds)
            .unwrap_or(Vec::new(env))
    }

    pub fn set_level_ids(env: &Env, ids: &Vec<u32>) {
        env.storage().persistent().set(&DataKey::LevelIds, ids);
    }

    pub fn get_subscriptions(env: &Env, address: &Address) -> Vec<LevelSubscription> {
        env.storage()
            .persistent()
            .get(&DataKey::Subscriptions(address.clone()))
            .unwrap_or(Vec::new(env))
    }

    pub fn set_subscriptions(env: &Env, address: &Address, subs: &Vec<LevelSubscription>) {
        env.storage()
            .persistent()
            .set(&DataKey::Subscriptions(address.clone()), subs);
    }

    // Deposits
    pub fn get_deposit(env: &Env, id: u64) -> Result<Deposit, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Deposit(id))
            .ok_or(Error::DepositNotFound)
    }

    pub fn set_deposit(env: &Env, deposit: &Deposit) {
        env.storage()
            .persistent()
            .set(&DataKey::Deposit(deposit.id), deposit);
    }

    // Withdrawals
    pub fn get_withdrawal(env: &Env, id: u64) -> Result<Withdrawal, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Withdrawal(id))
            .ok_or(Error::WithdrawalNotFound)
    }

    pub fn set_withdrawal(env: &Env, withdrawal: &Withdrawal) {
        env.storage()
            .persistent()
            .set(&DataKey::Withdrawal(withdrawal.id), withdrawal);
    }

    // Per-account id indexes (deposits, withdrawals, daily withdrawals)
    pub fn get_ids(env: &Env, key: &DataKey) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(key)
            .unwrap_or(Vec::new(env))
    }

    pub fn push_id(env: &Env, key: &DataKey, id: u64) {
        let mut ids = Self::get_ids(env, key);
        ids.push_back(id);
        env.storage().persistent().set(key, &ids);
    }

    // Tasks
    pub fn get_task(env: &Env, address: &Address, day: u64) -> Option<TaskRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::Task(address.clone(), day))
    }

    pub fn has_task(env: &Env, address: &Address, day: u64) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Task(address.clone(), day))
    }

    pub fn set_task(env: &Env, task: &TaskRecord) {
        env.storage()
            .persistent()
            .set(&DataKey::Task(task.account.clone(), task.day), task);
    }
}
