use crate::config::Config;
use crate::error::Error;
use crate::events::{WithdrawalRequestedEvent, WithdrawalStatusEvent};
use crate::ledger::Ledger;
use crate::storage::Storage;
use crate::types::{Bucket, DataKey, EntrySource, Withdrawal, WithdrawalStatus};
use crate::validation::Validator;
use soroban_sdk::{Address, Env, Symbol};

pub struct Withdrawals;

impl Withdrawals {
    /// Validate and record a withdrawal request, debiting the full amount up
    /// front.
    ///
    /// # Errors
    /// Checked in this order:
    /// - `DailyLimitReached`: a pending or approved request exists today
    /// - `OutsideWindow`: local time outside the configured window
    /// - `MissingBankDetails`: no bank details on file
    /// - `BelowMinimum`: amount under the configured minimum
    /// - `InsufficientFunds`: available balance below amount
    pub fn request(env: &Env, address: &Address, amount: i128) -> Result<u64, Error> {
        let config = Config::load(env);
        let now = env.ledger().timestamp();
        let day = Config::current_day(env, &config);

        let account = Storage::get_account(env, address)?;

        let daily_key = DataKey::DailyWithdrawals(address.clone(), day);
        if Self::open_count(env, &daily_key)? > 0 {
            return Err(Error::DailyLimitReached);
        }

        Validator::check_withdrawal_window(&config, now)?;

        if Storage::get_bank_details(env, address).is_none() {
            return Err(Error::MissingBankDetails);
        }

        Validator::check_minimum_withdrawal(&config, amount)?;

        if account.available_balance < amount {
            return Err(Error::InsufficientFunds);
        }

        let id = Storage::next_id(env, DataKey::WithdrawalCounter);
        let withdrawal = Withdrawal {
            id,
            account: address.clone(),
            amount,
            status: WithdrawalStatus::Pending,
            created_at: now,
            day,
        };
        Storage::set_withdrawal(env, &withdrawal);
        Storage::push_id(env, &daily_key, id);
        Storage::push_id(env, &DataKey::AccountWithdrawals(address.clone()), id);

        Ledger::debit(env, address, amount, Bucket::Available, EntrySource::Withdrawal)?;

        env.events().publish(
            (Symbol::new(env, "withdrawal_requested"), id),
            WithdrawalRequestedEvent {
                withdrawal_id: id,
                account: address.clone(),
                amount,
            },
        );

        Ok(id)
    }

    /// Settle a pending request. Rejection refunds the debited amount.
    pub fn set_status(env: &Env, id: u64, status: WithdrawalStatus) -> Result<(), Error> {
        let mut withdrawal = Storage::get_withdrawal(env, id)?;

        if withdrawal.status != WithdrawalStatus::Pending || status == WithdrawalStatus::Pending {
            return Err(Error::InvalidStatus);
        }

        withdrawal.status = status;
        Storage::set_withdrawal(env, &withdrawal);

        match status {
            WithdrawalStatus::Rejected => {
                Ledger::credit(
                    env,
                    &withdrawal.account,
                    withdrawal.amount,
                    Bucket::Available,
                    EntrySource::Refund,
                )?;
            }
            WithdrawalStatus::Approved => {
                let mut totals = Storage::get_totals(env, &withdrawal.account);
                totals.approved_withdrawals = totals
                    .approved_withdrawals
                    .checked_add(withdrawal.amount)
                    .ok_or(Error::ArithmeticOverflow)?;
                Storage::set_totals(env, &withdrawal.account, &totals);
            }
            WithdrawalStatus::Pending => {}
        }

        env.events().publish(
            (Symbol::new(env, "withdrawal_status"), id),
            WithdrawalStatusEvent {
                withdrawal_id: id,
                account: withdrawal.account.clone(),
                status,
            },
        );

        Ok(())
    }

    /// Pending or approved requests recorded under a daily index
    fn open_count(env: &Env, daily_key: &DataKey) -> Result<u32, Error> {
        let mut count = 0u32;
        for id in Storage::get_ids(env, daily_key).iter() {
            let withdrawal = Storage::get_withdrawal(env, id)?;
            if withdrawal.status != WithdrawalStatus::Rejected {
                count += 1;
            }
        }
        Ok(count)
    }
}
