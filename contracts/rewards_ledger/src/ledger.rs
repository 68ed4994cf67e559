use crate::error::Error;
use crate::events::LedgerEntryEvent;
use crate::storage::Storage;
use crate::types::{Account, Bucket, EntrySource, LedgerTotals};
use soroban_sdk::{Address, Env, Symbol};

/// Single entry point for every balance mutation.
///
/// Each entry updates the account row, the per-account running totals and
/// publishes a `ledger` event, so `reconcile` can prove the balances match the
/// history of entries.
pub struct Ledger;

impl Ledger {
    pub fn credit(
        env: &Env,
        address: &Address,
        amount: i128,
        bucket: Bucket,
        source: EntrySource,
    ) -> Result<i128, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut account = Storage::get_account(env, address)?;
        let mut totals = Storage::get_totals(env, address);

        let balance = Self::bucket_mut(&mut account, bucket);
        *balance = balance.checked_add(amount).ok_or(Error::ArithmeticOverflow)?;
        let new_balance = *balance;

        match bucket {
            Bucket::Available => {
                let total = Self::credit_total(&mut totals, source)?;
                *total = total.checked_add(amount).ok_or(Error::ArithmeticOverflow)?;
            }
            Bucket::Subsidy => {
                totals.subsidy_credited = totals
                    .subsidy_credited
                    .checked_add(amount)
                    .ok_or(Error::ArithmeticOverflow)?;
            }
        }

        Self::persist(env, &account, &totals, bucket, source, amount, new_balance);
        Ok(new_balance)
    }

    /// Debits fail with `InsufficientFunds` instead of driving a bucket negative
    pub fn debit(
        env: &Env,
        address: &Address,
        amount: i128,
        bucket: Bucket,
        source: EntrySource,
    ) -> Result<i128, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut account = Storage::get_account(env, address)?;
        let mut totals = Storage::get_totals(env, address);

        let balance = Self::bucket_mut(&mut account, bucket);
        if *balance < amount {
            return Err(Error::InsufficientFunds);
        }
        *balance -= amount;
        let new_balance = *balance;

        match bucket {
            Bucket::Available => {
                let total = Self::debit_total(&mut totals, source)?;
                *total = total.checked_add(amount).ok_or(Error::ArithmeticOverflow)?;
            }
            Bucket::Subsidy => {
                totals.subsidy_debited = totals
                    .subsidy_debited
                    .checked_add(amount)
                    .ok_or(Error::ArithmeticOverflow)?;
            }
        }

        Self::persist(env, &account, &totals, bucket, source, -amount, new_balance);
        Ok(new_balance)
    }

    /// Commission and prize payouts land in both buckets
    pub fn credit_earning(
        env: &Env,
        address: &Address,
        amount: i128,
        source: EntrySource,
    ) -> Result<(), Error> {
        Self::credit(env, address, amount, Bucket::Available, source)?;
        Self::credit(env, address, amount, Bucket::Subsidy, source)?;
        Ok(())
    }

    /// True when both balances equal what the recorded entries add up to
    pub fn reconcile(env: &Env, address: &Address) -> Result<bool, Error> {
        let account = Storage::get_account(env, address)?;
        let t = Storage::get_totals(env, address);

        let expected_available = t
            .deposits
            .checked_add(t.task_earnings)
            .and_then(|v| v.checked_add(t.commissions))
            .and_then(|v| v.checked_add(t.roulette_prizes))
            .and_then(|v| v.checked_add(t.refunds))
            .and_then(|v| v.checked_sub(t.purchases))
            .and_then(|v| v.checked_sub(t.withdrawals))
            .ok_or(Error::ArithmeticOverflow)?;
        let expected_subsidy = t
            .subsidy_credited
            .checked_sub(t.subsidy_debited)
            .ok_or(Error::ArithmeticOverflow)?;

        Ok(account.available_balance == expected_available
            && account.subsidy_balance == expected_subsidy)
    }

    fn bucket_mut(account: &mut Account, bucket: Bucket) -> &mut i128 {
        match bucket {
            Bucket::Available => &mut account.available_balance,
            Bucket::Subsidy => &mut account.subsidy_balance,
        }
    }

    fn credit_total(totals: &mut LedgerTotals, source: EntrySource) -> Result<&mut i128, Error> {
        match source {
            EntrySource::Deposit => Ok(&mut totals.deposits),
            EntrySource::Task => Ok(&mut totals.task_earnings),
            EntrySource::Commission => Ok(&mut totals.commissions),
            EntrySource::Roulette => Ok(&mut totals.roulette_prizes),
            EntrySource::Refund => Ok(&mut totals.refunds),
            EntrySource::Purchase | EntrySource::Withdrawal => Err(Error::InvalidEntry),
        }
    }

    fn debit_total(totals: &mut LedgerTotals, source: EntrySource) -> Result<&mut i128, Error> {
        match source {
            EntrySource::Purchase => Ok(&mut totals.purchases),
            EntrySource::Withdrawal => Ok(&mut totals.withdrawals),
            _ => Err(Error::InvalidEntry),
        }
    }

    fn persist(
        env: &Env,
        account: &Account,
        totals: &LedgerTotals,
        bucket: Bucket,
        source: EntrySource,
        delta: i128,
        balance: i128,
    ) {
        Storage::set_account(env, account);
        Storage::set_totals(env, &account.address, totals);

        env.events().publish(
            (Symbol::new(env, "ledger"), account.address.clone()),
            LedgerEntryEvent {
                account: account.address.clone(),
                bucket,
                source,
                delta,
                balance,
            },
        );
    }
}
