use crate::cascade::{self, CascadePolicy};
use crate::config::Config;
use crate::error::Error;
use crate::events::TaskCompletedEvent;
use crate::ledger::Ledger;
use crate::levels::Levels;
use crate::storage::Storage;
use crate::types::{Bucket, EntrySource, TaskReceipt, TaskRecord};
use soroban_sdk::{log, Address, Env, Symbol};

pub struct Tasks;

impl Tasks {
    /// Grant the account's daily earning event.
    ///
    /// Validation failures come back unchanged; any other fault is logged and
    /// reported as `TaskFailed`.
    pub fn complete(env: &Env, address: &Address) -> Result<TaskReceipt, Error> {
        match Self::run(env, address) {
            Err(err) if !err.is_user_facing() => {
                log!(env, "task processing failed", address.clone(), err as u32);
                Err(Error::TaskFailed)
            }
            result => result,
        }
    }

    fn run(env: &Env, address: &Address) -> Result<TaskReceipt, Error> {
        let config = Config::load(env);
        let day = Config::current_day(env, &config);

        // Account must exist before anything else is looked at
        Storage::get_account(env, address)?;

        let subscription = Levels::primary_active(env, address).ok_or(Error::NoActiveLevel)?;

        if Storage::has_task(env, address, day) {
            return Err(Error::AlreadyCompletedToday);
        }

        let level = Storage::get_level(env, subscription.level_id)?;
        let earnings = level.daily_gain;

        let record = TaskRecord {
            account: address.clone(),
            level_id: level.id,
            earnings,
            completed_at: env.ledger().timestamp(),
            day,
        };
        Storage::set_task(env, &record);

        Ledger::credit(env, address, earnings, Bucket::Available, EntrySource::Task)?;

        let payouts = cascade::distribute(env, address, CascadePolicy::TaskBonus)?;

        env.events().publish(
            (Symbol::new(env, "task_completed"), address.clone()),
            TaskCompletedEvent {
                account: address.clone(),
                level_id: level.id,
                earnings,
                day,
            },
        );

        Ok(TaskReceipt {
            earnings,
            day,
            payouts,
        })
    }
}
