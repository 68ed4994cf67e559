use crate::cascade::{self, CascadePolicy};
use crate::error::Error;
use crate::events::{LevelPurchasedEvent, LevelUpsertedEvent, SubscriptionDeactivatedEvent};
use crate::ledger::Ledger;
use crate::storage::Storage;
use crate::types::{Bucket, EntrySource, Level, LevelSubscription, PurchaseReceipt};
use soroban_sdk::{Address, Env, Symbol, Vec};

pub struct Levels;

impl Levels {
    // ============================================
    // CATALOG
    // ============================================

    pub fn upsert(env: &Env, level: &Level) -> Result<(), Error> {
        if level.deposit_value <= 0
            || level.daily_gain <= 0
            || level.monthly_gain < 0
            || level.cycle_days == 0
        {
            return Err(Error::InvalidLevel);
        }

        let mut ids = Storage::get_level_ids(env);
        if !ids.contains(level.id) {
            ids.push_back(level.id);
            Storage::set_level_ids(env, &ids);
        }
        Storage::set_level(env, level);

        env.events().publish(
            (Symbol::new(env, "level_upserted"), level.id),
            LevelUpsertedEvent {
                level_id: level.id,
                deposit_value: level.deposit_value,
                daily_gain: level.daily_gain,
            },
        );
        Ok(())
    }

    /// Catalog ordered by deposit value, cheapest first
    pub fn catalog(env: &Env) -> Vec<Level> {
        let mut sorted: Vec<Level> = Vec::new(env);
        for id in Storage::get_level_ids(env).iter() {
            let Ok(level) = Storage::get_level(env, id) else {
                continue;
            };
            let position = sorted
                .iter()
                .position(|existing| existing.deposit_value > level.deposit_value)
                .unwrap_or(sorted.len() as usize);
            sorted.insert(position as u32, level);
        }
        sorted
    }

    // ============================================
    // SUBSCRIPTIONS
    // ============================================

    pub fn active_subscriptions(env: &Env, address: &Address) -> Vec<LevelSubscription> {
        let mut active: Vec<LevelSubscription> = Vec::new(env);
        for sub in Storage::get_subscriptions(env, address).iter() {
            if sub.active {
                active.push_back(sub);
            }
        }
        active
    }

    pub fn has_active(env: &Env, address: &Address) -> bool {
        Storage::get_subscriptions(env, address)
            .iter()
            .any(|sub| sub.active)
    }

    /// Earliest-activated active subscription; the one daily tasks pay out on
    pub fn primary_active(env: &Env, address: &Address) -> Option<LevelSubscription> {
        Storage::get_subscriptions(env, address)
            .iter()
            .find(|sub| sub.active)
    }

    pub fn deactivate(env: &Env, address: &Address, level_id: u32) -> Result<(), Error> {
        let mut account = Storage::get_account(env, address)?;
        let mut subs = Storage::get_subscriptions(env, address);

        let index = subs
            .iter()
            .position(|sub| sub.active && sub.level_id == level_id)
            .ok_or(Error::SubscriptionNotFound)? as u32;

        let mut sub = subs.get_unchecked(index);
        sub.active = false;
        subs.set(index, sub);
        Storage::set_subscriptions(env, address, &subs);

        account.level_active = subs.iter().any(|sub| sub.active);
        Storage::set_account(env, &account);

        env.events().publish(
            (Symbol::new(env, "level_deactivated"), address.clone()),
            SubscriptionDeactivatedEvent {
                account: address.clone(),
                level_id,
            },
        );

        Ok(())
    }

    // ============================================
    // PURCHASE ENGINE
    // ============================================

    pub fn purchase(env: &Env, address: &Address, level_id: u32) -> Result<PurchaseReceipt, Error> {
        let level = Storage::get_level(env, level_id)?;
        let mut account = Storage::get_account(env, address)?;
        let mut subs = Storage::get_subscriptions(env, address);

        // Validate: not already holding this exact level
        if subs.iter().any(|sub| sub.active && sub.level_id == level_id) {
            return Err(Error::AlreadyOwned);
        }

        // Validate: balance covers the price (exact balance is enough)
        if account.available_balance < level.deposit_value {
            return Err(Error::InsufficientFunds);
        }

        subs.push_back(LevelSubscription {
            level_id,
            activated_at: env.ledger().timestamp(),
            active: true,
        });
        Storage::set_subscriptions(env, address, &subs);

        account.level_active = true;
        Storage::set_account(env, &account);

        Ledger::debit(
            env,
            address,
            level.deposit_value,
            Bucket::Available,
            EntrySource::Purchase,
        )?;

        let payouts = cascade::distribute(
            env,
            address,
            CascadePolicy::PurchaseShare(level.deposit_value),
        )?;

        env.events().publish(
            (Symbol::new(env, "level_purchased"), address.clone()),
            LevelPurchasedEvent {
                account: address.clone(),
                level_id,
                price: level.deposit_value,
            },
        );

        Ok(PurchaseReceipt {
            level_id,
            level_name: level.name,
            amount_paid: level.deposit_value,
            payouts,
        })
    }
}
