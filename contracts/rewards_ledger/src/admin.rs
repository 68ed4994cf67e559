use crate::config::Config;
use crate::error::Error;
use crate::events::{
    ConfigUpdatedEvent, PauseChangedEvent, PlatformBankAddedEvent, SettingsUpdatedEvent,
};
use crate::storage::Storage;
use crate::types::{DataKey, PlatformBankAccount, PlatformConfig, PlatformSettings};
use soroban_sdk::{Address, Env, Symbol};

pub struct Admin;

impl Admin {
    pub fn initialize(env: &Env, admin: &Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, admin);
        env.storage().instance().set(&DataKey::Paused, &false);

        Ok(())
    }

    /// Load the admin and require its signature
    pub fn authorize(env: &Env) -> Result<Address, Error> {
        let admin = Storage::get_admin(env)?;
        admin.require_auth();
        Ok(admin)
    }

    pub fn set_paused(env: &Env, paused: bool) -> Result<(), Error> {
        let admin = Self::authorize(env)?;
        env.storage().instance().set(&DataKey::Paused, &paused);

        let topic = if paused { "paused" } else { "unpaused" };
        env.events().publish(
            (Symbol::new(env, topic),),
            PauseChangedEvent { admin, paused },
        );
        Ok(())
    }

    pub fn set_config(env: &Env, config: &PlatformConfig) -> Result<(), Error> {
        let admin = Self::authorize(env)?;
        Config::store(env, config)?;

        env.events().publish(
            (Symbol::new(env, "config_updated"),),
            ConfigUpdatedEvent {
                admin,
                config: config.clone(),
            },
        );
        Ok(())
    }

    pub fn check_not_paused(env: &Env) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::NotInitialized);
        }
        if Storage::is_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }

    pub fn set_settings(env: &Env, settings: &PlatformSettings) -> Result<(), Error> {
        let admin = Self::authorize(env)?;
        env.storage().instance().set(&DataKey::Settings, settings);

        env.events().publish(
            (Symbol::new(env, "settings_updated"),),
            SettingsUpdatedEvent {
                admin,
                settings: settings.clone(),
            },
        );
        Ok(())
    }

    pub fn add_bank_account(env: &Env, bank: PlatformBankAccount) -> Result<u32, Error> {
        let admin = Self::authorize(env)?;
        let bank_name = bank.bank_name.clone();

        let mut banks = Config::bank_accounts(env);
        banks.push_back(bank);
        env.storage().instance().set(&DataKey::PlatformBanks, &banks);

        let count = banks.len();
        env.events().publish(
            (Symbol::new(env, "platform_bank_added"),),
            PlatformBankAddedEvent {
                admin,
                bank_name,
                count,
            },
        );
        Ok(count)
    }
}
