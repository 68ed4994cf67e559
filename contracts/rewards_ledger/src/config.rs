use crate::error::Error;
use crate::types::{
    DataKey, PlatformBankAccount, PlatformConfig, PlatformSettings, CENTS, DEFAULT_MIN_WITHDRAWAL,
    DEFAULT_UTC_OFFSET, DEFAULT_WINDOW_END, DEFAULT_WINDOW_START, SECONDS_PER_DAY,
};
use soroban_sdk::{vec, Env, String, Vec};

pub struct Config;

impl Config {
    /// Current config, or the built-in defaults when none was stored
    pub fn load(env: &Env) -> PlatformConfig {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .unwrap_or_else(Self::defaults)
    }

    pub fn defaults() -> PlatformConfig {
        PlatformConfig {
            withdrawal_window_start: DEFAULT_WINDOW_START,
            withdrawal_window_end: DEFAULT_WINDOW_END,
            min_withdrawal: DEFAULT_MIN_WITHDRAWAL,
            utc_offset: DEFAULT_UTC_OFFSET,
        }
    }

    pub fn store(env: &Env, config: &PlatformConfig) -> Result<(), Error> {
        Self::validate(config)?;
        env.storage().instance().set(&DataKey::Config, config);
        Ok(())
    }

    pub fn validate(config: &PlatformConfig) -> Result<(), Error> {
        let day = SECONDS_PER_DAY as u32;
        if config.withdrawal_window_start >= config.withdrawal_window_end
            || config.withdrawal_window_end >= day
        {
            return Err(Error::InvalidConfig);
        }
        if config.min_withdrawal <= 0 {
            return Err(Error::InvalidConfig);
        }
        // Real-world offsets lie within -12:00..=+14:00
        if config.utc_offset < -12 * 3_600 || config.utc_offset > 14 * 3_600 {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }

    pub fn settings(env: &Env) -> PlatformSettings {
        env.storage()
            .instance()
            .get(&DataKey::Settings)
            .unwrap_or(PlatformSettings {
                support_link: String::from_str(env, "#"),
                history_text: String::from_str(env, ""),
                deposit_instruction: String::from_str(env, ""),
                withdrawal_instruction: String::from_str(env, ""),
            })
    }

    pub fn bank_accounts(env: &Env) -> Vec<PlatformBankAccount> {
        env.storage()
            .instance()
            .get(&DataKey::PlatformBanks)
            .unwrap_or(Vec::new(env))
    }

    pub fn roulette_prizes(env: &Env) -> Vec<i128> {
        env.storage()
            .instance()
            .get(&DataKey::RoulettePrizes)
            .unwrap_or_else(|| Self::default_prizes(env))
    }

    pub fn default_prizes(env: &Env) -> Vec<i128> {
        vec![
            env,
            0,
            500 * CENTS,
            1_000 * CENTS,
            0,
            5_000 * CENTS,
            200 * CENTS,
            0,
            10_000 * CENTS,
        ]
    }

    /// Local calendar day of the current ledger time
    pub fn current_day(env: &Env, config: &PlatformConfig) -> u64 {
        local_day(env.ledger().timestamp(), config.utc_offset)
    }
}

fn local_seconds(timestamp: u64, utc_offset: i32) -> u64 {
    if utc_offset >= 0 {
        timestamp.saturating_add(utc_offset as u64)
    } else {
        timestamp.saturating_sub(utc_offset.unsigned_abs() as u64)
    }
}

/// Days since the epoch in platform local time
pub fn local_day(timestamp: u64, utc_offset: i32) -> u64 {
    local_seconds(timestamp, utc_offset) / SECONDS_PER_DAY
}

/// Seconds elapsed since local midnight
pub fn seconds_of_day(timestamp: u64, utc_offset: i32) -> u32 {
    (local_seconds(timestamp, utc_offset) % SECONDS_PER_DAY) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = 20_000;

    #[test]
    fn test_local_day_rolls_over_at_local_midnight() {
        // 23:30 UTC is already 00:30 the next day at +01:00
        let ts = DAY * SECONDS_PER_DAY + 23 * 3_600 + 1_800;
        assert_eq!(local_day(ts, 0), DAY);
        assert_eq!(local_day(ts, 3_600), DAY + 1);
    }

    #[test]
    fn test_negative_offset() {
        let ts = DAY * SECONDS_PER_DAY + 1_800;
        assert_eq!(local_day(ts, -3_600), DAY - 1);
        assert_eq!(seconds_of_day(ts, -3_600), 23 * 3_600 + 1_800);
    }

    #[test]
    fn test_seconds_of_day() {
        let ts = DAY * SECONDS_PER_DAY + 8 * 3_600;
        assert_eq!(seconds_of_day(ts, 3_600), 9 * 3_600);
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let config = PlatformConfig {
            withdrawal_window_start: DEFAULT_WINDOW_END,
            withdrawal_window_end: DEFAULT_WINDOW_START,
            min_withdrawal: DEFAULT_MIN_WITHDRAWAL,
            utc_offset: DEFAULT_UTC_OFFSET,
        };
        assert_eq!(Config::validate(&config), Err(Error::InvalidConfig));
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::defaults();
        assert_eq!(Config::validate(&config), Ok(()));
        assert_eq!(config.min_withdrawal, 3_000 * CENTS);
    }
}
