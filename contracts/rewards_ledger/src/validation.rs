use crate::config::seconds_of_day;
use crate::error::Error;
use crate::types::PlatformConfig;

pub struct Validator;

impl Validator {
    /// Window bounds are inclusive: 09:00:00 and 17:00:00 both pass
    pub fn check_withdrawal_window(config: &PlatformConfig, timestamp: u64) -> Result<(), Error> {
        let now = seconds_of_day(timestamp, config.utc_offset);
        if now < config.withdrawal_window_start || now > config.withdrawal_window_end {
            return Err(Error::OutsideWindow);
        }
        Ok(())
    }

    pub fn check_minimum_withdrawal(config: &PlatformConfig, amount: i128) -> Result<(), Error> {
        if amount < config.min_withdrawal {
            return Err(Error::BelowMinimum);
        }
        Ok(())
    }

    pub fn check_positive(amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::{CENTS, SECONDS_PER_DAY};

    // Local time at +01:00, so UTC is one hour behind
    fn at_local(hour: u64, minute: u64, second: u64) -> u64 {
        20_000 * SECONDS_PER_DAY + (hour - 1) * 3_600 + minute * 60 + second
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let config = Config::defaults();
        assert_eq!(Validator::check_withdrawal_window(&config, at_local(9, 0, 0)), Ok(()));
        assert_eq!(Validator::check_withdrawal_window(&config, at_local(17, 0, 0)), Ok(()));
        assert_eq!(
            Validator::check_withdrawal_window(&config, at_local(8, 59, 59)),
            Err(Error::OutsideWindow)
        );
        assert_eq!(
            Validator::check_withdrawal_window(&config, at_local(17, 0, 1)),
            Err(Error::OutsideWindow)
        );
    }

    #[test]
    fn test_minimum_withdrawal() {
        let config = Config::defaults();
        assert_eq!(Validator::check_minimum_withdrawal(&config, 3_000 * CENTS), Ok(()));
        assert_eq!(
            Validator::check_minimum_withdrawal(&config, 3_000 * CENTS - 1),
            Err(Error::BelowMinimum)
        );
    }
}
