use crate::config::Config;
use crate::error::Error;
use crate::events::{PrizesUpdatedEvent, SpinEvent, SpinsGrantedEvent};
use crate::ledger::Ledger;
use crate::storage::Storage;
use crate::types::{DataKey, EntrySource, SpinRecord, SpinResult, CENTS, RECENT_WINNERS_LIMIT};
use soroban_sdk::{Address, Env, String, Symbol, Vec};

const MAX_PRIZE_LIST_LEN: usize = 256;

/// Prizes at or below this amount are "small" and drawn more often
pub const SMALL_PRIZE_CEILING: i128 = 500 * CENTS;

pub struct Roulette;

impl Roulette {
    pub fn spin(env: &Env, address: &Address) -> Result<SpinResult, Error> {
        let mut account = Storage::get_account(env, address)?;
        if account.roulette_spins == 0 {
            return Err(Error::NoSpinsLeft);
        }

        let prizes = Config::roulette_prizes(env);
        let total = total_weight(&prizes);
        if total == 0 {
            return Err(Error::InvalidPrizeList);
        }

        let roll: u64 = env.prng().gen_range(0..total);
        let prize = pick(&prizes, roll).ok_or(Error::InvalidPrizeList)?;

        account.roulette_spins -= 1;
        let remaining_spins = account.roulette_spins;
        Storage::set_account(env, &account);

        if prize > 0 {
            Ledger::credit_earning(env, address, prize, EntrySource::Roulette)?;
        }

        let id = Storage::next_id(env, DataKey::SpinCounter);
        let record = SpinRecord {
            id,
            account: address.clone(),
            prize,
            approved: true,
            spun_at: env.ledger().timestamp(),
        };
        env.storage().persistent().set(&DataKey::Spin(id), &record);

        let mut recent: Vec<u64> = env
            .storage()
            .instance()
            .get(&DataKey::RecentSpins)
            .unwrap_or(Vec::new(env));
        recent.push_front(id);
        while recent.len() > RECENT_WINNERS_LIMIT {
            recent.pop_back();
        }
        env.storage().instance().set(&DataKey::RecentSpins, &recent);

        env.events().publish(
            (Symbol::new(env, "spin"), address.clone()),
            SpinEvent {
                spin_id: id,
                account: address.clone(),
                prize,
                remaining_spins,
            },
        );

        Ok(SpinResult {
            prize,
            remaining_spins,
        })
    }

    pub fn grant_spins(env: &Env, address: &Address, count: u32) -> Result<u32, Error> {
        if count == 0 {
            return Err(Error::InvalidAmount);
        }

        let mut account = Storage::get_account(env, address)?;
        account.roulette_spins = account
            .roulette_spins
            .checked_add(count)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set_account(env, &account);

        env.events().publish(
            (Symbol::new(env, "spins_granted"), address.clone()),
            SpinsGrantedEvent {
                account: address.clone(),
                granted: count,
                total: account.roulette_spins,
            },
        );

        Ok(account.roulette_spins)
    }

    /// Most recent spins, newest first
    pub fn recent_winners(env: &Env) -> Vec<SpinRecord> {
        let ids: Vec<u64> = env
            .storage()
            .instance()
            .get(&DataKey::RecentSpins)
            .unwrap_or(Vec::new(env));

        let mut records: Vec<SpinRecord> = Vec::new(env);
        for id in ids.iter() {
            if let Some(record) = env.storage().persistent().get(&DataKey::Spin(id)) {
                records.push_back(record);
            }
        }
        records
    }

    pub fn set_prizes(env: &Env, list: &String) -> Result<Vec<i128>, Error> {
        let prizes = parse_prize_list(env, list)?;
        env.storage().instance().set(&DataKey::RoulettePrizes, &prizes);

        env.events().publish(
            (Symbol::new(env, "prizes_updated"),),
            PrizesUpdatedEvent {
                prizes: prizes.clone(),
            },
        );
        Ok(prizes)
    }
}

/// Draw weight of one pool entry: 10 for nothing, 5 for a small prize, 1 otherwise
pub fn prize_weight(prize: i128) -> u64 {
    if prize == 0 {
        10
    } else if prize <= SMALL_PRIZE_CEILING {
        5
    } else {
        1
    }
}

pub fn total_weight(prizes: &Vec<i128>) -> u64 {
    prizes.iter().map(prize_weight).sum()
}

/// Map a roll in `0..total_weight` onto the pool entry it lands in
pub fn pick(prizes: &Vec<i128>, roll: u64) -> Option<i128> {
    let mut cursor = 0u64;
    for prize in prizes.iter() {
        cursor += prize_weight(prize);
        if roll < cursor {
            return Some(prize);
        }
    }
    None
}

/// Parse a comma separated list such as `"0, 500, 1000.50"` into minor units
pub fn parse_prize_list(env: &Env, list: &String) -> Result<Vec<i128>, Error> {
    let len = list.len() as usize;
    if len == 0 || len > MAX_PRIZE_LIST_LEN {
        return Err(Error::InvalidPrizeList);
    }

    let mut buf = [0u8; MAX_PRIZE_LIST_LEN];
    list.copy_into_slice(&mut buf[..len]);

    let mut prizes: Vec<i128> = Vec::new(env);
    for part in buf[..len].split(|b| *b == b',') {
        let prize = parse_amount(part).ok_or(Error::InvalidPrizeList)?;
        prizes.push_back(prize);
    }
    Ok(prizes)
}

fn parse_amount(raw: &[u8]) -> Option<i128> {
    let digits = trim(raw);
    if digits.is_empty() {
        return None;
    }

    let mut whole = 0i128;
    let mut whole_digits = 0u32;
    let mut fraction = 0i128;
    let mut fraction_digits = 0u32;
    let mut seen_point = false;

    for &b in digits {
        match b {
            b'.' if !seen_point => seen_point = true,
            b'0'..=b'9' => {
                let digit = (b - b'0') as i128;
                if seen_point {
                    if fraction_digits == 2 {
                        return None;
                    }
                    fraction = fraction * 10 + digit;
                    fraction_digits += 1;
                } else {
                    whole = whole.checked_mul(10)?.checked_add(digit)?;
                    whole_digits += 1;
                }
            }
            _ => return None,
        }
    }

    if whole_digits == 0 {
        return None;
    }
    if fraction_digits == 1 {
        fraction *= 10;
    }
    whole.checked_mul(CENTS)?.checked_add(fraction)
}

fn trim(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if !first.is_ascii_whitespace() {
            break;
        }
        bytes = rest;
    }
    while let [rest @ .., last] = bytes {
        if !last.is_ascii_whitespace() {
            break;
        }
        bytes = rest;
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::vec;

    #[test]
    fn test_prize_weights() {
        assert_eq!(prize_weight(0), 10);
        assert_eq!(prize_weight(200 * CENTS), 5);
        assert_eq!(prize_weight(500 * CENTS), 5);
        assert_eq!(prize_weight(500 * CENTS + 1), 1);
        assert_eq!(prize_weight(10_000 * CENTS), 1);
    }

    #[test]
    fn test_two_zero_pool_draws_nothing_twenty_in_thirty_three() {
        let env = Env::default();
        let prizes = vec![
            &env,
            0,
            500 * CENTS,
            1_000 * CENTS,
            5_000 * CENTS,
            200 * CENTS,
            0,
            10_000 * CENTS,
        ];

        let total = total_weight(&prizes);
        assert_eq!(total, 33);

        let zero_rolls = (0..total).filter(|roll| pick(&prizes, *roll) == Some(0)).count();
        assert_eq!(zero_rolls, 20);
    }

    #[test]
    fn test_default_pool_weights() {
        let env = Env::default();
        let prizes = Config::default_prizes(&env);

        // Three zero entries in the default pool
        assert_eq!(total_weight(&prizes), 43);
        let zero_rolls = (0..43).filter(|roll| pick(&prizes, *roll) == Some(0)).count();
        assert_eq!(zero_rolls, 30);
        let jackpot_rolls = (0..43)
            .filter(|roll| pick(&prizes, *roll) == Some(10_000 * CENTS))
            .count();
        assert_eq!(jackpot_rolls, 1);
    }

    #[test]
    fn test_pick_walks_cumulative_weights() {
        let env = Env::default();
        let prizes = vec![&env, 0, 500 * CENTS, 1_000 * CENTS];

        assert_eq!(pick(&prizes, 0), Some(0));
        assert_eq!(pick(&prizes, 9), Some(0));
        assert_eq!(pick(&prizes, 10), Some(500 * CENTS));
        assert_eq!(pick(&prizes, 14), Some(500 * CENTS));
        assert_eq!(pick(&prizes, 15), Some(1_000 * CENTS));
        assert_eq!(pick(&prizes, 16), None);
    }

    #[test]
    fn test_parse_prize_list() {
        let env = Env::default();
        let list = String::from_str(&env, "0, 500,1000.5 , 12.25");

        let prizes = parse_prize_list(&env, &list).unwrap();
        assert_eq!(
            prizes,
            vec![&env, 0, 500 * CENTS, 1_000 * CENTS + 50, 12 * CENTS + 25]
        );
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        let env = Env::default();
        for raw in ["", "0,,500", "abc", "-5", "1.234", ".5", "1.2.3"] {
            let list = String::from_str(&env, raw);
            assert_eq!(parse_prize_list(&env, &list), Err(Error::InvalidPrizeList));
        }
    }
}
