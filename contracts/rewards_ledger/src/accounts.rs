use crate::config::Config;
use crate::error::Error;
use crate::events::{BankDetailsUpdatedEvent, RegisteredEvent};
use crate::levels::Levels;
use crate::referral::ReferralGraph;
use crate::storage::Storage;
use crate::types::{Account, AccountSummary, BankDetails, INVITE_CODE_LEN};
use soroban_sdk::{Address, Env, Symbol};

const INVITE_ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub struct Accounts;

impl Accounts {
    /// Open an account, optionally under the owner of `invite_code`
    pub fn register(env: &Env, address: &Address, invite_code: Option<Symbol>) -> Result<Symbol, Error> {
        if Storage::has_account(env, address) {
            return Err(Error::AlreadyRegistered);
        }

        let referrer = match invite_code {
            Some(code) => Some(Storage::invite_owner(env, &code).ok_or(Error::InvalidInviteCode)?),
            None => None,
        };

        let code = Self::fresh_invite_code(env);
        let account = Account {
            address: address.clone(),
            invite_code: code.clone(),
            referrer: referrer.clone(),
            available_balance: 0,
            subsidy_balance: 0,
            roulette_spins: 0,
            level_active: false,
            registered_at: env.ledger().timestamp(),
        };
        Storage::set_account(env, &account);
        Storage::set_invite_owner(env, &code, address);

        if let Some(referrer) = &referrer {
            ReferralGraph::link(env, address, referrer);
        }

        env.events().publish(
            (Symbol::new(env, "registered"), address.clone()),
            RegisteredEvent {
                account: address.clone(),
                invite_code: code.clone(),
                referrer,
            },
        );

        Ok(code)
    }

    pub fn set_bank_details(env: &Env, address: &Address, details: &BankDetails) -> Result<(), Error> {
        Storage::get_account(env, address)?;
        if details.bank_name.is_empty() || details.account_holder.is_empty() || details.iban.is_empty() {
            return Err(Error::InvalidBankDetails);
        }
        Storage::set_bank_details(env, address, details);

        env.events().publish(
            (Symbol::new(env, "bank_details"), address.clone()),
            BankDetailsUpdatedEvent {
                account: address.clone(),
            },
        );
        Ok(())
    }

    pub fn summary(env: &Env, address: &Address) -> Result<AccountSummary, Error> {
        let account = Storage::get_account(env, address)?;
        let totals = Storage::get_totals(env, address);

        let day = Config::current_day(env, &Config::load(env));
        let daily_income = Storage::get_task(env, address, day)
            .map(|task| task.earnings)
            .unwrap_or(0);

        let total_income = totals
            .task_earnings
            .checked_add(account.subsidy_balance)
            .ok_or(Error::ArithmeticOverflow)?;

        Ok(AccountSummary {
            available_balance: account.available_balance,
            subsidy_balance: account.subsidy_balance,
            approved_deposit_total: totals.deposits,
            daily_income,
            total_withdrawals: totals.approved_withdrawals,
            total_income,
            active_level: Levels::primary_active(env, address).map(|sub| sub.level_id),
        })
    }

    /// Random code from an unambiguous alphabet, retried until unused
    fn fresh_invite_code(env: &Env) -> Symbol {
        loop {
            let mut raw = [0u8; INVITE_CODE_LEN];
            for slot in raw.iter_mut() {
                let index: u64 = env.prng().gen_range(0..INVITE_ALPHABET.len() as u64);
                *slot = INVITE_ALPHABET[index as usize];
            }
            // Alphabet is ASCII, so the bytes are always valid UTF-8
            let text = core::str::from_utf8(&raw).unwrap_or("INVITE00");
            let code = Symbol::new(env, text);
            if Storage::invite_owner(env, &code).is_none() {
                return code;
            }
        }
    }
}
