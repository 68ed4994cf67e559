use crate::error::Error;
use crate::events::{DepositApprovedEvent, DepositRequestedEvent};
use crate::ledger::Ledger;
use crate::storage::Storage;
use crate::types::{Bucket, DataKey, Deposit, EntrySource};
use crate::validation::Validator;
use soroban_sdk::{Address, Env, String, Symbol};

pub struct Deposits;

impl Deposits {
    pub fn request(env: &Env, address: &Address, amount: i128, proof_ref: String) -> Result<u64, Error> {
        Validator::check_positive(amount)?;
        if proof_ref.is_empty() {
            return Err(Error::MissingProof);
        }
        Storage::get_account(env, address)?;

        let id = Storage::next_id(env, DataKey::DepositCounter);
        let deposit = Deposit {
            id,
            account: address.clone(),
            amount,
            proof_ref,
            approved: false,
            created_at: env.ledger().timestamp(),
        };
        Storage::set_deposit(env, &deposit);
        Storage::push_id(env, &DataKey::AccountDeposits(address.clone()), id);

        env.events().publish(
            (Symbol::new(env, "deposit_requested"), id),
            DepositRequestedEvent {
                deposit_id: id,
                account: address.clone(),
                amount,
            },
        );

        Ok(id)
    }

    /// Flip the approval flag and credit the account, exactly once per deposit
    pub fn approve(env: &Env, id: u64) -> Result<(), Error> {
        let mut deposit = Storage::get_deposit(env, id)?;
        if deposit.approved {
            return Err(Error::DepositAlreadyApproved);
        }

        deposit.approved = true;
        Storage::set_deposit(env, &deposit);

        Ledger::credit(
            env,
            &deposit.account,
            deposit.amount,
            Bucket::Available,
            EntrySource::Deposit,
        )?;

        env.events().publish(
            (Symbol::new(env, "deposit_approved"), id),
            DepositApprovedEvent {
                deposit_id: id,
                account: deposit.account.clone(),
                amount: deposit.amount,
            },
        );

        Ok(())
    }
}
