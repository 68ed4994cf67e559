use crate::error::Error;
use crate::levels::Levels;
use crate::storage::Storage;
use crate::types::{TeamSummary, TeamTier, CASCADE_DEPTH};
use soroban_sdk::{log, Address, Env, Vec};

/// Referrer links stored on each account, with a reverse index of direct
/// referrals per referrer for team reports.
///
/// The reverse index is keyed per entry (`Referral(referrer, i)`), so linking
/// is constant cost however large a team grows.
pub struct ReferralGraph;

impl ReferralGraph {
    /// Called once per account at registration, which keeps the index free of
    /// duplicates
    pub fn link(env: &Env, account: &Address, referrer: &Address) -> u32 {
        Storage::push_referral(env, referrer, account)
    }

    pub fn direct_referrals(env: &Env, referrer: &Address) -> Vec<Address> {
        let mut referrals: Vec<Address> = Vec::new(env);
        for index in 0..Storage::referral_count(env, referrer) {
            if let Some(referral) = Storage::referral_at(env, referrer, index) {
                referrals.push_back(referral);
            }
        }
        referrals
    }

    /// Up to `depth` ancestors, direct referrer first.
    ///
    /// Stops at the end of the chain or at the first address already seen.
    pub fn upward_chain(env: &Env, account: &Address, depth: u32) -> Result<Vec<Address>, Error> {
        let mut chain: Vec<Address> = Vec::new(env);
        let mut current = Storage::get_account(env, account)?.referrer;

        while chain.len() < depth {
            let Some(ancestor) = current else {
                break;
            };
            if ancestor == *account || chain.contains(&ancestor) {
                log!(env, "referral cycle detected", account.clone(), ancestor);
                break;
            }
            current = match Storage::get_account(env, &ancestor) {
                Ok(next) => next.referrer,
                Err(_) => None,
            };
            chain.push_back(ancestor);
        }

        Ok(chain)
    }

    /// Descendants grouped by tier (tier A first).
    ///
    /// A child is only followed while its stored referrer is the parent it was
    /// indexed under, so every address sits under exactly one parent and the
    /// walk stays a tree even over corrupted links.
    pub fn downward_tiers(env: &Env, account: &Address, depth: u32) -> Vec<Vec<Address>> {
        let mut tiers: Vec<Vec<Address>> = Vec::new(env);

        let mut frontier: Vec<Address> = Vec::new(env);
        frontier.push_back(account.clone());

        for _ in 0..depth {
            let mut next: Vec<Address> = Vec::new(env);
            for parent in frontier.iter() {
                for child in Self::direct_referrals(env, &parent).iter() {
                    if child == *account || !Self::is_linked(env, &child, &parent) {
                        continue;
                    }
                    next.push_back(child);
                }
            }
            if next.is_empty() {
                break;
            }
            tiers.push_back(next.clone());
            frontier = next;
        }

        tiers
    }

    fn is_linked(env: &Env, child: &Address, parent: &Address) -> bool {
        match Storage::get_account(env, child) {
            Ok(account) => account.referrer.as_ref() == Some(parent),
            Err(_) => false,
        }
    }

    pub fn downward_set(env: &Env, account: &Address, depth: u32) -> Vec<Address> {
        let mut all: Vec<Address> = Vec::new(env);
        for tier in Self::downward_tiers(env, account, depth).iter() {
            all.append(&tier);
        }
        all
    }

    pub fn team_summary(env: &Env, address: &Address) -> Result<TeamSummary, Error> {
        let account = Storage::get_account(env, address)?;
        let tiers = Self::downward_tiers(env, address, CASCADE_DEPTH);

        let mut stats: Vec<TeamTier> = Vec::new(env);
        let mut team_count = 0u32;
        let mut total_investors = 0u32;

        for tier in 0..CASCADE_DEPTH {
            let members = tiers.get(tier).unwrap_or(Vec::new(env));
            let investors = members
                .iter()
                .filter(|member| Levels::has_active(env, member))
                .count() as u32;

            team_count += members.len();
            total_investors += investors;
            stats.push_back(TeamTier {
                members: members.len(),
                investors,
            });
        }

        Ok(TeamSummary {
            invite_code: account.invite_code,
            subsidy_balance: account.subsidy_balance,
            tiers: stats,
            team_count,
            total_investors,
        })
    }
}
