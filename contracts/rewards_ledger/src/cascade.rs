use crate::error::Error;
use crate::events::CommissionPaidEvent;
use crate::ledger::Ledger;
use crate::levels::Levels;
use crate::referral::ReferralGraph;
use crate::types::{
    CommissionPayout, EntrySource, BASIS_POINTS, CASCADE_DEPTH, PURCHASE_TIER_BPS,
    TASK_TIER_BONUS,
};
use soroban_sdk::{Address, Env, Symbol, Vec};

/// How a commission cascade pays the three tiers above its origin.
///
/// Task bonuses reach every linked ancestor. Purchase shares stop at the
/// first ancestor without an active level.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CascadePolicy {
    /// Fixed 100 / 30 / 10 unit bonus, ungated
    TaskBonus,
    /// 15% / 3% / 1% of the given deposit value, gated on active level
    PurchaseShare(i128),
}

impl CascadePolicy {
    /// Amount owed to tier `tier` (1-based)
    pub fn tier_amount(&self, tier: u32) -> Result<i128, Error> {
        let index = (tier - 1) as usize;
        match self {
            CascadePolicy::TaskBonus => Ok(TASK_TIER_BONUS[index]),
            CascadePolicy::PurchaseShare(base) => base
                .checked_mul(PURCHASE_TIER_BPS[index])
                .and_then(|v| v.checked_div(BASIS_POINTS))
                .ok_or(Error::ArithmeticOverflow),
        }
    }

    pub fn requires_active_level(&self) -> bool {
        matches!(self, CascadePolicy::PurchaseShare(_))
    }
}

/// Walk the upward chain of `origin` and credit each eligible tier
pub fn distribute(
    env: &Env,
    origin: &Address,
    policy: CascadePolicy,
) -> Result<Vec<CommissionPayout>, Error> {
    let mut payouts: Vec<CommissionPayout> = Vec::new(env);
    let chain = ReferralGraph::upward_chain(env, origin, CASCADE_DEPTH)?;

    let mut tier = 0u32;
    for ancestor in chain.iter() {
        tier += 1;

        if policy.requires_active_level() && !Levels::has_active(env, &ancestor) {
            break;
        }

        let amount = policy.tier_amount(tier)?;
        if amount > 0 {
            Ledger::credit_earning(env, &ancestor, amount, EntrySource::Commission)?;

            env.events().publish(
                (Symbol::new(env, "commission"), ancestor.clone()),
                CommissionPaidEvent {
                    origin: origin.clone(),
                    beneficiary: ancestor.clone(),
                    tier,
                    amount,
                },
            );
        }

        payouts.push_back(CommissionPayout {
            tier,
            beneficiary: ancestor,
            amount,
        });
    }

    Ok(payouts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CENTS;

    #[test]
    fn test_task_bonus_tiers() {
        let policy = CascadePolicy::TaskBonus;
        assert_eq!(policy.tier_amount(1), Ok(100 * CENTS));
        assert_eq!(policy.tier_amount(2), Ok(30 * CENTS));
        assert_eq!(policy.tier_amount(3), Ok(10 * CENTS));
        assert!(!policy.requires_active_level());
    }

    #[test]
    fn test_purchase_share_tiers() {
        let policy = CascadePolicy::PurchaseShare(10_000 * CENTS);
        assert_eq!(policy.tier_amount(1), Ok(1_500 * CENTS));
        assert_eq!(policy.tier_amount(2), Ok(300 * CENTS));
        assert_eq!(policy.tier_amount(3), Ok(100 * CENTS));
        assert!(policy.requires_active_level());
    }

    #[test]
    fn test_purchase_share_rounds_down() {
        // 1% of 0.99 is below one minor unit
        let policy = CascadePolicy::PurchaseShare(99);
        assert_eq!(policy.tier_amount(3), Ok(0));
    }

    #[test]
    fn test_purchase_share_overflow() {
        let policy = CascadePolicy::PurchaseShare(i128::MAX);
        assert_eq!(policy.tier_amount(1), Err(Error::ArithmeticOverflow));
    }
}
