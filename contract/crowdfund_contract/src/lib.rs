#![no_std]


mod campaign;
mod events;
mod storage_types;

pub use campaign::{phase, transition, Facts, Op, Outcome};
pub use events::{
    CampaignCancelledEvent, CampaignCreatedEvent, ContributionEvent, FundsClaimedEvent,
    RefundsOpenedEvent,
};
pub use storage_types::{
    Campaign, CampaignPhase, CampaignStatus, CrowdfundError, DataKey, TTL_INSTANCE,
    TTL_THRESHOLD,
};

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Bind the contract to its creator. Runs once, at deployment.
    pub fn __constructor(e: Env, creator: Address) {
        e.storage().instance().set(&DataKey::Creator, &creator);
        e.storage()
            .instance()
            .set(&DataKey::Campaign, &Campaign::uninitialized());

        extend_instance(&e);
    }

    /// Open a new campaign. Only the creator may call this, and only while
    /// no other campaign is active.
    pub fn create_campaign(
        e: Env,
        caller: Address,
        goal: u64,
        deadline: u64,
    ) -> Result<String, CrowdfundError> {
        caller.require_auth();
        let (campaign, outcome) = apply(&e, Some(&caller), Op::Create { goal, deadline })?;

        log!(&e, "campaign created", campaign.goal, campaign.deadline);
        events::emit_campaign_created(
            &e,
            CampaignCreatedEvent {
                goal: campaign.goal,
                deadline: campaign.deadline,
            },
        );

        Ok(String::from_str(&e, outcome.message()))
    }

    /// Record a contribution toward the active campaign. Open to anyone.
    pub fn contribute(e: Env, contributor: Address, amount: u64) -> Result<String, CrowdfundError> {
        contributor.require_auth();
        let (campaign, outcome) = apply(&e, Some(&contributor), Op::Contribute { amount })?;

        log!(&e, "contribution accepted", amount, campaign.raised);
        events::emit_contribution(
            &e,
            ContributionEvent {
                contributor,
                amount,
                raised: campaign.raised,
            },
        );

        Ok(String::from_str(&e, outcome.message()))
    }

    /// Settle a successful campaign in favour of the creator.
    pub fn claim_funds(e: Env, caller: Address) -> Result<String, CrowdfundError> {
        caller.require_auth();
        let (campaign, outcome) = apply(&e, Some(&caller), Op::Claim)?;

        log!(&e, "funds claimed", campaign.raised);
        events::emit_funds_claimed(
            &e,
            FundsClaimedEvent {
                creator: caller,
                raised: campaign.raised,
            },
        );

        Ok(String::from_str(&e, outcome.message()))
    }

    /// Settle a failed or cancelled campaign in favour of the contributors.
    /// Anyone may trigger it.
    pub fn refund(e: Env) -> Result<String, CrowdfundError> {
        let (campaign, outcome) = apply(&e, None, Op::Refund)?;

        log!(&e, "refunds available", campaign.raised, campaign.goal);
        events::emit_refunds_opened(
            &e,
            RefundsOpenedEvent {
                raised: campaign.raised,
                goal: campaign.goal,
            },
        );

        Ok(String::from_str(&e, outcome.message()))
    }

    /// Close the active campaign before its deadline. Only the creator may
    /// call this; contributors can then trigger refunds.
    pub fn cancel_campaign(e: Env, caller: Address) -> Result<String, CrowdfundError> {
        caller.require_auth();
        let (campaign, outcome) = apply(&e, Some(&caller), Op::Cancel)?;

        log!(&e, "campaign cancelled", campaign.raised);
        events::emit_campaign_cancelled(
            &e,
            CampaignCancelledEvent {
                raised: campaign.raised,
            },
        );

        Ok(String::from_str(&e, outcome.message()))
    }

    /// View functions
    pub fn get_creator(e: Env) -> Address {
        read_creator(&e)
    }

    pub fn get_campaign(e: Env) -> Campaign {
        read_campaign(&e)
    }

    pub fn get_phase(e: Env) -> CampaignPhase {
        phase(&read_campaign(&e), e.ledger().timestamp())
    }
}

// Run one guarded transition and commit it. Nothing is written on rejection.
fn apply(e: &Env, caller: Option<&Address>, op: Op) -> Result<(Campaign, Outcome), CrowdfundError> {
    let creator = read_creator(e);
    let facts = Facts {
        caller_is_creator: caller == Some(&creator),
        now: e.ledger().timestamp(),
    };

    let (next, outcome) = transition(&read_campaign(e), op, facts)?;

    e.storage().instance().set(&DataKey::Campaign, &next);
    extend_instance(e);

    Ok((next, outcome))
}

fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_INSTANCE);
}

fn read_creator(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Creator)
        .unwrap_or_else(|| panic_with_error!(e, CrowdfundError::NotInitialized))
}

fn read_campaign(e: &Env) -> Campaign {
    e.storage()
        .instance()
        .get(&DataKey::Campaign)
        .unwrap_or(Campaign::uninitialized())
}
