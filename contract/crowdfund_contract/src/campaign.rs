//! Campaign lifecycle as a pure transition function.
//!
//! Nothing here touches the host: the contract layer resolves the caller's
//! identity and the ledger time into [`Facts`], runs [`transition`], and only
//! commits the returned record when every guard has passed.
//!
//! ```text
//! Uninitialized ──create──► Active ──cancel──► Cancelled ──refund──► Closed
//!                             │                    │
//!                             └──claim / refund────┴──────────────► Closed
//! Cancelled / Closed ──create──► Active
//! Closed ──claim / refund──► Closed  (same raised-vs-goal guards)
//! ```

use crate::storage_types::{Campaign, CampaignPhase, CampaignStatus, CrowdfundError};

/// Host-supplied facts for a single call.
#[derive(Clone, Copy, Debug)]
pub struct Facts {
    pub caller_is_creator: bool,
    pub now: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op {
    Create { goal: u64, deadline: u64 },
    Contribute { amount: u64 },
    Claim,
    Refund,
    Cancel,
}

/// What an accepted transition did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Created,
    Contributed,
    Claimed,
    Refunded,
    Cancelled,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Created => "Campaign created!",
            Outcome::Contributed => "Contribution accepted!",
            Outcome::Claimed => "Funds claimed by creator!",
            Outcome::Refunded => "Refunds available!",
            Outcome::Cancelled => "Campaign cancelled by creator!",
        }
    }

    /// Event topic for this outcome.
    pub fn topic(&self) -> &'static str {
        match self {
            Outcome::Created => "created",
            Outcome::Contributed => "contributed",
            Outcome::Claimed => "claimed",
            Outcome::Refunded => "refunded",
            Outcome::Cancelled => "cancelled",
        }
    }
}

pub fn transition(
    campaign: &Campaign,
    op: Op,
    facts: Facts,
) -> Result<(Campaign, Outcome), CrowdfundError> {
    match op {
        Op::Create { goal, deadline } => create(campaign, goal, deadline, facts),
        Op::Contribute { amount } => contribute(campaign, amount, facts),
        Op::Claim => claim(campaign, facts),
        Op::Refund => refund(campaign, facts),
        Op::Cancel => cancel(campaign, facts),
    }
}

fn create(
    campaign: &Campaign,
    goal: u64,
    deadline: u64,
    facts: Facts,
) -> Result<(Campaign, Outcome), CrowdfundError> {
    if !facts.caller_is_creator {
        return Err(CrowdfundError::Unauthorized);
    }
    if campaign.is_active() {
        return Err(CrowdfundError::AlreadyActive);
    }
    if goal == 0 {
        return Err(CrowdfundError::InvalidGoal);
    }
    if deadline <= facts.now {
        return Err(CrowdfundError::InvalidDeadline);
    }

    let next = Campaign {
        goal,
        deadline,
        raised: 0,
        status: CampaignStatus::Active,
    };
    Ok((next, Outcome::Created))
}

fn contribute(
    campaign: &Campaign,
    amount: u64,
    facts: Facts,
) -> Result<(Campaign, Outcome), CrowdfundError> {
    if !campaign.is_active() {
        return Err(CrowdfundError::NotActive);
    }
    if facts.now >= campaign.deadline {
        return Err(CrowdfundError::DeadlinePassed);
    }
    if amount == 0 {
        return Err(CrowdfundError::InvalidAmount);
    }

    let raised = campaign
        .raised
        .checked_add(amount)
        .ok_or(CrowdfundError::ArithmeticError)?;
    let next = Campaign {
        raised,
        ..campaign.clone()
    };
    Ok((next, Outcome::Contributed))
}

fn claim(campaign: &Campaign, facts: Facts) -> Result<(Campaign, Outcome), CrowdfundError> {
    if !facts.caller_is_creator {
        return Err(CrowdfundError::Unauthorized);
    }
    require_campaign(campaign)?;
    if campaign.status == CampaignStatus::Cancelled {
        return Err(CrowdfundError::CampaignCancelled);
    }
    if facts.now < campaign.deadline {
        return Err(CrowdfundError::StillRunning);
    }
    if campaign.raised < campaign.goal {
        return Err(CrowdfundError::GoalNotReached);
    }

    Ok((closed(campaign), Outcome::Claimed))
}

fn refund(campaign: &Campaign, facts: Facts) -> Result<(Campaign, Outcome), CrowdfundError> {
    require_campaign(campaign)?;
    // A cancelled campaign is refundable before its deadline.
    if campaign.is_active() && facts.now < campaign.deadline {
        return Err(CrowdfundError::StillRunning);
    }
    if campaign.raised >= campaign.goal {
        return Err(CrowdfundError::GoalWasReached);
    }

    Ok((closed(campaign), Outcome::Refunded))
}

fn cancel(campaign: &Campaign, facts: Facts) -> Result<(Campaign, Outcome), CrowdfundError> {
    if !facts.caller_is_creator {
        return Err(CrowdfundError::Unauthorized);
    }
    if !campaign.is_active() {
        return Err(CrowdfundError::NotActive);
    }
    if facts.now >= campaign.deadline {
        return Err(CrowdfundError::DeadlinePassed);
    }

    let next = Campaign {
        status: CampaignStatus::Cancelled,
        ..campaign.clone()
    };
    Ok((next, Outcome::Cancelled))
}

// A closed campaign keeps its terms, so the settlement guards below still
// decide whether a repeated claim or refund is accepted.
fn require_campaign(campaign: &Campaign) -> Result<(), CrowdfundError> {
    if campaign.status == CampaignStatus::Uninitialized {
        return Err(CrowdfundError::NoCampaign);
    }
    Ok(())
}

fn closed(campaign: &Campaign) -> Campaign {
    Campaign {
        status: CampaignStatus::Closed,
        ..campaign.clone()
    }
}

/// Derive the observable phase at ledger time `now`.
pub fn phase(campaign: &Campaign, now: u64) -> CampaignPhase {
    match campaign.status {
        CampaignStatus::Uninitialized => CampaignPhase::Uninitialized,
        CampaignStatus::Cancelled => CampaignPhase::Cancelled,
        CampaignStatus::Closed => CampaignPhase::Closed,
        CampaignStatus::Active if now < campaign.deadline => CampaignPhase::Active,
        CampaignStatus::Active if campaign.raised >= campaign.goal => CampaignPhase::Successful,
        CampaignStatus::Active => CampaignPhase::Failed,
    }
}
