use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::campaign::Outcome;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub goal: u64,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ContributionEvent {
    pub contributor: Address,
    pub amount: u64,
    pub raised: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FundsClaimedEvent {
    pub creator: Address,
    pub raised: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RefundsOpenedEvent {
    pub raised: u64,
    pub goal: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCancelledEvent {
    pub raised: u64,
}

fn topics(env: &Env, outcome: Outcome) -> (Symbol, Symbol) {
    (Symbol::new(env, "campaign"), Symbol::new(env, outcome.topic()))
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(topics(env, Outcome::Created), event);
}

pub fn emit_contribution(env: &Env, event: ContributionEvent) {
    env.events().publish(topics(env, Outcome::Contributed), event);
}

pub fn emit_funds_claimed(env: &Env, event: FundsClaimedEvent) {
    env.events().publish(topics(env, Outcome::Claimed), event);
}

pub fn emit_refunds_opened(env: &Env, event: RefundsOpenedEvent) {
    env.events().publish(topics(env, Outcome::Refunded), event);
}

pub fn emit_campaign_cancelled(env: &Env, event: CampaignCancelledEvent) {
    env.events().publish(topics(env, Outcome::Cancelled), event);
}
