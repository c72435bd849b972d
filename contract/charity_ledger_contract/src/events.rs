use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::{CampaignId, DonationId};

#[contracttype]
#[derive(Clone)]
pub struct InitializedEvent {
    pub owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub charity: Address,
    pub goal_amount: i128,
    pub deadline: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct DonationMadeEvent {
    pub campaign_id: CampaignId,
    pub donation_id: DonationId,
    pub amount: i128,
    pub donor: Option<Address>, // None for anonymous donations
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignVerifiedEvent {
    pub campaign_id: CampaignId,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignEndedEvent {
    pub campaign_id: CampaignId,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignExtendedEvent {
    pub campaign_id: CampaignId,
    pub new_deadline: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignGoalUpdatedEvent {
    pub campaign_id: CampaignId,
    pub new_goal: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct FundsWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub amount: i128,
    pub beneficiary: Address,
}

pub fn emit_initialized(env: &Env, event: InitializedEvent) {
    env.events().publish((Symbol::new(env, "initialized"),), event);
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_donation_made(env: &Env, event: DonationMadeEvent) {
    env.events().publish((Symbol::new(env, "donation_made"),), event);
}

pub fn emit_campaign_verified(env: &Env, event: CampaignVerifiedEvent) {
    env.events().publish((Symbol::new(env, "campaign_verified"),), event);
}

pub fn emit_campaign_ended(env: &Env, event: CampaignEndedEvent) {
    env.events().publish((Symbol::new(env, "campaign_ended"),), event);
}

pub fn emit_campaign_extended(env: &Env, event: CampaignExtendedEvent) {
    env.events().publish((Symbol::new(env, "campaign_extended"),), event);
}

pub fn emit_campaign_goal_updated(env: &Env, event: CampaignGoalUpdatedEvent) {
    env.events().publish((Symbol::new(env, "campaign_goal_updated"),), event);
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawnEvent) {
    env.events().publish((Symbol::new(env, "funds_withdrawn"),), event);
}
