use soroban_sdk::{Address, Env};

use crate::storage_types::*;
use crate::utils::{checked_add, extend_instance, extend_persistent};

/// Platform owner bound at initialization
pub fn read_owner(env: &Env) -> Result<Address, CharityError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(CharityError::NotInitialized)
}

/// Returns the counter's current value and advances it by one.
pub fn take_next_id(env: &Env, key: &DataKey) -> Result<u64, CharityError> {
    let id: u64 = env
        .storage()
        .instance()
        .get(key)
        .ok_or(CharityError::NotInitialized)?;
    let next = id.checked_add(1).ok_or(CharityError::ArithmeticError)?;
    env.storage().instance().set(key, &next);
    Ok(id)
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, CharityError> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
        .ok_or(CharityError::NotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn load_donation(env: &Env, donation_id: DonationId) -> Result<Donation, CharityError> {
    env.storage()
        .persistent()
        .get(&DataKey::Donation(donation_id))
        .ok_or(CharityError::NotFound)
}

pub fn save_donation(env: &Env, donation: &Donation) {
    let key = DataKey::Donation(donation.id);
    env.storage().persistent().set(&key, donation);
    extend_persistent(env, &key);
}

pub fn load_donor_history(env: &Env, donor: &Address) -> Option<DonorHistory> {
    env.storage()
        .persistent()
        .get(&DataKey::DonorHistory(donor.clone()))
}

/// Lifetime totals after one more donation of `amount`. Pure; the caller persists it.
pub fn fold_donation(history: &DonorHistory, amount: i128) -> Result<DonorHistory, CharityError> {
    Ok(DonorHistory {
        total_donated: checked_add(history.total_donated, amount)?,
        campaigns_supported: history
            .campaigns_supported
            .checked_add(1)
            .ok_or(CharityError::ArithmeticError)?,
        largest_donation: history.largest_donation.max(amount),
    })
}

pub fn save_donor_history(env: &Env, donor: &Address, history: &DonorHistory) {
    let key = DataKey::DonorHistory(donor.clone());
    env.storage().persistent().set(&key, history);
    extend_persistent(env, &key);
}

pub fn increment_total_campaigns(env: &Env) -> Result<u64, CharityError> {
    let total: u64 = env
        .storage()
        .instance()
        .get(&DataKey::TotalCampaigns)
        .unwrap_or(0);
    let total = total.checked_add(1).ok_or(CharityError::ArithmeticError)?;
    env.storage().instance().set(&DataKey::TotalCampaigns, &total);
    extend_instance(env);
    Ok(total)
}

pub fn write_total_donations(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalDonations, &total);
    extend_instance(env);
}

pub fn read_platform_stats(env: &Env) -> PlatformStats {
    PlatformStats {
        total_donations: env
            .storage()
            .instance()
            .get(&DataKey::TotalDonations)
            .unwrap_or(0),
        total_campaigns: env
            .storage()
            .instance()
            .get(&DataKey::TotalCampaigns)
            .unwrap_or(0),
    }
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), CharityError> {
    if read_owner(env)? != *caller {
        return Err(CharityError::OwnerOnly);
    }
    Ok(())
}

pub fn require_charity(campaign: &Campaign, caller: &Address) -> Result<(), CharityError> {
    if campaign.charity != *caller {
        return Err(CharityError::Unauthorized);
    }
    Ok(())
}

/// Funds unlock once the campaign is ended or its deadline has been reached.
pub fn can_withdraw(campaign: &Campaign, now: u32) -> bool {
    !campaign.is_active || now >= campaign.deadline
}

/// Donations are accepted only while raised is still below goal; the check
/// runs before the new amount is added, so the final donation may overshoot.
pub fn accepts_donations(campaign: &Campaign) -> bool {
    campaign.raised_amount < campaign.goal_amount
}
