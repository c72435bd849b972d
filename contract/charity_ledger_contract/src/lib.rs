#![no_std]

mod campaign;
mod events;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use storage_types::*;

#[contract]
pub struct CharityLedgerContract;

#[contractimpl]
impl CharityLedgerContract {
    /// Bind the platform owner and reset all counters. Callable once.
    pub fn initialize(env: Env, owner: Address) -> Result<(), CharityError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(CharityError::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::NextCampaignId, &1u64);
        env.storage().instance().set(&DataKey::NextDonationId, &1u64);
        env.storage().instance().set(&DataKey::TotalCampaigns, &0u64);
        env.storage().instance().set(&DataKey::TotalDonations, &0i128);
        utils::extend_instance(&env);

        events::emit_initialized(&env, events::InitializedEvent { owner });

        Ok(())
    }

    /// Open a new campaign owned by `caller`
    pub fn create_campaign(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        goal_amount: i128,
        beneficiary: Address,
        deadline: u32,
        category: String,
    ) -> Result<CampaignId, CharityError> {
        caller.require_auth();

        utils::validate_amount(goal_amount)?;
        let now = utils::current_ledger(&env);
        if deadline <= now {
            return Err(CharityError::InvalidAmount);
        }
        utils::validate_text(&title, MAX_TITLE_LEN)?;
        utils::validate_text(&description, MAX_DESCRIPTION_LEN)?;
        utils::validate_text(&category, MAX_CATEGORY_LEN)?;

        let campaign_id = campaign::take_next_id(&env, &DataKey::NextCampaignId)?;

        let record = Campaign {
            id: campaign_id,
            charity: caller.clone(),
            title,
            description,
            goal_amount,
            raised_amount: 0,
            beneficiary,
            deadline,
            category,
            is_active: true,
            is_verified: false,
            created_at: now,
        };

        campaign::save_campaign(&env, &record);
        campaign::increment_total_campaigns(&env)?;

        log!(&env, "campaign created", campaign_id, goal_amount, deadline);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                charity: caller,
                goal_amount,
                deadline,
            },
        );

        Ok(campaign_id)
    }

    /// Record a donation from `caller` to an active campaign that has not yet met its goal
    pub fn donate(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        amount: i128,
        anonymous: bool,
        message: String,
    ) -> Result<DonationId, CharityError> {
        caller.require_auth();

        let mut record = campaign::load_campaign(&env, campaign_id)?;
        if !record.is_active {
            return Err(CharityError::Unauthorized);
        }
        utils::validate_amount(amount)?;
        if !campaign::accepts_donations(&record) {
            return Err(CharityError::GoalReached);
        }
        utils::validate_text(&message, MAX_MESSAGE_LEN)?;

        // Compute every new total before touching storage
        let raised_amount = utils::checked_add(record.raised_amount, amount)?;
        let history = campaign::load_donor_history(&env, &caller).unwrap_or_default();
        let history = campaign::fold_donation(&history, amount)?;
        let total_donations =
            utils::checked_add(campaign::read_platform_stats(&env).total_donations, amount)?;

        let donation_id = campaign::take_next_id(&env, &DataKey::NextDonationId)?;

        let donation = Donation {
            id: donation_id,
            campaign_id,
            donor: caller.clone(),
            amount,
            anonymous,
            message,
            timestamp: utils::current_ledger(&env),
        };
        campaign::save_donation(&env, &donation);

        record.raised_amount = raised_amount;
        campaign::save_campaign(&env, &record);
        campaign::save_donor_history(&env, &caller, &history);
        campaign::write_total_donations(&env, total_donations);

        log!(&env, "donation recorded", campaign_id, donation_id, amount);

        events::emit_donation_made(
            &env,
            events::DonationMadeEvent {
                campaign_id,
                donation_id,
                amount,
                donor: if anonymous { None } else { Some(caller) },
            },
        );

        Ok(donation_id)
    }

    /// Mark a campaign as verified. Platform owner only; repeat calls succeed.
    pub fn verify_campaign(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
    ) -> Result<(), CharityError> {
        caller.require_auth();
        campaign::require_owner(&env, &caller)?;

        let mut record = campaign::load_campaign(&env, campaign_id)?;
        record.is_verified = true;
        campaign::save_campaign(&env, &record);

        events::emit_campaign_verified(&env, events::CampaignVerifiedEvent { campaign_id });

        Ok(())
    }

    /// Close a campaign to further donations
    pub fn end_campaign(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
    ) -> Result<(), CharityError> {
        caller.require_auth();

        let mut record = campaign::load_campaign(&env, campaign_id)?;
        campaign::require_charity(&record, &caller)?;
        if !record.is_active {
            return Err(CharityError::Unauthorized);
        }

        record.is_active = false;
        campaign::save_campaign(&env, &record);

        log!(&env, "campaign ended", campaign_id, record.raised_amount);

        events::emit_campaign_ended(&env, events::CampaignEndedEvent { campaign_id });

        Ok(())
    }

    /// Push the deadline later. Deadlines never move backwards.
    pub fn extend_campaign(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        new_deadline: u32,
    ) -> Result<(), CharityError> {
        caller.require_auth();

        let mut record = campaign::load_campaign(&env, campaign_id)?;
        campaign::require_charity(&record, &caller)?;
        if new_deadline <= record.deadline {
            return Err(CharityError::InvalidAmount);
        }

        record.deadline = new_deadline;
        campaign::save_campaign(&env, &record);

        log!(&env, "campaign extended", campaign_id, new_deadline);

        events::emit_campaign_extended(
            &env,
            events::CampaignExtendedEvent {
                campaign_id,
                new_deadline,
            },
        );

        Ok(())
    }

    /// Replace the goal. It may be set below the amount already raised.
    pub fn update_campaign_goal(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        new_goal: i128,
    ) -> Result<(), CharityError> {
        caller.require_auth();

        let mut record = campaign::load_campaign(&env, campaign_id)?;
        campaign::require_charity(&record, &caller)?;
        utils::validate_amount(new_goal)?;

        record.goal_amount = new_goal;
        campaign::save_campaign(&env, &record);

        events::emit_campaign_goal_updated(
            &env,
            events::CampaignGoalUpdatedEvent {
                campaign_id,
                new_goal,
            },
        );

        Ok(())
    }

    /// Zero the raised amount and report it for payout to the beneficiary.
    ///
    /// Allowed once the campaign has ended or its deadline has been reached.
    /// The transfer itself happens outside this contract; listeners act on the
    /// `funds_withdrawn` event. A second call returns 0.
    pub fn withdraw_funds(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
    ) -> Result<i128, CharityError> {
        caller.require_auth();

        let mut record = campaign::load_campaign(&env, campaign_id)?;
        campaign::require_charity(&record, &caller)?;
        if !campaign::can_withdraw(&record, utils::current_ledger(&env)) {
            return Err(CharityError::Unauthorized);
        }

        let amount = record.raised_amount;
        record.raised_amount = 0;
        campaign::save_campaign(&env, &record);

        log!(&env, "funds withdrawn", campaign_id, amount);

        events::emit_funds_withdrawn(
            &env,
            events::FundsWithdrawnEvent {
                campaign_id,
                amount,
                beneficiary: record.beneficiary,
            },
        );

        Ok(amount)
    }

    /// View functions
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, CharityError> {
        campaign::load_campaign(&env, campaign_id)
    }

    /// Donor is returned even for anonymous donations; public views must hide it.
    pub fn get_donation(env: Env, donation_id: DonationId) -> Result<Donation, CharityError> {
        campaign::load_donation(&env, donation_id)
    }

    pub fn get_donor_stats(env: Env, donor: Address) -> Option<DonorHistory> {
        campaign::load_donor_history(&env, &donor)
    }

    pub fn get_platform_stats(env: Env) -> PlatformStats {
        campaign::read_platform_stats(&env)
    }

    pub fn get_campaign_progress(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<CampaignProgress, CharityError> {
        let record = campaign::load_campaign(&env, campaign_id)?;
        Ok(CampaignProgress {
            raised: record.raised_amount,
            goal: record.goal_amount,
            percentage: utils::calculate_percentage(record.raised_amount, record.goal_amount),
        })
    }

    pub fn is_campaign_successful(env: Env, campaign_id: CampaignId) -> Result<bool, CharityError> {
        let record = campaign::load_campaign(&env, campaign_id)?;
        Ok(record.raised_amount >= record.goal_amount)
    }

    pub fn get_owner(env: Env) -> Result<Address, CharityError> {
        campaign::read_owner(&env)
    }
}
