use soroban_sdk::{contracterror, contracttype, Address, BytesN, String};

pub type CampaignId = u64;
pub type DonationId = u64;
pub type AllocationId = u32;

// Instance keys hold configuration and counters; persistent keys hold entities
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    NextCampaignId,
    NextDonationId,
    TotalCampaigns,
    TotalDonations,
    Campaign(CampaignId),
    Donation(DonationId),
    DonorHistory(Address),
    Allocation(CampaignId, AllocationId),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub charity: Address,
    pub title: String,
    pub description: String,
    pub goal_amount: i128,
    pub raised_amount: i128,
    pub beneficiary: Address,
    pub deadline: u32,          // Ledger sequence
    pub category: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: u32,        // Ledger sequence
}

/// A single contribution. Never mutated once written.
///
/// `anonymous` is a display hint for consumers; the donor is always stored.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Donation {
    pub id: DonationId,
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub amount: i128,
    pub anonymous: bool,
    pub message: String,
    pub timestamp: u32,
}

/// Lifetime totals for one donor address.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct DonorHistory {
    pub total_donated: i128,
    pub campaigns_supported: u32,   // One per donation, repeat donations included
    pub largest_donation: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PlatformStats {
    pub total_donations: i128,
    pub total_campaigns: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignProgress {
    pub raised: i128,
    pub goal: i128,
    pub percentage: i128,
}

// Reserved for milestone tracking; nothing reads or writes it yet
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FundAllocation {
    pub purpose: String,
    pub amount: i128,
    pub recipient: Address,
    pub timestamp: u32,
    pub proof_hash: BytesN<32>,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CharityError {
    OwnerOnly = 1,
    NotFound = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    GoalReached = 5,
    AlreadyInitialized = 6,
    NotInitialized = 7,
    TextTooLong = 8,
    ArithmeticError = 9,
}

// Text limits, in characters
pub const MAX_TITLE_LEN: u32 = 128;
pub const MAX_DESCRIPTION_LEN: u32 = 512;
pub const MAX_CATEGORY_LEN: u32 = 32;
pub const MAX_MESSAGE_LEN: u32 = 256;

// Longest encoding of the largest limit
pub const MAX_TEXT_BYTES: usize = MAX_DESCRIPTION_LEN as usize * 4;

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
