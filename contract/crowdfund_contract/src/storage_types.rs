use soroban_sdk::{contracterror, contracttype};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Creator,
    Campaign,
}

// Stored campaign status
#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Uninitialized,
    Active,
    Cancelled, // Closed by the creator before the deadline
    Closed,    // Settled through claim or refund
}

// Phase as observed at a given ledger time
#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum CampaignPhase {
    Uninitialized,
    Active,
    Cancelled,
    Successful, // Deadline passed, goal met, not yet claimed
    Failed,     // Deadline passed, goal missed, not yet refunded
    Closed,
}

/// The singleton campaign record.
///
/// `goal == 0` only while no campaign has ever been created; once set it is
/// never reset. Re-arming after settlement overwrites every field.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub goal: u64,
    pub deadline: u64,
    pub raised: u64,
    pub status: CampaignStatus,
}

impl Campaign {
    pub const fn uninitialized() -> Self {
        Campaign {
            goal: 0,
            deadline: 0,
            raised: 0,
            status: CampaignStatus::Uninitialized,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    Unauthorized = 1,
    AlreadyActive = 2,
    InvalidGoal = 3,
    InvalidAmount = 4,
    InvalidDeadline = 5,
    NotActive = 6,
    DeadlinePassed = 7,
    StillRunning = 8,
    GoalNotReached = 9,
    GoalWasReached = 10,
    NoCampaign = 11,
    CampaignCancelled = 12,
    ArithmeticError = 13,
    NotInitialized = 14,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_THRESHOLD: u32 = 17280 * 7; // 7 days
