use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The network a DAO is deployed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkKind {
    Mainnet,
    Sepolia,
    Devnet,
}

impl std::fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkKind::Mainnet => write!(f, "mainnet"),
            NetworkKind::Sepolia => write!(f, "sepolia"),
            NetworkKind::Devnet => write!(f, "devnet"),
        }
    }
}

/// Membership model selected on the governance step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipKind {
    TokenVoting,
    Multisig,
}

impl std::fmt::Display for MembershipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipKind::TokenVoting => write!(f, "token-voting"),
            MembershipKind::Multisig => write!(f, "multisig"),
        }
    }
}

/// How votes are executed. Gasless voting routes through an execution
/// committee, which adds a committee section to the review step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VotingKind {
    OnChain,
    Gasless,
}

impl std::fmt::Display for VotingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VotingKind::OnChain => write!(f, "onchain"),
            VotingKind::Gasless => write!(f, "gasless"),
        }
    }
}

/// Chain selection collected on the blockchain step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockchainSelection {
    pub network: NetworkKind,
    pub chain_id: String,
}

/// Governance parameters collected on the governance step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GovernanceSelection {
    pub membership: MembershipKind,
    pub voting: VotingKind,
    pub support_threshold_pct: u8,
    pub min_participation_pct: u8,
    pub min_duration_hours: u32,
}

/// Community parameters collected on the community step. Opaque to the
/// publish flow, rendered on the review screen only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommunitySelection {
    pub token_name: String,
    pub token_symbol: String,
    pub initial_holders: Vec<String>,
}

/// Execution committee, present only for gasless voting drafts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommitteeSelection {
    pub members: Vec<String>,
    pub min_approvals: u32,
}

/// The accumulated, not-yet-deployed configuration for a new DAO. Built
/// across the wizard steps and owned by the wizard session; the publish
/// flow reads it and the channel provisioner snapshots it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DraftDao {
    pub id: Uuid,
    pub name: String,
    pub summary: String,
    pub logo: Option<Vec<u8>>,
    pub blockchain: BlockchainSelection,
    pub governance: GovernanceSelection,
    pub community: CommunitySelection,
    pub committee: Option<CommitteeSelection>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub started_at: DateTime<Utc>,
}

impl DraftDao {
    /// Creates an empty draft for a new wizard session on the given network.
    pub fn new(network: NetworkKind, chain_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            summary: String::new(),
            logo: None,
            blockchain: BlockchainSelection { network, chain_id },
            governance: GovernanceSelection {
                membership: MembershipKind::TokenVoting,
                voting: VotingKind::OnChain,
                support_threshold_pct: 50,
                min_participation_pct: 15,
                min_duration_hours: 24,
            },
            community: CommunitySelection {
                token_name: String::new(),
                token_symbol: String::new(),
                initial_holders: Vec::new(),
            },
            committee: None,
            started_at: Utc::now(),
        }
    }

    /// True when gasless voting was selected, which makes the execution
    /// committee part of the review.
    pub fn uses_gasless_voting(&self) -> bool {
        self.governance.voting == VotingKind::Gasless
    }
}
