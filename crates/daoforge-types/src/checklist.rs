use crate::draft::DraftDao;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier for one section of the review screen. Each section carries
/// exactly one acknowledgement checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReviewSection {
    Blockchain,
    DaoMetadata,
    Community,
    Governance,
    Committee,
}

impl std::fmt::Display for ReviewSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewSection::Blockchain => write!(f, "Blockchain"),
            ReviewSection::DaoMetadata => write!(f, "DAO Metadata"),
            ReviewSection::Community => write!(f, "Community"),
            ReviewSection::Governance => write!(f, "Governance"),
            ReviewSection::Committee => write!(f, "Execution Committee"),
        }
    }
}

/// Acknowledgement state of the review checklist, keyed by section.
/// Created when the review step mounts, mutated by user interaction and
/// read-only to the publish flow.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReviewChecklist {
    entries: BTreeMap<ReviewSection, bool>,
}

impl ReviewChecklist {
    /// An empty checklist with no sections.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the checklist matching a draft. The committee entry exists
    /// only when the draft uses gasless voting.
    pub fn for_draft(draft: &DraftDao) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(ReviewSection::Blockchain, false);
        entries.insert(ReviewSection::DaoMetadata, false);
        entries.insert(ReviewSection::Community, false);
        entries.insert(ReviewSection::Governance, false);
        if draft.uses_gasless_voting() {
            entries.insert(ReviewSection::Committee, false);
        }
        Self { entries }
    }

    /// Records the acknowledgement state for a section. Sections not part
    /// of this checklist are ignored.
    pub fn acknowledge(&mut self, section: ReviewSection, acknowledged: bool) {
        if let Some(entry) = self.entries.get_mut(&section) {
            *entry = acknowledged;
        }
    }

    pub fn is_acknowledged(&self, section: ReviewSection) -> bool {
        self.entries.get(&section).copied().unwrap_or(false)
    }

    pub fn contains(&self, section: ReviewSection) -> bool {
        self.entries.contains_key(&section)
    }

    /// Iterates over the acknowledgement values of every section.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.entries.values().copied()
    }

    /// Iterates over the sections in display order.
    pub fn sections(&self) -> impl Iterator<Item = ReviewSection> + '_ {
        self.entries.keys().copied()
    }

    /// The sections still missing an acknowledgement, in display order.
    pub fn missing(&self) -> Vec<ReviewSection> {
        self.entries
            .iter()
            .filter(|(_, acknowledged)| !**acknowledged)
            .map(|(section, _)| *section)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{NetworkKind, VotingKind};

    #[test]
    fn test_checklist_tracks_draft_sections() {
        let draft = DraftDao::new(NetworkKind::Sepolia, "SN_SEPOLIA".to_string());
        let checklist = ReviewChecklist::for_draft(&draft);

        assert!(checklist.contains(ReviewSection::Blockchain));
        assert!(checklist.contains(ReviewSection::Governance));
        assert!(!checklist.contains(ReviewSection::Committee));
        assert_eq!(checklist.missing().len(), 4);
    }

    #[test]
    fn test_gasless_draft_adds_committee_entry() {
        let mut draft = DraftDao::new(NetworkKind::Sepolia, "SN_SEPOLIA".to_string());
        draft.governance.voting = VotingKind::Gasless;

        let checklist = ReviewChecklist::for_draft(&draft);
        assert!(checklist.contains(ReviewSection::Committee));
        assert_eq!(checklist.missing().len(), 5);
    }

    #[test]
    fn test_acknowledge_updates_missing() {
        let draft = DraftDao::new(NetworkKind::Sepolia, "SN_SEPOLIA".to_string());
        let mut checklist = ReviewChecklist::for_draft(&draft);

        checklist.acknowledge(ReviewSection::Blockchain, true);
        checklist.acknowledge(ReviewSection::DaoMetadata, true);

        assert!(checklist.is_acknowledged(ReviewSection::Blockchain));
        assert_eq!(
            checklist.missing(),
            vec![ReviewSection::Community, ReviewSection::Governance]
        );
    }

    #[test]
    fn test_acknowledge_unknown_section_is_ignored() {
        let draft = DraftDao::new(NetworkKind::Sepolia, "SN_SEPOLIA".to_string());
        let mut checklist = ReviewChecklist::for_draft(&draft);

        checklist.acknowledge(ReviewSection::Committee, true);
        assert!(!checklist.contains(ReviewSection::Committee));
    }
}
