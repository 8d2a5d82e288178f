use daoforge_types::checklist::ReviewChecklist;
use daoforge_types::draft::DraftDao;

/// The shared form state of one wizard session. Constructed once, then
/// handed to each step to populate; the review step reads it whole.
#[derive(Clone, Debug)]
pub struct FormState {
    pub draft: DraftDao,
    pub checklist: ReviewChecklist,
}

impl FormState {
    /// Starts a session around a draft and mounts the matching checklist.
    pub fn new(draft: DraftDao) -> Self {
        let checklist = ReviewChecklist::for_draft(&draft);
        Self { draft, checklist }
    }

    /// Rebuilds the checklist after a structural draft change (e.g. the
    /// voting type toggling the committee section). Acknowledgements are
    /// reset; the user re-confirms against the new shape.
    pub fn rebuild_checklist(&mut self) {
        self.checklist = ReviewChecklist::for_draft(&self.draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daoforge_types::checklist::ReviewSection;
    use daoforge_types::draft::{NetworkKind, VotingKind};

    #[test]
    fn test_checklist_follows_voting_type() {
        let draft = DraftDao::new(NetworkKind::Sepolia, "SN_SEPOLIA".to_string());
        let mut form = FormState::new(draft);
        assert!(!form.checklist.contains(ReviewSection::Committee));

        form.draft.governance.voting = VotingKind::Gasless;
        form.rebuild_checklist();
        assert!(form.checklist.contains(ReviewSection::Committee));
    }
}
