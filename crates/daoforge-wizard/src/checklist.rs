use daoforge_types::checklist::ReviewChecklist;

/// Whether the publish action is enabled for a checklist. True iff every
/// section has been acknowledged; an empty checklist has nothing left to
/// acknowledge and allows publishing. Evaluated fresh at every check since
/// the checklist mutates underneath the review screen.
pub fn is_publish_allowed(checklist: &ReviewChecklist) -> bool {
    checklist.values().all(|acknowledged| acknowledged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use daoforge_types::checklist::ReviewSection;
    use daoforge_types::draft::{DraftDao, NetworkKind};

    fn full_checklist() -> ReviewChecklist {
        let draft = DraftDao::new(NetworkKind::Sepolia, "SN_SEPOLIA".to_string());
        let mut checklist = ReviewChecklist::for_draft(&draft);
        for section in checklist.sections().collect::<Vec<_>>() {
            checklist.acknowledge(section, true);
        }
        checklist
    }

    #[test]
    fn test_all_acknowledged_allows_publish() {
        assert!(is_publish_allowed(&full_checklist()));
    }

    #[test]
    fn test_any_unacknowledged_blocks_publish() {
        let mut checklist = full_checklist();
        checklist.acknowledge(ReviewSection::Governance, false);
        assert!(!is_publish_allowed(&checklist));
    }

    #[test]
    fn test_empty_checklist_is_vacuously_allowed() {
        assert!(is_publish_allowed(&ReviewChecklist::empty()));
    }
}
