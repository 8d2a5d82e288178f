// src/app/messages.rs
use crate::types::enums::View;
use daoforge_types::checklist::ReviewSection;
use daoforge_wizard::event::ModalId;

#[derive(Clone, Debug)]
pub enum Message {
    CreateWallet,
    RestoreWallet,
    SeedPhraseChanged(String),
    NavigateTo(View),
    DaoNameChanged(String),
    DaoSummaryChanged(String),
    SectionAcknowledged(ReviewSection, bool),
    PublishClicked,
    RevealValidationErrors,
    ModalDismissed(ModalId),
    DialogClosed,
    DeployConfirmed,
    Noop,
}
