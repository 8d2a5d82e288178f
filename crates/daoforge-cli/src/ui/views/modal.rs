// src/ui/views/modal.rs
use crate::app::messages::Message;
use crate::ui::component::CreateComponent;
use crate::ui::styles::common::SectionStyle;
use daoforge_wizard::event::ModalId;
use iced::theme;
use iced::widget::{Column, Container, Text};
use iced::{Alignment, Color, Element, Length};

/// Interrupt modals raised when wallet preconditions block publishing.
/// They only inform and dismiss; publishing is never retried on the
/// user's behalf.
pub trait ModalView: CreateComponent {
    fn modal_view(&self, modal: ModalId) -> Element<Message>
    where
        Self: Sized,
    {
        let (title, body) = match modal {
            ModalId::Wallet => (
                "Connect your wallet",
                "A connected wallet is required to deploy this DAO. \
                 Connect one, then publish again.",
            ),
            ModalId::Network => (
                "Switch network",
                "Your wallet session is on a different network than the one \
                 selected for this DAO. Switch networks, then publish again.",
            ),
        };

        let warning = Container::new(
            Column::new()
                .push(Text::new(title).size(24).style(Color::WHITE))
                .push(Text::new(body).size(16))
                .spacing(12)
                .align_items(Alignment::Center),
        )
        .padding(24)
        .width(Length::Fixed(460.0))
        .style(theme::Container::Custom(Box::new(SectionStyle)));

        let content = Column::new()
            .push(warning)
            .push(self.create_button("Okay", Message::ModalDismissed(modal)))
            .spacing(20)
            .align_items(Alignment::Center);

        self.create_centered_container(content.into())
    }
}
