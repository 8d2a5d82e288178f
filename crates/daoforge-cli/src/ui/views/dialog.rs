// src/ui/views/dialog.rs
use crate::app::messages::Message;
use crate::ui::component::CreateComponent;
use crate::ui::styles::button::PrimaryButtonStyle;
use crate::ui::styles::common::SectionStyle;
use daoforge_types::draft::DraftDao;
use iced::theme;
use iced::widget::{Button, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Alignment, Color, Element, Length,
};

/// The deployment confirmation dialog. The transaction flow it triggers
/// lives outside the wizard; this view only confirms intent and reports
/// dismissal.
pub trait DialogView: CreateComponent {
    fn draft(&self) -> &DraftDao;

    fn dialog_view(&self) -> Element<Message>
    where
        Self: Sized,
    {
        let draft = self.draft();

        let title = Text::new("Deploy your DAO").size(28).style(Color::WHITE);

        let name = if draft.name.is_empty() {
            "(unnamed DAO)".to_string()
        } else {
            draft.name.clone()
        };

        let summary = Container::new(
            Column::new()
                .push(Text::new(name).size(20).style(Color::WHITE))
                .push(
                    Text::new(format!(
                        "{} · {} · {} voting",
                        draft.blockchain.network,
                        draft.governance.membership,
                        draft.governance.voting
                    ))
                    .size(14),
                )
                .spacing(8)
                .align_items(Alignment::Center),
        )
        .padding(20)
        .width(Length::Fixed(460.0))
        .style(theme::Container::Custom(Box::new(SectionStyle)));

        let deploy_button = Button::new(
            Text::new("Deploy")
                .horizontal_alignment(Horizontal::Center)
                .vertical_alignment(Vertical::Center),
        )
        .width(Length::Fixed(160.0))
        .padding(14)
        .style(theme::Button::Custom(Box::new(PrimaryButtonStyle)))
        .on_press(Message::DeployConfirmed);

        let cancel_button = self.create_button("Cancel", Message::DialogClosed);

        let buttons = Row::new()
            .push(cancel_button)
            .push(deploy_button)
            .spacing(20)
            .align_items(Alignment::Center);

        let content = Column::new()
            .push(title)
            .push(summary)
            .push(buttons)
            .spacing(24)
            .align_items(Alignment::Center);

        self.create_centered_container(content.into())
    }
}
