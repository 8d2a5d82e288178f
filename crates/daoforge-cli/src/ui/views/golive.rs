// src/ui/views/golive.rs
use crate::app::messages::Message;
use crate::types::enums::View;
use crate::ui::component::CreateComponent;
use crate::ui::styles::button::{MutedButtonStyle, PrimaryButtonStyle};
use crate::ui::styles::common::{InfoBannerStyle, SectionStyle};
use daoforge_types::checklist::ReviewSection;
use daoforge_wizard::checklist::is_publish_allowed;
use daoforge_wizard::form::FormState;
use iced::theme;
use iced::widget::{Button, Checkbox, Column, Container, Row, Scrollable, Text, TextInput};
use iced::{
    alignment::{Horizontal, Vertical},
    Alignment, Color, Element, Length,
};

pub trait GoLiveView: CreateComponent {
    fn form_state(&self) -> &FormState;
    fn checklist_errors_visible(&self) -> bool;

    fn golive_view(&self) -> Element<Message>
    where
        Self: Sized,
    {
        let form = self.form_state();

        let title = Text::new("Go Live").size(32).style(Color::WHITE);
        let subtitle = Text::new("Review each section and confirm it before deploying.")
            .size(18)
            .style(Color::from_rgb(0.7, 0.7, 0.75));

        let sections = form
            .checklist
            .sections()
            .fold(Column::new().spacing(14), |column, section| {
                column.push(self.review_section(section))
            });

        let banner = Container::new(
            Text::new("Once live, members receive updates through the DAO's notification channel.")
                .size(14),
        )
        .padding(12)
        .width(Length::Fixed(560.0))
        .style(theme::Container::Custom(Box::new(InfoBannerStyle)));

        let mut content = Column::new()
            .push(title)
            .push(subtitle)
            .push(sections)
            .push(banner)
            .spacing(20)
            .padding(30)
            .align_items(Alignment::Center);

        let missing = form.checklist.missing();
        if self.checklist_errors_visible() && !missing.is_empty() {
            let list = missing
                .iter()
                .map(|section| section.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            content = content.push(
                Text::new(format!("Still unconfirmed: {}", list))
                    .size(14)
                    .style(Color::from_rgb(1.0, 0.4, 0.4)),
            );
        }

        let footer = Row::new()
            .push(self.create_button(
                "Activity Feed",
                Message::NavigateTo(View::Activity),
            ))
            .push(self.publish_button())
            .spacing(20)
            .align_items(Alignment::Center);

        content = content.push(footer);

        self.create_centered_container(Scrollable::new(content).into())
    }

    /// The publish button is disabled for direct activation while the
    /// checklist is incomplete; pressing it then reveals what is missing
    /// instead of publishing.
    fn publish_button(&self) -> Button<'static, Message>
    where
        Self: Sized,
    {
        let label = Text::new("Publish your DAO")
            .horizontal_alignment(Horizontal::Center)
            .vertical_alignment(Vertical::Center);

        let button = Button::new(label).width(Length::Fixed(220.0)).padding(14);

        if is_publish_allowed(&self.form_state().checklist) {
            button
                .style(theme::Button::Custom(Box::new(PrimaryButtonStyle)))
                .on_press(Message::PublishClicked)
        } else {
            button
                .style(theme::Button::Custom(Box::new(MutedButtonStyle)))
                .on_press(Message::RevealValidationErrors)
        }
    }

    fn review_section(&self, section: ReviewSection) -> Element<Message>
    where
        Self: Sized,
    {
        let form = self.form_state();
        let draft = &form.draft;

        let details: Element<Message> = match section {
            ReviewSection::Blockchain => Column::new()
                .push(detail_row("Network", draft.blockchain.network.to_string()))
                .push(detail_row("Chain ID", draft.blockchain.chain_id.clone()))
                .spacing(6)
                .into(),
            ReviewSection::DaoMetadata => {
                let name_input = TextInput::new("DAO name", &draft.name)
                    .padding(10)
                    .width(Length::Fixed(320.0))
                    .on_input(Message::DaoNameChanged);

                let summary_input = TextInput::new("One sentence summary", &draft.summary)
                    .padding(10)
                    .width(Length::Fixed(320.0))
                    .on_input(Message::DaoSummaryChanged);

                let logo_state = if draft.logo.is_some() {
                    "uploaded"
                } else {
                    "none"
                };

                Column::new()
                    .push(name_input)
                    .push(summary_input)
                    .push(detail_row("Logo", logo_state.to_string()))
                    .spacing(6)
                    .into()
            }
            ReviewSection::Community => Column::new()
                .push(detail_row(
                    "Token",
                    format!(
                        "{} ({})",
                        draft.community.token_name, draft.community.token_symbol
                    ),
                ))
                .push(detail_row(
                    "Initial holders",
                    draft.community.initial_holders.len().to_string(),
                ))
                .spacing(6)
                .into(),
            ReviewSection::Governance => Column::new()
                .push(detail_row(
                    "Membership",
                    draft.governance.membership.to_string(),
                ))
                .push(detail_row("Voting", draft.governance.voting.to_string()))
                .push(detail_row(
                    "Support threshold",
                    format!("{}%", draft.governance.support_threshold_pct),
                ))
                .push(detail_row(
                    "Min participation",
                    format!("{}%", draft.governance.min_participation_pct),
                ))
                .push(detail_row(
                    "Min duration",
                    format!("{}h", draft.governance.min_duration_hours),
                ))
                .spacing(6)
                .into(),
            ReviewSection::Committee => {
                let committee = draft.committee.as_ref();
                Column::new()
                    .push(detail_row(
                        "Members",
                        committee.map(|c| c.members.len()).unwrap_or(0).to_string(),
                    ))
                    .push(detail_row(
                        "Min approvals",
                        committee.map(|c| c.min_approvals).unwrap_or(0).to_string(),
                    ))
                    .spacing(6)
                    .into()
            }
        };

        let confirm = Checkbox::new(
            format!("I confirm the {} section", section),
            form.checklist.is_acknowledged(section),
            move |checked| Message::SectionAcknowledged(section, checked),
        )
        .size(18)
        .text_size(14);

        Container::new(
            Column::new()
                .push(Text::new(section.to_string()).size(20).style(Color::WHITE))
                .push(details)
                .push(confirm)
                .spacing(12),
        )
        .padding(16)
        .width(Length::Fixed(560.0))
        .style(theme::Container::Custom(Box::new(SectionStyle)))
        .into()
    }
}

fn detail_row(label: &str, value: String) -> Row<'static, Message> {
    Row::new()
        .push(
            Text::new(label.to_string())
                .size(14)
                .width(Length::Fixed(140.0))
                .style(Color::from_rgb(0.6, 0.6, 0.65)),
        )
        .push(Text::new(value).size(14).style(Color::WHITE))
        .spacing(10)
}
