// src/ui/views/landing.rs
use crate::app::messages::Message;
use crate::ui::component::CreateComponent;
use iced::widget::{Column, Row, Text, TextInput};
use iced::{Alignment, Color, Element, Length};

pub trait LandingView: CreateComponent {
    fn seed_phrase(&self) -> &str;

    fn landing_view(&self) -> Element<Message>
    where
        Self: Sized,
    {
        let title = Text::new("daoforge").size(35).style(Color::WHITE);

        let subtitle = Text::new("Assemble, review and deploy your DAO on Starknet.")
            .size(20)
            .style(Color::WHITE);

        let create_wallet_button = self.create_button("Create Wallet", Message::CreateWallet);

        let seed_input = TextInput::new(
            "Enter your 24 word recovery phrase",
            self.seed_phrase(),
        )
        .padding(10)
        .width(Length::Fixed(420.0))
        .on_input(Message::SeedPhraseChanged);

        let restore_button = self.create_button("Restore From Seed", Message::RestoreWallet);

        let restore_row = Row::new()
            .push(seed_input)
            .push(restore_button)
            .spacing(20)
            .align_items(Alignment::Center);

        let content = Column::new()
            .push(title)
            .push(subtitle)
            .push(create_wallet_button)
            .push(restore_row)
            .spacing(20)
            .align_items(Alignment::Center);

        self.create_centered_container(content.into())
    }
}
