// src/ui/views/activity.rs
use crate::app::messages::Message;
use crate::types::enums::View;
use crate::ui::component::CreateComponent;
use chrono::Local;
use daoforge_logging::logger::{LogLevel, LoggerHandle};
use futures::executor;
use iced::widget::{Column, Scrollable, Text};
use iced::{Alignment, Color, Element, Length};

pub trait ActivityView: CreateComponent {
    fn logger(&self) -> &LoggerHandle;

    fn activity_view(&self) -> Element<Message>
    where
        Self: Sized,
    {
        let title = Text::new("Activity").size(28).style(Color::WHITE);

        let logs = executor::block_on(async {
            match self.logger().lock().await.as_ref() {
                Some(logger) => logger.get_logs().await,
                None => Vec::new(),
            }
        });

        let logs_list = logs
            .into_iter()
            .fold(Column::new().spacing(10), |column, entry| {
                column.push(
                    Text::new(format!(
                        "[{}] {:?}: {}",
                        entry
                            .timestamp
                            .with_timezone(&Local)
                            .format("%Y-%m-%d %H:%M:%S"),
                        entry.level,
                        entry.message
                    ))
                    .size(14)
                    .style(match entry.level {
                        LogLevel::Error => Color::from_rgb(1.0, 0.4, 0.4),
                        LogLevel::Warning => Color::from_rgb(1.0, 0.8, 0.2),
                        _ => Color::WHITE,
                    }),
                )
            });

        let scrollable_logs = Scrollable::new(logs_list)
            .height(Length::Fill)
            .width(Length::Fill);

        let back_button = self.create_button("Back", Message::NavigateTo(View::GoLive));

        let content = Column::new()
            .push(title)
            .push(scrollable_logs)
            .push(back_button)
            .spacing(20)
            .align_items(Alignment::Center);

        self.create_centered_container(content.into())
    }
}
