use crate::app::messages::Message;
use iced::widget::Button;
use iced::Element;

pub trait CreateComponent {
    fn create_button<'a>(&self, label: &'a str, message: Message) -> Button<'a, Message>;

    fn create_centered_container<'a>(&self, content: Element<'a, Message>) -> Element<'a, Message>;
}
