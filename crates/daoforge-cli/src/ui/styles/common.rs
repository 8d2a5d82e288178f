use iced::{
    theme::Theme,
    widget::container,
    Background, Color,
};

use iced::widget::container::StyleSheet as ContainerStyleSheet;

/// Stylesheet for the review section cards and modal bodies.
#[derive(Debug, Clone, Copy)]
pub struct SectionStyle;

impl ContainerStyleSheet for SectionStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(Color::from_rgb(0.15, 0.15, 0.18))),
            border_radius: 2.0.into(),
            border_width: 1.0,
            border_color: Color::from_rgb(0.12, 0.13, 0.15),
            text_color: Some(Color::from_rgb(0.9, 0.9, 0.95)),
            ..Default::default()
        }
    }
}

/// Stylesheet for the informational banner under the review sections.
#[derive(Debug, Clone, Copy)]
pub struct InfoBannerStyle;

impl ContainerStyleSheet for InfoBannerStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(Color::from_rgb(0.12, 0.17, 0.26))),
            border_radius: 2.0.into(),
            border_width: 1.0,
            border_color: Color::from_rgb(0.2, 0.32, 0.5),
            text_color: Some(Color::from_rgb(0.8, 0.88, 1.0)),
            ..Default::default()
        }
    }
}
