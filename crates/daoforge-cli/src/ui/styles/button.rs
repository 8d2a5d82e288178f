// src/ui/styles/button.rs
use iced::{
    theme::Theme,
    widget::button,
    Color, Vector,
};

pub struct OutlinedButtonStyle;

impl button::StyleSheet for OutlinedButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            shadow_offset: Vector::default(),
            background: Some(Color::TRANSPARENT.into()),
            border_radius: 4.0.into(),
            border_width: 1.0,
            border_color: Color::WHITE,
            text_color: Color::WHITE,
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.1).into()),
            text_color: Color::WHITE,
            ..active
        }
    }
}

pub struct PrimaryButtonStyle;

impl button::StyleSheet for PrimaryButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            shadow_offset: Vector::default(),
            background: Some(Color::from_rgb(0.2, 0.5, 1.0).into()),
            border_radius: 4.0.into(),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
            text_color: Color::WHITE,
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Color::from_rgb(0.3, 0.6, 1.0).into()),
            ..active
        }
    }
}

/// Look of the publish button while the checklist blocks it. The button
/// stays pressable so the press can surface the missing sections.
pub struct MutedButtonStyle;

impl button::StyleSheet for MutedButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            shadow_offset: Vector::default(),
            background: Some(Color::from_rgb(0.16, 0.17, 0.2).into()),
            border_radius: 4.0.into(),
            border_width: 1.0,
            border_color: Color::from_rgb(0.25, 0.26, 0.3),
            text_color: Color::from_rgb(0.5, 0.5, 0.55),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}
