//! Resolved visual attributes: what the host toolkit paints.

use serde::Serialize;

use crate::palette::Token;
use crate::state::Interaction;

/// A palette token at a given opacity.
///
/// Colors stay symbolic until painted by a [`Palette`](crate::Palette), so
/// the same resolution can be rendered with any theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub token: Token,
    /// Opacity in percent, `0..=100`.
    pub opacity: u8,
}

impl Color {
    /// Fully transparent.
    pub const CLEAR: Color = Color {
        token: Token::White,
        opacity: 0,
    };

    /// An opaque color.
    pub const fn new(token: Token) -> Self {
        Self {
            token,
            opacity: 100,
        }
    }

    /// The same token at `percent` opacity, capped at 100.
    pub const fn opacity(self, percent: u8) -> Self {
        Self {
            token: self.token,
            opacity: if percent > 100 { 100 } else { percent },
        }
    }

    /// Opacity as an 8-bit alpha channel.
    pub const fn alpha(self) -> u8 {
        ((self.opacity as u16 * 255 + 50) / 100) as u8
    }
}

impl From<Token> for Color {
    fn from(token: Token) -> Self {
        Color::new(token)
    }
}

/// Category of a notification haptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFeedback {
    Success,
    Warning,
    Error,
}

/// Tactile feedback fired when the component is activated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum HapticFeedback {
    None,
    /// Discrete selection tick.
    Selection,
    /// Light impact with intensity in `0.0..=1.0`.
    Light(f32),
    Notification(NotificationFeedback),
}

impl HapticFeedback {
    /// Relative strength, for comparing feedback across categories.
    pub fn strength(&self) -> f32 {
        match self {
            HapticFeedback::None => 0.0,
            HapticFeedback::Selection => 0.2,
            HapticFeedback::Light(intensity) => *intensity,
            HapticFeedback::Notification(_) => 1.0,
        }
    }
}

/// Concrete visual attributes for one component state.
///
/// Both resting and active (pressed) colors are always present; the host
/// picks between them on press, or calls [`current_fill`](Self::current_fill).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualAttributes {
    pub fill_color: Color,
    pub active_fill_color: Color,
    pub label_color: Color,
    pub active_label_color: Color,
    pub border_color: Color,
    /// Points.
    pub corner_radius: f32,
    /// Points.
    pub horizontal_padding: f32,
    /// Points.
    pub vertical_padding: f32,
    pub haptic: HapticFeedback,
    /// The interaction these attributes were resolved for, normalized.
    pub interaction: Interaction,
}

impl VisualAttributes {
    /// Fill for the interaction this was resolved for.
    pub fn current_fill(&self) -> Color {
        if self.interaction.pressed {
            self.active_fill_color
        } else {
            self.fill_color
        }
    }

    /// Label color for the interaction this was resolved for.
    pub fn current_label(&self) -> Color {
        if self.interaction.pressed {
            self.active_label_color
        } else {
            self.label_color
        }
    }
}
