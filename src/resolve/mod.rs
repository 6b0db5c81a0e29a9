//! Style resolution: semantic component state to visual attributes.
//!
//! [`resolve`] is a pure, total function. Every `(kind, priority, status,
//! subtle, interaction)` combination maps to exactly one
//! [`VisualAttributes`], and the mapping is written as exhaustive matches so
//! an unmapped combination is a compile error rather than a runtime case.
//!
//! # Rules
//!
//! Evaluation order, first match wins:
//!
//! 1. **Disabled** short-circuits everything: a fixed muted neutral per kind,
//!    with active colors equal to resting ones.
//! 2. **Selected / focused** pick the base palette (tags, choice indicators,
//!    input borders).
//! 3. **Priority / status / subtle** pick the family and tone.
//! 4. The **active** variant is the table-driven darker step of the chosen
//!    tone (see [`ToneScale`]).
//!
//! | Button               | Fill                | Label       |
//! |----------------------|---------------------|-------------|
//! | primary              | family normal       | white       |
//! | primary, subtle      | family light        | family dark |
//! | secondary            | family dark @ 12 %  | family dark |
//! | secondary, subtle    | ink dark @ 10 %     | ink dark    |
//!
//! Haptics are stronger for primary buttons, and any critical component
//! uses the error notification haptic.

mod metrics;
mod tone;

pub use metrics::{Metrics, Padding};
pub use tone::{tone_scale, ToneScale};

use crate::attributes::{Color, HapticFeedback, NotificationFeedback, VisualAttributes};
use crate::palette::Token;
use crate::state::{ButtonSize, ChoiceShape, ComponentKind, Priority, Status, StyleRequest};

/// Opacity of a secondary button's tinted background.
const SECONDARY_FILL_OPACITY: u8 = 12;
/// Opacity of a subtle secondary button's neutral background.
const SUBTLE_FILL_OPACITY: u8 = 10;

/// Resolves a request with Orbit's default metrics.
///
/// ```rust
/// use orbit_style::{resolve, Color, ComponentKind, StyleRequest, Token};
///
/// let attrs = resolve(&StyleRequest::new(ComponentKind::Button));
/// assert_eq!(attrs.fill_color, Color::new(Token::ProductNormal));
/// assert_eq!(attrs.label_color, Color::new(Token::White));
/// ```
pub fn resolve(request: &StyleRequest) -> VisualAttributes {
    resolve_with(request, &Metrics::ORBIT)
}

/// Resolves a request using custom metrics.
pub fn resolve_with(request: &StyleRequest, metrics: &Metrics) -> VisualAttributes {
    let interaction = request.interaction.normalized();
    let request = StyleRequest {
        interaction,
        ..*request
    };

    let paints = if interaction.disabled {
        disabled_paints(request.kind)
    } else {
        match request.kind {
            ComponentKind::Button => button_paints(&request),
            ComponentKind::ButtonLink => link_paints(&request),
            ComponentKind::Tag => tag_paints(&request),
            ComponentKind::ChoiceIndicator(_) => choice_paints(&request),
            ComponentKind::InputField => input_paints(&request),
        }
    };

    let (corner_radius, padding) = shape(request.kind, request.size, metrics);

    VisualAttributes {
        fill_color: paints.fill,
        active_fill_color: paints.active_fill,
        label_color: paints.label,
        active_label_color: paints.active_label,
        border_color: paints.border,
        corner_radius,
        horizontal_padding: padding.horizontal,
        vertical_padding: padding.vertical,
        haptic: haptic(&request),
        interaction,
    }
}

/// The color part of a resolution.
struct Paints {
    fill: Color,
    active_fill: Color,
    label: Color,
    active_label: Color,
    border: Color,
}

impl Paints {
    /// Resting and active fill, a label that does not change on press, and
    /// no border.
    fn filled(fill: Color, active_fill: Color, label: Color) -> Self {
        Self {
            fill,
            active_fill,
            label,
            active_label: label,
            border: Color::CLEAR,
        }
    }

    fn bordered(mut self, border: Color) -> Self {
        self.border = border;
        self
    }
}

fn disabled_paints(kind: ComponentKind) -> Paints {
    let fill = match kind {
        ComponentKind::ButtonLink => Color::CLEAR,
        ComponentKind::Button
        | ComponentKind::Tag
        | ComponentKind::ChoiceIndicator(_)
        | ComponentKind::InputField => Color::new(Token::CloudNormal),
    };
    let border = match kind {
        ComponentKind::ChoiceIndicator(_) | ComponentKind::InputField => {
            Color::new(Token::CloudDark)
        }
        ComponentKind::Button | ComponentKind::ButtonLink | ComponentKind::Tag => Color::CLEAR,
    };
    Paints::filled(fill, fill, Color::new(Token::InkLighter)).bordered(border)
}

fn button_paints(request: &StyleRequest) -> Paints {
    let scale = tone_scale(request.status);
    match (request.effective_priority(), request.subtle) {
        (Priority::Primary, false) => Paints::filled(
            Color::new(scale.normal),
            Color::new(scale.normal_active),
            Color::new(Token::White),
        ),
        (Priority::Primary, true) => Paints::filled(
            Color::new(scale.light),
            Color::new(scale.light_active),
            Color::new(scale.dark),
        ),
        (Priority::Secondary, false) => Paints {
            fill: Color::new(scale.dark).opacity(SECONDARY_FILL_OPACITY),
            active_fill: Color::new(scale.dark_active).opacity(SECONDARY_FILL_OPACITY),
            label: Color::new(scale.dark),
            active_label: Color::new(scale.dark_active),
            border: Color::CLEAR,
        },
        (Priority::Secondary, true) => Paints {
            fill: Color::new(Token::InkDark).opacity(SUBTLE_FILL_OPACITY),
            active_fill: Color::new(Token::InkDarkActive).opacity(SUBTLE_FILL_OPACITY),
            label: Color::new(Token::InkDark),
            active_label: Color::new(Token::InkDarkActive),
            border: Color::CLEAR,
        },
    }
}

fn link_paints(request: &StyleRequest) -> Paints {
    let scale = tone_scale(request.status);
    let (label, active_label) = match (request.effective_priority(), request.subtle) {
        (_, true) => (Token::InkLight, Token::InkLightActive),
        (Priority::Primary, false) => (scale.normal, scale.normal_active),
        (Priority::Secondary, false) => (Token::InkDark, Token::InkDarkActive),
    };
    Paints {
        fill: Color::CLEAR,
        active_fill: Color::CLEAR,
        label: Color::new(label),
        active_label: Color::new(active_label),
        border: Color::CLEAR,
    }
}

fn tag_paints(request: &StyleRequest) -> Paints {
    let state = request.interaction;
    let (fill, active_fill) = match (state.focused, state.selected) {
        (false, false) => (Token::CloudNormal, Token::CloudNormalActive),
        (true, false) => (Token::BlueLight, Token::BlueLightActive),
        (false, true) => (Token::InkLightHover, Token::InkLightActive),
        (true, true) => (Token::BlueNormal, Token::BlueNormalActive),
    };
    let label = match (state.focused, state.selected) {
        (_, true) => Token::White,
        (true, false) => Token::BlueDarker,
        (false, false) => Token::InkDark,
    };
    Paints::filled(
        Color::new(fill),
        Color::new(active_fill),
        Color::new(label),
    )
}

fn choice_paints(request: &StyleRequest) -> Paints {
    let state = request.interaction;
    let (fill, active_fill) = if state.selected {
        (Token::BlueNormal, Token::BlueNormalActive)
    } else {
        (Token::White, Token::CloudNormal)
    };
    let border = match (request.status, state.selected, state.focused) {
        (Some(status), false, _) => tone_scale(Some(status)).normal,
        (_, true, _) | (None, false, true) => Token::BlueNormal,
        (None, false, false) => Token::InkLighter,
    };
    Paints::filled(
        Color::new(fill),
        Color::new(active_fill),
        Color::new(Token::White),
    )
    .bordered(Color::new(border))
}

fn input_paints(request: &StyleRequest) -> Paints {
    let border = match (request.status, request.interaction.focused) {
        (Some(status), _) => tone_scale(Some(status)).normal,
        (None, true) => Token::BlueNormal,
        (None, false) => Token::CloudDark,
    };
    Paints::filled(
        Color::new(Token::White),
        Color::new(Token::WhiteActive),
        Color::new(Token::InkDark),
    )
    .bordered(Color::new(border))
}

fn shape(kind: ComponentKind, size: ButtonSize, metrics: &Metrics) -> (f32, Padding) {
    match kind {
        ComponentKind::Button => match size {
            ButtonSize::Default => (metrics.corner_radius, metrics.button_padding),
            ButtonSize::Small => (metrics.corner_radius, metrics.button_small_padding),
        },
        ComponentKind::ButtonLink => (0.0, metrics.link_padding),
        ComponentKind::Tag => (metrics.corner_radius, metrics.tag_padding),
        ComponentKind::ChoiceIndicator(ChoiceShape::Checkbox) => {
            (metrics.checkbox_radius, Padding::new(0.0, 0.0))
        }
        ComponentKind::ChoiceIndicator(ChoiceShape::Radio) => {
            (metrics.radio_radius, Padding::new(0.0, 0.0))
        }
        ComponentKind::InputField => (metrics.corner_radius, metrics.input_padding),
    }
}

fn haptic(request: &StyleRequest) -> HapticFeedback {
    if request.status == Some(Status::Critical) {
        return HapticFeedback::Notification(NotificationFeedback::Error);
    }
    match request.kind {
        ComponentKind::Button => match (request.effective_priority(), request.subtle) {
            (Priority::Primary, false) => HapticFeedback::Light(1.0),
            (Priority::Primary, true) | (Priority::Secondary, _) => HapticFeedback::Light(0.5),
        },
        ComponentKind::ButtonLink => match request.effective_priority() {
            Priority::Primary => HapticFeedback::Light(0.5),
            Priority::Secondary => HapticFeedback::Light(0.3),
        },
        ComponentKind::Tag | ComponentKind::ChoiceIndicator(_) => HapticFeedback::Selection,
        ComponentKind::InputField => HapticFeedback::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Interaction;

    fn button() -> StyleRequest {
        StyleRequest::new(ComponentKind::Button)
    }

    #[test]
    fn test_primary_button_without_status() {
        let attrs = resolve(&button().priority(Priority::Primary));
        assert_eq!(attrs.fill_color, Color::new(Token::ProductNormal));
        assert_eq!(attrs.active_fill_color, Color::new(Token::ProductNormalActive));
        assert_eq!(attrs.label_color, Color::new(Token::White));
        assert_eq!(attrs.haptic, HapticFeedback::Light(1.0));
        assert_eq!(attrs.corner_radius, 6.0);
        assert_eq!(attrs.horizontal_padding, 16.0);
        assert_eq!(attrs.vertical_padding, 12.0);
    }

    #[test]
    fn test_missing_priority_is_primary() {
        assert_eq!(resolve(&button()), resolve(&button().priority(Priority::Primary)));
    }

    #[test]
    fn test_secondary_critical_button() {
        let attrs = resolve(&button().priority(Priority::Secondary).status(Status::Critical));
        assert_eq!(attrs.fill_color, Color::new(Token::RedDark).opacity(12));
        assert_eq!(attrs.active_fill_color, Color::new(Token::RedDarkActive).opacity(12));
        assert_eq!(attrs.label_color, Color::new(Token::RedDark));
        assert_eq!(
            attrs.haptic,
            HapticFeedback::Notification(NotificationFeedback::Error)
        );
    }

    #[test]
    fn test_secondary_subtle_ignores_status_colors() {
        let info = resolve(&button().priority(Priority::Secondary).status(Status::Info).subtle());
        let plain = resolve(&button().priority(Priority::Secondary).subtle());
        assert_eq!(info.fill_color, Color::new(Token::InkDark).opacity(10));
        assert_eq!(info.fill_color, plain.fill_color);
        assert_eq!(info.label_color, Color::new(Token::InkDark));
        assert_eq!(info.haptic, HapticFeedback::Light(0.5));
    }

    #[test]
    fn test_primary_subtle_uses_dark_label_on_light() {
        let attrs = resolve(&button().status(Status::Success).subtle());
        assert_eq!(attrs.fill_color, Color::new(Token::GreenLight));
        assert_eq!(attrs.active_fill_color, Color::new(Token::GreenLightActive));
        assert_eq!(attrs.label_color, Color::new(Token::GreenDark));
    }

    #[test]
    fn test_selected_tag() {
        let attrs = resolve(
            &StyleRequest::new(ComponentKind::Tag).interaction(Interaction::DEFAULT.select()),
        );
        assert_eq!(attrs.label_color, Color::new(Token::White));
        assert_eq!(attrs.fill_color, Color::new(Token::InkLightHover));
        assert_eq!(attrs.haptic, HapticFeedback::Selection);
    }

    #[test]
    fn test_focused_tag_uses_blue() {
        let focused = Interaction::DEFAULT.focus();
        let attrs = resolve(&StyleRequest::new(ComponentKind::Tag).interaction(focused));
        assert_eq!(attrs.fill_color, Color::new(Token::BlueLight));
        assert_eq!(attrs.label_color, Color::new(Token::BlueDarker));

        let attrs = resolve(&StyleRequest::new(ComponentKind::Tag).interaction(focused.select()));
        assert_eq!(attrs.fill_color, Color::new(Token::BlueNormal));
        assert_eq!(attrs.active_fill_color, Color::new(Token::BlueNormalActive));
    }

    #[test]
    fn test_selection_sets_base_before_press() {
        let pressed = resolve(
            &StyleRequest::new(ComponentKind::Tag)
                .interaction(Interaction::DEFAULT.select().press()),
        );
        assert_eq!(pressed.current_fill(), Color::new(Token::InkLightActive));
        assert_eq!(pressed.current_label(), Color::new(Token::White));
    }

    #[test]
    fn test_disabled_button_ignores_status() {
        let disabled = Interaction::DEFAULT.disable();
        let attrs = resolve(&button().status(Status::Warning).interaction(disabled));
        assert_eq!(attrs.fill_color, Color::new(Token::CloudNormal));
        assert_eq!(attrs.active_fill_color, attrs.fill_color);
        assert_eq!(attrs.label_color, Color::new(Token::InkLighter));
        assert_eq!(attrs.active_label_color, attrs.label_color);
    }

    #[test]
    fn test_disabled_press_is_not_pressed() {
        let attrs = resolve(&button().interaction(Interaction::DEFAULT.press().disable()));
        assert!(!attrs.interaction.pressed);
        assert_eq!(attrs.current_fill(), attrs.fill_color);
    }

    #[test]
    fn test_link_labels() {
        let link = StyleRequest::new(ComponentKind::ButtonLink);
        let primary = resolve(&link);
        assert_eq!(primary.fill_color, Color::CLEAR);
        assert_eq!(primary.label_color, Color::new(Token::ProductNormal));
        assert_eq!(primary.active_label_color, Color::new(Token::ProductNormalActive));
        assert_eq!(primary.corner_radius, 0.0);

        let critical = resolve(&link.status(Status::Critical));
        assert_eq!(critical.label_color, Color::new(Token::RedNormal));

        let secondary = resolve(&link.priority(Priority::Secondary));
        assert_eq!(secondary.label_color, Color::new(Token::InkDark));
        assert_eq!(secondary.haptic, HapticFeedback::Light(0.3));

        let subtle = resolve(&link.subtle());
        assert_eq!(subtle.label_color, Color::new(Token::InkLight));
    }

    #[test]
    fn test_checkbox_states() {
        let checkbox = StyleRequest::new(ComponentKind::ChoiceIndicator(ChoiceShape::Checkbox));

        let unchecked = resolve(&checkbox);
        assert_eq!(unchecked.fill_color, Color::new(Token::White));
        assert_eq!(unchecked.border_color, Color::new(Token::InkLighter));
        assert_eq!(unchecked.corner_radius, 4.0);

        let checked = resolve(&checkbox.interaction(Interaction::DEFAULT.select()));
        assert_eq!(checked.fill_color, Color::new(Token::BlueNormal));
        assert_eq!(checked.border_color, Color::new(Token::BlueNormal));

        let error = resolve(&checkbox.status(Status::Critical));
        assert_eq!(error.border_color, Color::new(Token::RedNormal));
    }

    #[test]
    fn test_radio_is_round() {
        let radio = resolve(&StyleRequest::new(ComponentKind::ChoiceIndicator(
            ChoiceShape::Radio,
        )));
        assert_eq!(radio.corner_radius, 10.0);
        assert_eq!(radio.horizontal_padding, 0.0);
    }

    #[test]
    fn test_input_field_border() {
        let input = StyleRequest::new(ComponentKind::InputField);
        assert_eq!(resolve(&input).border_color, Color::new(Token::CloudDark));
        assert_eq!(
            resolve(&input.interaction(Interaction::DEFAULT.focus())).border_color,
            Color::new(Token::BlueNormal)
        );
        assert_eq!(
            resolve(&input.status(Status::Warning).interaction(Interaction::DEFAULT.focus()))
                .border_color,
            Color::new(Token::OrangeNormal)
        );
        assert_eq!(resolve(&input).haptic, HapticFeedback::None);
    }

    #[test]
    fn test_small_button_padding() {
        let attrs = resolve(&button().size(ButtonSize::Small));
        assert_eq!(attrs.horizontal_padding, 12.0);
        assert_eq!(attrs.vertical_padding, 6.0);
    }

    #[test]
    fn test_custom_metrics() {
        let metrics = Metrics {
            corner_radius: 12.0,
            ..Metrics::ORBIT
        };
        let attrs = resolve_with(&button(), &metrics);
        assert_eq!(attrs.corner_radius, 12.0);
        assert_eq!(attrs.fill_color, resolve(&button()).fill_color);
    }
}
