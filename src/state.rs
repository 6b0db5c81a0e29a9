//! Semantic component state: what a component *is*, not how it looks.
//!
//! These are the inputs to [`resolve`](crate::resolve). They are plain
//! values passed explicitly with every resolution; nothing is inherited
//! implicitly from a parent component.

use serde::{Deserialize, Serialize};

/// Visual weight of an actionable component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Emphasized, filled.
    #[default]
    Primary,
    /// De-emphasized, tinted or neutral.
    Secondary,
}

impl Priority {
    pub const ALL: [Priority; 2] = [Priority::Primary, Priority::Secondary];
}

/// Semantic color category used for contextual theming.
///
/// A component without a status uses the product color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Info,
    Success,
    Warning,
    Critical,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Info,
        Status::Success,
        Status::Warning,
        Status::Critical,
    ];
}

/// Outline of a choice indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceShape {
    Checkbox,
    Radio,
}

/// Size variant of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
}

/// The kind of component being styled.
///
/// One resolver handles every kind; per-kind rules live in the resolver's
/// `match` on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Filled or tinted button.
    Button,
    /// Text-only button.
    ButtonLink,
    /// Selectable tag.
    Tag,
    /// Checkbox or radio indicator.
    ChoiceIndicator(ChoiceShape),
    /// Chrome around a text input.
    InputField,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Button,
        ComponentKind::ButtonLink,
        ComponentKind::Tag,
        ComponentKind::ChoiceIndicator(ChoiceShape::Checkbox),
        ComponentKind::ChoiceIndicator(ChoiceShape::Radio),
        ComponentKind::InputField,
    ];

    /// Whether the component paints a background that darkens when pressed.
    pub const fn has_fill(self) -> bool {
        !matches!(self, ComponentKind::ButtonLink)
    }
}

/// The current user-interaction condition of a component.
///
/// Flags combine freely; the empty set is the resting state.
///
/// ```rust
/// use orbit_style::Interaction;
///
/// let state = Interaction::DEFAULT.select().press();
/// assert!(state.selected && state.pressed);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interaction {
    pub pressed: bool,
    pub disabled: bool,
    pub focused: bool,
    pub selected: bool,
}

impl Interaction {
    pub const DEFAULT: Interaction = Interaction {
        pressed: false,
        disabled: false,
        focused: false,
        selected: false,
    };

    /// Every combination of flags.
    pub const ALL: [Interaction; 16] = {
        let mut all = [Interaction::DEFAULT; 16];
        let mut bits = 0;
        while bits < 16 {
            all[bits] = Interaction {
                pressed: bits & 1 != 0,
                disabled: bits & 2 != 0,
                focused: bits & 4 != 0,
                selected: bits & 8 != 0,
            };
            bits += 1;
        }
        all
    };

    pub const fn press(mut self) -> Self {
        self.pressed = true;
        self
    }

    pub const fn disable(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub const fn focus(mut self) -> Self {
        self.focused = true;
        self
    }

    pub const fn select(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Drops flags a disabled component cannot have: it is never pressed
    /// or focused.
    pub const fn normalized(self) -> Self {
        if self.disabled {
            Interaction {
                pressed: false,
                focused: false,
                ..self
            }
        } else {
            self
        }
    }
}

/// Everything the resolver needs to know about one component.
///
/// ```rust
/// use orbit_style::{ComponentKind, Priority, Status, StyleRequest};
///
/// let request = StyleRequest::new(ComponentKind::Button)
///     .priority(Priority::Secondary)
///     .status(Status::Critical);
/// assert!(!request.subtle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleRequest {
    pub kind: ComponentKind,
    /// Absent means [`Priority::Primary`].
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Absent means the product color family.
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub subtle: bool,
    #[serde(default)]
    pub interaction: Interaction,
    #[serde(default)]
    pub size: ButtonSize,
}

impl StyleRequest {
    /// A resting, primary, status-less request for `kind`.
    pub const fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            priority: None,
            status: None,
            subtle: false,
            interaction: Interaction::DEFAULT,
            size: ButtonSize::Default,
        }
    }

    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub const fn subtle(mut self) -> Self {
        self.subtle = true;
        self
    }

    pub const fn interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    pub const fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }
}
