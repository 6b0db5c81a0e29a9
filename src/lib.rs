//! # Orbit Style
//!
//! Style resolution for the Orbit design system. A component describes what
//! it *is* (kind, priority, status, subtle flag, interaction state) and the
//! resolver answers how it *looks*: fill and label colors with their pressed
//! variants, border, corner radius, paddings and haptic feedback.
//!
//! ## Layers
//!
//! - **State**: [`StyleRequest`] and its parts ([`ComponentKind`],
//!   [`Priority`], [`Status`], [`Interaction`])
//! - **Resolution**: [`resolve`] maps a request to [`VisualAttributes`] whose
//!   colors are symbolic [`Color`]s (a [`Token`] plus opacity)
//! - **Theming**: a [`Theme`] pairs a [`Palette`] with [`Metrics`] and paints
//!   symbolic colors into concrete [`Rgba`] values
//!
//! Resolution is pure and total: no I/O, no shared state, no failure. Only
//! loading palettes and themes can fail, with [`ThemeError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use orbit_style::{
//!     resolve, Color, ComponentKind, HapticFeedback, NotificationFeedback, Priority, Status,
//!     StyleRequest, Theme, Token,
//! };
//!
//! let request = StyleRequest::new(ComponentKind::Button)
//!     .priority(Priority::Secondary)
//!     .status(Status::Critical);
//!
//! let attrs = resolve(&request);
//! assert_eq!(attrs.fill_color, Color::new(Token::RedDark).opacity(12));
//! assert_eq!(attrs.label_color, Color::new(Token::RedDark));
//! assert_eq!(
//!     attrs.haptic,
//!     HapticFeedback::Notification(NotificationFeedback::Error)
//! );
//!
//! let painted = Theme::new().paint_attributes(&attrs);
//! assert_eq!(painted.fill.a, 31);
//! ```
//!
//! ## Design tokens
//!
//! Palettes can be refreshed from a design-token export with
//! [`import_design_tokens`], compared with [`Palette::diff`], and exported as
//! platform color listings and asset catalogs through [`export`].

mod attributes;
mod error;
pub mod export;
pub mod palette;
mod resolve;
mod state;
mod theme;
mod util;

pub use attributes::{Color, HapticFeedback, NotificationFeedback, VisualAttributes};
pub use error::ThemeError;
pub use palette::{
    import_design_tokens, Family, Palette, Rgb, Rgba, Token, TokenChange, TokenCheck, TokenImport,
};
pub use resolve::{resolve, resolve_with, tone_scale, Metrics, Padding, ToneScale};
pub use state::{ButtonSize, ChoiceShape, ComponentKind, Interaction, Priority, Status, StyleRequest};
pub use theme::{PaintedAttributes, Theme, ThemeConfig};
pub use util::{ansi256, swatch};
