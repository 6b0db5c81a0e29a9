//! Themes pair a palette with metrics.
//!
//! This module provides:
//!
//! - [`Theme`]: palette + metrics with a fluent builder API
//! - [`ThemeConfig`]: the serializable form, loaded from YAML or JSON
//! - [`PaintedAttributes`]: resolved attributes with concrete colors
//!
//! The resolver produces symbolic [`Color`](crate::Color)s; a theme is where
//! they become pixels.

mod config;
#[allow(clippy::module_inception)]
mod theme;

pub use config::ThemeConfig;
pub use theme::{PaintedAttributes, Theme};
