//! Theme struct: a palette and metrics used together.

use std::path::Path;

use serde::Serialize;

use super::config::ThemeConfig;
use crate::attributes::{Color, HapticFeedback, VisualAttributes};
use crate::error::ThemeError;
use crate::palette::{Palette, Rgb, Rgba, Token};
use crate::resolve::{resolve_with, Metrics};
use crate::state::StyleRequest;

/// A palette and the metrics to resolve with.
///
/// # Example
///
/// ```rust
/// use orbit_style::{ComponentKind, Rgb, StyleRequest, Theme, Token};
///
/// let theme = Theme::new().with_color(Token::ProductNormal, Rgb::new(0x12, 0x34, 0x56));
///
/// let attrs = theme.resolve(&StyleRequest::new(ComponentKind::Button));
/// let painted = theme.paint_attributes(&attrs);
/// assert_eq!(painted.fill.rgb(), Rgb::new(0x12, 0x34, 0x56));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    palette: Palette,
    metrics: Metrics,
}

/// [`VisualAttributes`] with every color painted by a theme's palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaintedAttributes {
    pub fill: Rgba,
    pub active_fill: Rgba,
    pub label: Rgba,
    pub active_label: Rgba,
    pub border: Rgba,
    pub corner_radius: f32,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    pub haptic: HapticFeedback,
}

impl Theme {
    /// The Orbit theme.
    pub fn new() -> Self {
        Self {
            palette: Palette::orbit(),
            metrics: Metrics::ORBIT,
        }
    }

    /// Creates a theme from an existing palette with Orbit metrics.
    pub fn from_palette(palette: Palette) -> Self {
        Self {
            palette,
            metrics: Metrics::ORBIT,
        }
    }

    /// Overrides one token, returning an updated theme for chaining.
    pub fn with_color(mut self, token: Token, value: Rgb) -> Self {
        self.palette.set(token, value);
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Applies a configuration on top of the Orbit theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownToken`] for palette keys that name no
    /// token and [`ThemeError::InvalidHex`] for malformed values.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let mut theme = Theme::new().with_metrics(config.metrics);
        for (key, value) in &config.palette {
            let token = Token::from_key(key)
                .ok_or_else(|| ThemeError::UnknownToken { key: key.clone() })?;
            theme.palette.set(token, Rgb::from_hex(value)?);
        }
        Ok(theme)
    }

    /// Parses a YAML theme configuration.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_yaml::from_str(source)?;
        Self::from_config(&config)
    }

    /// Parses a JSON theme configuration.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_json::from_str(source)?;
        Self::from_config(&config)
    }

    /// Loads a theme file; `.json` files are parsed as JSON, anything else as
    /// YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ThemeError::io(path, e))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let theme = if is_json {
            Self::from_json(&source)?
        } else {
            Self::from_yaml(&source)?
        };
        tracing::debug!(path = %path.display(), "loaded theme");
        Ok(theme)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Resolves a request with this theme's metrics.
    pub fn resolve(&self, request: &StyleRequest) -> VisualAttributes {
        let attrs = resolve_with(request, &self.metrics);
        tracing::trace!(?request, fill = ?attrs.fill_color, "resolved style");
        attrs
    }

    /// Paints one color with this theme's palette.
    pub fn paint(&self, color: Color) -> Rgba {
        self.palette.paint(color)
    }

    pub fn paint_attributes(&self, attrs: &VisualAttributes) -> PaintedAttributes {
        PaintedAttributes {
            fill: self.paint(attrs.fill_color),
            active_fill: self.paint(attrs.active_fill_color),
            label: self.paint(attrs.label_color),
            active_label: self.paint(attrs.active_label_color),
            border: self.paint(attrs.border_color),
            corner_radius: attrs.corner_radius,
            horizontal_padding: attrs.horizontal_padding,
            vertical_padding: attrs.vertical_padding,
            haptic: attrs.haptic,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
