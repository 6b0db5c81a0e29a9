//! Import of design-token exports into a [`Palette`].
//!
//! The export is a flat JSON object. Keys starting with [`PALETTE_KEY_PREFIX`]
//! carry colors as `rgb(r, g, b)` strings; every other key is ignored.
//!
//! ```json
//! {
//!   "paletteProductNormal": "rgb(0, 169, 145)",
//!   "paletteProductNormalHover": "rgb(0, 152, 130)",
//!   "fontFamily": "Roboto"
//! }
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use super::rgb::Rgb;
use super::tokens::{lowercase_first, Token};
use super::{Palette, TokenChange};
use crate::error::ThemeError;

/// Prefix of color entries in a design-token export.
pub const PALETTE_KEY_PREFIX: &str = "palette";

/// Token keys that are never imported.
///
/// `white` clashes with the platform's own white and always stays `#FFFFFF`.
const SKIPPED_KEYS: &[&str] = &["white"];

/// Result of importing a design-token export.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenImport {
    /// The base palette with every imported token applied.
    pub palette: Palette,
    /// Known tokens present in the export, sorted by key.
    pub imported: Vec<Token>,
    /// Palette entries naming no known token, keyed like [`Token::key`].
    pub unknown: BTreeMap<String, Rgb>,
    /// Known tokens the export does not define. They keep their base value.
    pub missing: Vec<Token>,
}

/// Differences between a design-token export and a base palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCheck {
    /// Keys in the export that no known token has.
    pub added: Vec<String>,
    /// Known tokens absent from the export.
    pub removed: Vec<Token>,
    /// Known tokens whose value differs.
    pub changed: Vec<TokenChange>,
}

impl TokenCheck {
    pub fn is_up_to_date(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Total number of differences.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_up_to_date()
    }
}

impl TokenImport {
    /// Compares the export with `base`: added keys, removed tokens and
    /// changed values.
    ///
    /// ```rust
    /// use orbit_style::{import_design_tokens, Palette};
    ///
    /// let base = Palette::orbit();
    /// let import =
    ///     import_design_tokens(r#"{ "paletteBlueNormalFocus": "rgb(1, 2, 3)" }"#, &base).unwrap();
    /// let check = import.check(&base);
    /// assert_eq!(check.added, vec!["blueNormalFocus".to_string()]);
    /// assert!(!check.is_up_to_date());
    /// ```
    pub fn check(&self, base: &Palette) -> TokenCheck {
        TokenCheck {
            added: self.unknown.keys().cloned().collect(),
            removed: self.missing.clone(),
            changed: base.diff(&self.palette),
        }
    }
}

/// Applies the palette entries of a design-token export on top of `base`.
///
/// Unknown palette keys are collected in [`TokenImport::unknown`] with
/// their values rather than failing, so a newer token set can still refresh
/// the colors this crate knows about and be exported in full.
///
/// # Errors
///
/// Returns [`ThemeError::Json`] if the document is not a JSON object and
/// [`ThemeError::InvalidRgb`] if a palette value is not an `rgb(r, g, b)`
/// triple.
pub fn import_design_tokens(json: &str, base: &Palette) -> Result<TokenImport, ThemeError> {
    let entries: BTreeMap<String, Value> = serde_json::from_str(json)?;

    let mut palette = base.clone();
    let mut imported = Vec::new();
    let mut unknown = BTreeMap::new();

    for (key, value) in &entries {
        let Some(rest) = key.strip_prefix(PALETTE_KEY_PREFIX) else {
            continue;
        };
        let token_key = lowercase_first(rest);

        if SKIPPED_KEYS.contains(&token_key.as_str()) {
            tracing::debug!(key = %key, "skipping reserved palette token");
            continue;
        }

        let rgb = match value {
            Value::String(text) => Rgb::from_css_rgb(key, text)?,
            other => {
                return Err(ThemeError::InvalidRgb {
                    key: key.clone(),
                    value: other.to_string(),
                })
            }
        };

        match Token::from_key(&token_key) {
            Some(token) => {
                palette.set(token, rgb);
                imported.push(token);
            }
            None => {
                tracing::warn!(key = %key, "design token export has unknown palette key");
                unknown.insert(token_key, rgb);
            }
        }
    }

    let missing: Vec<Token> = Token::ALL
        .iter()
        .copied()
        .filter(|token| !SKIPPED_KEYS.contains(&token.key()) && !imported.contains(token))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(missing = missing.len(), "design token export lacks known tokens");
    }

    tracing::debug!(
        imported = imported.len(),
        unknown = unknown.len(),
        "imported design tokens"
    );

    Ok(TokenImport {
        palette,
        imported,
        unknown,
        missing,
    })
}
