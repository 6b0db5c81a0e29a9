//! Color tokens and the palettes that give them concrete values.
//!
//! This module provides:
//!
//! - [`Token`]: every named Orbit color, grouped into [`Family`]s
//! - [`Rgb`] / [`Rgba`]: concrete sRGB values
//! - [`Palette`]: a full token-to-value table, defaulting to Orbit's
//! - [`import_design_tokens`]: refreshes a palette from a design-token export
//!
//! The resolver never reads a palette: it emits tokens, and a palette (usually
//! through a [`Theme`](crate::Theme)) turns them into pixels.

mod import;
mod rgb;
mod tokens;

pub use import::{import_design_tokens, TokenCheck, TokenImport, PALETTE_KEY_PREFIX};
pub use rgb::{Rgb, Rgba};
pub use tokens::{Family, Token};
pub(crate) use tokens::key_words;

use once_cell::sync::Lazy;

use crate::attributes::Color;

static ORBIT: Lazy<Palette> = Lazy::new(|| Palette {
    colors: std::array::from_fn(|i| Token::ALL[i].orbit_rgb()),
});

/// A concrete value for every [`Token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; Token::COUNT],
}

/// A token whose value differs between two palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenChange {
    pub token: Token,
    pub previous: Rgb,
    pub updated: Rgb,
}

impl Palette {
    /// The built-in Orbit palette.
    pub fn orbit() -> Self {
        ORBIT.clone()
    }

    pub fn get(&self, token: Token) -> Rgb {
        self.colors[token.index()]
    }

    pub fn set(&mut self, token: Token, value: Rgb) {
        self.colors[token.index()] = value;
    }

    /// Replaces one token, returning the palette for chaining.
    pub fn with(mut self, token: Token, value: Rgb) -> Self {
        self.set(token, value);
        self
    }

    /// Concrete color for a resolved [`Color`], with its opacity applied.
    ///
    /// ```rust
    /// use orbit_style::{Color, Palette, Token};
    ///
    /// let paint = Palette::orbit().paint(Color::new(Token::RedDark).opacity(12));
    /// assert_eq!(paint.a, 31);
    /// ```
    pub fn paint(&self, color: Color) -> Rgba {
        self.get(color.token).with_alpha(color.alpha())
    }

    /// Iterates tokens in palette order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (Token, Rgb)> + '_ {
        Token::ALL.iter().map(move |&token| (token, self.get(token)))
    }

    /// Lists every token whose value in `updated` differs from `self`.
    pub fn diff(&self, updated: &Palette) -> Vec<TokenChange> {
        Token::ALL
            .iter()
            .filter(|&&token| self.get(token) != updated.get(token))
            .map(|&token| TokenChange {
                token,
                previous: self.get(token),
                updated: updated.get(token),
            })
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::orbit()
    }
}
