//! The Orbit color token set.

use serde::{Serialize, Serializer};

use super::rgb::Rgb;

/// A color family in the Orbit palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Product,
    Blue,
    Green,
    Orange,
    Red,
    Ink,
    Cloud,
    White,
}

impl Family {
    /// Display name used for grouping, e.g. `"Product"`.
    pub const fn name(self) -> &'static str {
        match self {
            Family::Product => "Product",
            Family::Blue => "Blue",
            Family::Green => "Green",
            Family::Orange => "Orange",
            Family::Red => "Red",
            Family::Ink => "Ink",
            Family::Cloud => "Cloud",
            Family::White => "White",
        }
    }
}

const fn hex(value: u32) -> Rgb {
    Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

macro_rules! palette_tokens {
    ($( $family:ident { $( $variant:ident => $key:literal = $hex:literal ),* $(,)? } )*) => {
        /// A named color in the Orbit palette.
        ///
        /// Tokens are what [`Color`](crate::Color) refers to; concrete sRGB
        /// values live in a [`Palette`](crate::Palette).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Token {
            $( $( $variant, )* )*
        }

        impl Token {
            /// Every token, grouped by family.
            pub const ALL: &'static [Token] = &[ $( $( Token::$variant, )* )* ];

            /// The design-token key, e.g. `"productLightHover"`.
            pub const fn key(self) -> &'static str {
                match self {
                    $( $( Token::$variant => $key, )* )*
                }
            }

            pub const fn family(self) -> Family {
                match self {
                    $( $( Token::$variant => Family::$family, )* )*
                }
            }

            pub(crate) const fn orbit_rgb(self) -> Rgb {
                match self {
                    $( $( Token::$variant => hex($hex), )* )*
                }
            }
        }
    };
}

palette_tokens! {
    Product {
        ProductLight => "productLight" = 0xECF8F7,
        ProductLightHover => "productLightHover" = 0xD6F0EE,
        ProductLightActive => "productLightActive" = 0xC0E8E4,
        ProductNormal => "productNormal" = 0x00A991,
        ProductNormalHover => "productNormalHover" = 0x009882,
        ProductNormalActive => "productNormalActive" = 0x008F7B,
        ProductDark => "productDark" = 0x007F6D,
        ProductDarkHover => "productDarkHover" = 0x006C5B,
        ProductDarkActive => "productDarkActive" = 0x005C4E,
        ProductDarker => "productDarker" = 0x005448,
    }
    Blue {
        BlueLight => "blueLight" = 0xE8F4FD,
        BlueLightHover => "blueLightHover" = 0xDEF0FC,
        BlueLightActive => "blueLightActive" = 0xC8E6FA,
        BlueNormal => "blueNormal" = 0x0172CB,
        BlueNormalHover => "blueNormalHover" = 0x0161AC,
        BlueNormalActive => "blueNormalActive" = 0x01508E,
        BlueDark => "blueDark" = 0x01447C,
        BlueDarkHover => "blueDarkHover" = 0x013A6B,
        BlueDarkActive => "blueDarkActive" = 0x01315A,
        BlueDarker => "blueDarker" = 0x012A4D,
    }
    Green {
        GreenLight => "greenLight" = 0xEAF5EA,
        GreenLightHover => "greenLightHover" = 0xE1F1E1,
        GreenLightActive => "greenLightActive" = 0xCDE8CD,
        GreenNormal => "greenNormal" = 0x28A138,
        GreenNormalHover => "greenNormalHover" = 0x238B31,
        GreenNormalActive => "greenNormalActive" = 0x1D7228,
        GreenDark => "greenDark" = 0x1A6124,
        GreenDarkHover => "greenDarkHover" = 0x165320,
        GreenDarkActive => "greenDarkActive" = 0x13461B,
        GreenDarker => "greenDarker" = 0x103A17,
    }
    Orange {
        OrangeLight => "orangeLight" = 0xFEF2E6,
        OrangeLightHover => "orangeLightHover" = 0xFDE9D5,
        OrangeLightActive => "orangeLightActive" = 0xFBD4AC,
        OrangeNormal => "orangeNormal" = 0xF9971E,
        OrangeNormalHover => "orangeNormalHover" = 0xDC7C05,
        OrangeNormalActive => "orangeNormalActive" = 0xB86704,
        OrangeDark => "orangeDark" = 0xA93610,
        OrangeDarkHover => "orangeDarkHover" = 0x932F0E,
        OrangeDarkActive => "orangeDarkActive" = 0x7D280C,
        OrangeDarker => "orangeDarker" = 0x6B220A,
    }
    Red {
        RedLight => "redLight" = 0xFAEAEA,
        RedLightHover => "redLightHover" = 0xF4D6D6,
        RedLightActive => "redLightActive" = 0xECC0C0,
        RedNormal => "redNormal" = 0xD21C1C,
        RedNormalHover => "redNormalHover" = 0xB91919,
        RedNormalActive => "redNormalActive" = 0x9D1515,
        RedDark => "redDark" = 0x970C0C,
        RedDarkHover => "redDarkHover" = 0x7E0A0A,
        RedDarkActive => "redDarkActive" = 0x6A0909,
        RedDarker => "redDarker" = 0x590707,
    }
    Ink {
        InkLighter => "inkLighter" = 0xBAC7D5,
        InkLighterHover => "inkLighterHover" = 0xA6B6C8,
        InkLighterActive => "inkLighterActive" = 0x94A8BE,
        InkLight => "inkLight" = 0x5F738C,
        InkLightHover => "inkLightHover" = 0x52647A,
        InkLightActive => "inkLightActive" = 0x465567,
        InkNormal => "inkNormal" = 0x4F5E71,
        InkNormalHover => "inkNormalHover" = 0x3E4A59,
        InkNormalActive => "inkNormalActive" = 0x2F3844,
        InkDark => "inkDark" = 0x252A31,
        InkDarkHover => "inkDarkHover" = 0x181B20,
        InkDarkActive => "inkDarkActive" = 0x0B0C0F,
    }
    Cloud {
        CloudLight => "cloudLight" = 0xF5F7F9,
        CloudLightHover => "cloudLightHover" = 0xE5EAEF,
        CloudLightActive => "cloudLightActive" = 0xD6DEE6,
        CloudNormal => "cloudNormal" = 0xE8EDF1,
        CloudNormalHover => "cloudNormalHover" = 0xDCE3E9,
        CloudNormalActive => "cloudNormalActive" = 0xCAD4DE,
        CloudDark => "cloudDark" = 0xBAC7D5,
    }
    White {
        White => "white" = 0xFFFFFF,
        WhiteHover => "whiteHover" = 0xF1F4F7,
        WhiteActive => "whiteActive" = 0xE7ECF1,
    }
}

impl Token {
    /// Number of tokens in the palette.
    pub const COUNT: usize = Token::ALL.len();

    /// Looks a token up by its design-token key.
    pub fn from_key(key: &str) -> Option<Token> {
        Token::ALL.iter().copied().find(|token| token.key() == key)
    }

    /// Human readable name, e.g. `"Product Light Hover"`.
    ///
    /// This is also the asset name used when exporting colorsets.
    pub fn description(self) -> String {
        key_words(self.key()).join(" ")
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Serializes as the design-token key.
impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Splits `productLightHover` into `["product", "Light", "Hover"]`.
pub(crate) fn split_camel_case(key: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (i, c) in key.char_indices() {
        if c.is_ascii_uppercase() && i > start {
            words.push(&key[start..i]);
            start = i;
        }
    }
    if start < key.len() {
        words.push(&key[start..]);
    }
    words
}

/// Capitalized words of a key: `productLightHover` gives `["Product", "Light", "Hover"]`.
pub(crate) fn key_words(key: &str) -> Vec<String> {
    split_camel_case(key).into_iter().map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercases the first letter: `ProductLight` becomes `productLight`.
pub(crate) fn lowercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in Token::ALL.iter().enumerate() {
            for b in &Token::ALL[i + 1..] {
                assert_ne!(a.key(), b.key(), "{:?} and {:?} share a key", a, b);
            }
        }
    }

    #[test]
    fn test_index_matches_position() {
        for (i, token) in Token::ALL.iter().enumerate() {
            assert_eq!(token.index(), i);
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Token::from_key("inkDark"), Some(Token::InkDark));
        assert_eq!(Token::from_key("InkDark"), None);
        assert_eq!(Token::from_key("inkDarkest"), None);
    }

    #[test]
    fn test_description() {
        assert_eq!(Token::ProductLightHover.description(), "Product Light Hover");
        assert_eq!(Token::White.description(), "White");
    }

    #[test]
    fn test_family_prefix_matches_key() {
        for token in Token::ALL {
            let prefix = lowercase_first(token.family().name());
            assert!(
                token.key().starts_with(&prefix),
                "{} should start with {}",
                token.key(),
                prefix
            );
        }
    }

    #[test]
    fn test_split_camel_case() {
        assert_eq!(split_camel_case("paletteBlueNormal"), vec!["palette", "Blue", "Normal"]);
        assert_eq!(split_camel_case("white"), vec!["white"]);
        assert!(split_camel_case("").is_empty());
    }

    #[test]
    fn test_key_words() {
        assert_eq!(key_words("socialFacebookHover"), vec!["Social", "Facebook", "Hover"]);
        assert_eq!(key_words("inkDarker"), vec!["Ink", "Darker"]);
    }

    #[test]
    fn test_hex_unpacks_channels() {
        assert_eq!(Token::BlueNormal.orbit_rgb(), Rgb::new(0x01, 0x72, 0xCB));
    }
}
