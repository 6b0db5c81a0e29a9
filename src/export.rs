//! Platform exports of a palette.
//!
//! Two outputs are supported:
//!
//! - A source listing exposing every color as a named platform color
//!   ([`render_listing`]), grouped by the first word of its key.
//! - An asset catalog directory with one colorset per color
//!   ([`write_xcassets`]), which the listing's named colors load from.
//!
//! Both are driven by a [`ColorCatalog`] and list colors sorted by key, so
//! regenerating from the same tokens is byte-for-byte stable. The `white`
//! token is never exported; platforms provide their own.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use minijinja::Environment;
use serde::Serialize;

use crate::error::ThemeError;
use crate::palette::{key_words, Palette, Rgb, TokenImport};

const LISTING_TEMPLATE: &str = r#"/// Generated and updated by 'orbit-style tokens export'
// swiftlint:disable:previous orphaned_doc_comment

import {{ framework }}

public extension {{ type_name }} {
{% for group in groups %}

    // MARK: - {{ group.name }}
{% for color in group.colors %}
    static let {{ color.name }} = {{ color.initializer }}
{% endfor %}
{% endfor %}
}
"#;

const COLORSET_TEMPLATE: &str = r#"{
  "colors" : [
    {
      "color" : {
        "color-space" : "srgb",
        "components" : {
          "alpha" : "1.000",
          "blue" : "0x{{ blue }}",
          "green" : "0x{{ green }}",
          "red" : "0x{{ red }}"
        }
      },
      "idiom" : "universal"
    }
  ],
  "info" : {
    "author" : "xcode",
    "version" : 1
  }
}
"#;

const CATALOG_INFO: &str = r#"{
  "info" : {
    "author" : "xcode",
    "version" : 1
  }
}
"#;

/// Never exported.
const RESERVED_KEY: &str = "white";

/// Target of a source listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ListingFormat {
    /// `public extension Color` for SwiftUI.
    #[cfg_attr(feature = "cli", value(name = "swiftui"))]
    SwiftUi,
    /// `public extension UIColor` for UIKit.
    #[cfg_attr(feature = "cli", value(name = "uikit"))]
    UiKit,
}

impl ListingFormat {
    fn framework(self) -> &'static str {
        match self {
            ListingFormat::SwiftUi => "SwiftUI",
            ListingFormat::UiKit => "UIKit",
        }
    }

    fn type_name(self) -> &'static str {
        match self {
            ListingFormat::SwiftUi => "Color",
            ListingFormat::UiKit => "UIColor",
        }
    }

    fn initializer(self, description: &str) -> String {
        match self {
            ListingFormat::SwiftUi => format!("Color(\"{}\", bundle: .current)", description),
            ListingFormat::UiKit => format!("fromResource(named: \"{}\")", description),
        }
    }
}

/// The named colors an export writes, ordered by key.
///
/// Keys follow [`Token::key`](crate::Token::key): `productLightHover`, or
/// any other camel-case key carried over from a design-token export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorCatalog {
    colors: BTreeMap<String, Rgb>,
}

impl ColorCatalog {
    /// Every token of `palette`.
    pub fn from_palette(palette: &Palette) -> Self {
        palette
            .iter()
            .map(|(token, rgb)| (token.key().to_string(), rgb))
            .collect()
    }

    /// Exactly the colors a design-token export defines, known or not.
    pub fn from_import(import: &TokenImport) -> Self {
        let known = import
            .imported
            .iter()
            .map(|&token| (token.key().to_string(), import.palette.get(token)));
        let unknown = import.unknown.iter().map(|(key, &rgb)| (key.clone(), rgb));
        known.chain(unknown).collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<Rgb> {
        self.colors.get(key).copied()
    }

    /// Colors in export order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> + '_ {
        self.colors.iter().map(|(key, &rgb)| (key.as_str(), rgb))
    }

    fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> + '_ {
        self.iter().map(|(key, rgb)| {
            let words = key_words(key);
            CatalogEntry {
                key,
                group: words.first().cloned().unwrap_or_default(),
                description: words.join(" "),
                rgb,
            }
        })
    }
}

impl FromIterator<(String, Rgb)> for ColorCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Rgb)>>(iter: I) -> Self {
        Self {
            colors: iter
                .into_iter()
                .filter(|(key, _)| key != RESERVED_KEY && !key.is_empty())
                .collect(),
        }
    }
}

impl From<&Palette> for ColorCatalog {
    fn from(palette: &Palette) -> Self {
        Self::from_palette(palette)
    }
}

struct CatalogEntry<'a> {
    key: &'a str,
    group: String,
    description: String,
    rgb: Rgb,
}

#[derive(Serialize)]
struct ListingGroup {
    name: String,
    colors: Vec<ListingColor>,
}

#[derive(Serialize)]
struct ListingColor {
    name: String,
    initializer: String,
}

fn templates() -> Result<Environment<'static>, ThemeError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_template("listing", LISTING_TEMPLATE)?;
    env.add_template("colorset", COLORSET_TEMPLATE)?;
    Ok(env)
}

/// Renders the source listing for every color of `catalog`.
///
/// The listing only names colors; values live in the asset catalog.
///
/// ```rust
/// use orbit_style::export::{render_listing, ColorCatalog, ListingFormat};
/// use orbit_style::Palette;
///
/// let catalog = ColorCatalog::from_palette(&Palette::orbit());
/// let listing = render_listing(ListingFormat::SwiftUi, &catalog).unwrap();
/// assert!(listing.contains("    // MARK: - Blue\n    static let blueDark = "));
/// ```
pub fn render_listing(format: ListingFormat, catalog: &ColorCatalog) -> Result<String, ThemeError> {
    let mut groups: Vec<ListingGroup> = Vec::new();

    for entry in catalog.entries() {
        if groups.last().map(|group| group.name.as_str()) != Some(entry.group.as_str()) {
            groups.push(ListingGroup {
                name: entry.group.clone(),
                colors: Vec::new(),
            });
        }
        if let Some(group) = groups.last_mut() {
            group.colors.push(ListingColor {
                name: entry.key.to_string(),
                initializer: format.initializer(&entry.description),
            });
        }
    }

    let listing = templates()?.get_template("listing")?.render(minijinja::context! {
        framework => format.framework(),
        type_name => format.type_name(),
        groups => groups,
    })?;
    Ok(listing)
}

/// The `Contents.json` of a single colorset, in Xcode's own layout.
pub fn colorset_contents(rgb: Rgb) -> Result<String, ThemeError> {
    render_colorset(&templates()?, rgb)
}

fn render_colorset(env: &Environment<'_>, rgb: Rgb) -> Result<String, ThemeError> {
    let (red, green, blue) = rgb.hex_components();
    let contents = env.get_template("colorset")?.render(minijinja::context! {
        red => red,
        green => green,
        blue => blue,
    })?;
    Ok(contents)
}

/// Writes an asset catalog at `dir`, replacing any existing one.
///
/// Layout: `<dir>/<Group>/Contents.json` and
/// `<dir>/<Group>/<Description>.colorset/Contents.json`.
pub fn write_xcassets(catalog: &ColorCatalog, dir: &Path) -> Result<(), ThemeError> {
    let env = templates()?;

    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| ThemeError::io(dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| ThemeError::io(dir, e))?;

    for entry in catalog.entries() {
        let group_dir = dir.join(&entry.group);
        let colorset_dir = group_dir.join(format!("{}.colorset", entry.description));
        fs::create_dir_all(&colorset_dir).map_err(|e| ThemeError::io(&colorset_dir, e))?;

        let group_contents = group_dir.join("Contents.json");
        fs::write(&group_contents, CATALOG_INFO).map_err(|e| ThemeError::io(&group_contents, e))?;

        let colorset_path = colorset_dir.join("Contents.json");
        fs::write(&colorset_path, render_colorset(&env, entry.rgb)?)
            .map_err(|e| ThemeError::io(&colorset_path, e))?;
    }

    tracing::debug!(path = %dir.display(), colors = catalog.len(), "wrote asset catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Token;

    fn orbit_listing(format: ListingFormat) -> String {
        render_listing(format, &ColorCatalog::from_palette(&Palette::orbit())).unwrap()
    }

    #[test]
    fn test_swiftui_listing() {
        let listing = orbit_listing(ListingFormat::SwiftUi);
        assert!(listing.contains("import SwiftUI"));
        assert!(listing.contains("public extension Color {"));
        assert!(listing.contains("    // MARK: - Product\n"));
        assert!(listing.contains(
            "    static let productLightHover = Color(\"Product Light Hover\", bundle: .current)\n"
        ));
        assert!(listing.ends_with("\n}\n"));
    }

    #[test]
    fn test_uikit_listing() {
        let listing = orbit_listing(ListingFormat::UiKit);
        assert!(listing.contains("import UIKit"));
        assert!(listing.contains("public extension UIColor {"));
        assert!(listing.contains("static let inkDark = fromResource(named: \"Ink Dark\")"));
    }

    #[test]
    fn test_listing_skips_white_only() {
        let listing = orbit_listing(ListingFormat::SwiftUi);
        assert!(!listing.contains("static let white ="));
        assert!(listing.contains("static let whiteActive ="));
        assert_eq!(listing.matches("static let ").count(), Token::COUNT - 1);
    }

    #[test]
    fn test_listing_groups_and_entries_are_sorted_by_key() {
        let listing = orbit_listing(ListingFormat::SwiftUi);

        let groups: Vec<&str> = listing
            .lines()
            .filter_map(|line| line.trim().strip_prefix("// MARK: - "))
            .collect();
        assert_eq!(
            groups,
            ["Blue", "Cloud", "Green", "Ink", "Orange", "Product", "Red", "White"]
        );

        let names: Vec<&str> = listing
            .lines()
            .filter_map(|line| line.trim().strip_prefix("static let "))
            .filter_map(|rest| rest.split(' ').next())
            .collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names[0], "blueDark");
    }

    #[test]
    fn test_listing_groups_are_separated() {
        let listing = orbit_listing(ListingFormat::SwiftUi);
        assert!(listing.starts_with("/// Generated and updated by 'orbit-style tokens export'\n"));
        assert!(listing.contains("public extension Color {\n\n    // MARK: - Blue\n    static let blueDark"));
        assert!(listing.contains("\n\n    // MARK: - Cloud\n    static let cloudDark"));
    }

    #[test]
    fn test_catalog_keeps_unknown_keys() {
        let catalog: ColorCatalog = [
            ("socialFacebook".to_string(), Rgb::new(59, 89, 152)),
            ("white".to_string(), Rgb::WHITE),
            ("blueNormal".to_string(), Rgb::new(1, 2, 3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("white"), None);

        let listing = render_listing(ListingFormat::UiKit, &catalog).unwrap();
        assert!(listing.contains(
            "    // MARK: - Social\n    static let socialFacebook = fromResource(named: \"Social Facebook\")\n"
        ));
        assert!(listing.find("MARK: - Blue") < listing.find("MARK: - Social"));
    }

    #[test]
    fn test_colorset_contents() {
        let contents = colorset_contents(Rgb::new(0x00, 0xA9, 0x91)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let components = &value["colors"][0]["color"]["components"];
        assert_eq!(components["red"], "0x00");
        assert_eq!(components["green"], "0xA9");
        assert_eq!(components["blue"], "0x91");
        assert_eq!(components["alpha"], "1.000");
        assert_eq!(value["colors"][0]["idiom"], "universal");
    }

    #[test]
    fn test_colorset_contents_uses_xcode_layout() {
        let contents = colorset_contents(Rgb::new(0xD2, 0x1C, 0x1C)).unwrap();
        assert!(contents.starts_with("{\n  \"colors\" : [\n    {\n"));
        assert!(contents.contains("          \"red\" : \"0xD2\"\n"));
        assert!(contents.ends_with("    \"version\" : 1\n  }\n}\n"));
    }
}
