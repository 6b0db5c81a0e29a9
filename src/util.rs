//! Terminal previews of resolved colors.

use console::Style;

use crate::palette::{Rgb, Rgba};

/// Channel levels of the xterm 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5F, 0x87, 0xAF, 0xD7, 0xFF];

/// Nearest xterm 256-color index for `color`.
///
/// Both the color cube (16..=231) and the gray ramp (232..=255) are
/// searched; ties go to the cube.
///
/// ```rust
/// use orbit_style::{ansi256, Rgb};
///
/// assert_eq!(ansi256(Rgb::new(0xFF, 0x00, 0x00)), 196);
/// assert_eq!(ansi256(Rgb::new(0x80, 0x80, 0x80)), 244);
/// ```
pub fn ansi256(color: Rgb) -> u8 {
    let channels = [color.r, color.g, color.b];

    let cube = channels.map(cube_step);
    let cube_color = cube.map(|step| CUBE_LEVELS[step as usize]);
    let cube_index = 16 + 36 * cube[0] + 6 * cube[1] + cube[2];

    let mean = channels.iter().map(|&c| c as u16).sum::<u16>() / 3;
    let gray_step = (mean.saturating_sub(3) / 10).min(23) as u8;
    let gray_level = 8 + 10 * gray_step;

    if distance(channels, cube_color) <= distance(channels, [gray_level; 3]) {
        cube_index
    } else {
        232 + gray_step
    }
}

fn cube_step(channel: u8) -> u8 {
    match channel {
        0..=47 => 0,
        48..=114 => 1,
        _ => (channel - 35) / 40,
    }
}

fn distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x as i32 - y as i32).pow(2) as u32)
        .sum()
}

/// Renders `text` in `label` on a `fill` background, both composited over
/// white first so translucent fills preview as they would on a white screen.
///
/// Styling is skipped when the terminal does not support colors.
pub fn swatch(text: &str, fill: Rgba, label: Rgba) -> String {
    let fill = fill.over(Rgb::WHITE);
    let label = label.over(fill);
    Style::new()
        .on_color256(ansi256(fill))
        .color256(ansi256(label))
        .apply_to(text)
        .to_string()
}
