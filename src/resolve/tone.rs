//! Status color families and their active steps.

use crate::palette::Token;
use crate::state::Status;

/// The tones of one color family, each paired with its pressed variant.
///
/// The active step is a fixed palette token rather than a computed shade,
/// so pressed colors always match the brand palette exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneScale {
    pub light: Token,
    pub light_active: Token,
    pub normal: Token,
    pub normal_active: Token,
    pub dark: Token,
    pub dark_active: Token,
    pub darker: Token,
}

/// The color family for a status; no status means the product family.
pub const fn tone_scale(status: Option<Status>) -> ToneScale {
    match status {
        None => ToneScale {
            light: Token::ProductLight,
            light_active: Token::ProductLightActive,
            normal: Token::ProductNormal,
            normal_active: Token::ProductNormalActive,
            dark: Token::ProductDark,
            dark_active: Token::ProductDarkActive,
            darker: Token::ProductDarker,
        },
        Some(Status::Info) => ToneScale {
            light: Token::BlueLight,
            light_active: Token::BlueLightActive,
            normal: Token::BlueNormal,
            normal_active: Token::BlueNormalActive,
            dark: Token::BlueDark,
            dark_active: Token::BlueDarkActive,
            darker: Token::BlueDarker,
        },
        Some(Status::Success) => ToneScale {
            light: Token::GreenLight,
            light_active: Token::GreenLightActive,
            normal: Token::GreenNormal,
            normal_active: Token::GreenNormalActive,
            dark: Token::GreenDark,
            dark_active: Token::GreenDarkActive,
            darker: Token::GreenDarker,
        },
        Some(Status::Warning) => ToneScale {
            light: Token::OrangeLight,
            light_active: Token::OrangeLightActive,
            normal: Token::OrangeNormal,
            normal_active: Token::OrangeNormalActive,
            dark: Token::OrangeDark,
            dark_active: Token::OrangeDarkActive,
            darker: Token::OrangeDarker,
        },
        Some(Status::Critical) => ToneScale {
            light: Token::RedLight,
            light_active: Token::RedLightActive,
            normal: Token::RedNormal,
            normal_active: Token::RedNormalActive,
            dark: Token::RedDark,
            dark_active: Token::RedDarkActive,
            darker: Token::RedDarker,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Family, Palette};

    #[test]
    fn test_each_scale_stays_in_one_family() {
        let statuses = [None]
            .into_iter()
            .chain(Status::ALL.into_iter().map(Some));
        for status in statuses {
            let scale = tone_scale(status);
            let family = scale.normal.family();
            for token in [
                scale.light,
                scale.light_active,
                scale.dark,
                scale.dark_active,
                scale.darker,
            ] {
                assert_eq!(token.family(), family, "{:?} leaks out of {:?}", token, family);
            }
        }
    }

    #[test]
    fn test_missing_status_is_product() {
        assert_eq!(tone_scale(None).normal.family(), Family::Product);
        assert_eq!(tone_scale(Some(Status::Critical)).normal.family(), Family::Red);
    }

    #[test]
    fn test_active_steps_are_darker_in_orbit_palette() {
        let palette = Palette::orbit();
        let statuses = [None]
            .into_iter()
            .chain(Status::ALL.into_iter().map(Some));
        for status in statuses {
            let scale = tone_scale(status);
            for (base, active) in [
                (scale.light, scale.light_active),
                (scale.normal, scale.normal_active),
                (scale.dark, scale.dark_active),
            ] {
                assert!(
                    palette.get(active).relative_luminance() < palette.get(base).relative_luminance(),
                    "{:?} should be darker than {:?} for {:?}",
                    active,
                    base,
                    status
                );
            }
        }
    }
}
