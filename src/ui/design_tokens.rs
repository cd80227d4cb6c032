// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and radius used by the portfolio screens.

## Organization

- **Palette**: Base colors (violet brand, neutral darks, light surfaces, status)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use portfolio::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Brand (violet / indigo)
    pub const VIOLET_100: Color = Color::from_rgb8(0xed, 0xe9, 0xfe);
    pub const VIOLET_500: Color = Color::from_rgb8(0x8b, 0x5c, 0xf6);
    pub const INDIGO_950: Color = Color::from_rgb8(0x1e, 0x1b, 0x4b);

    // Dark mode neutrals
    pub const NEUTRAL_950: Color = Color::from_rgb8(0x1a, 0x1a, 0x1a);
    pub const NEUTRAL_900: Color = Color::from_rgb8(0x2a, 0x2a, 0x2a);
    pub const NEUTRAL_800: Color = Color::from_rgb8(0x3a, 0x3a, 0x3a);
    pub const NEUTRAL_700: Color = Color::from_rgb8(0x4a, 0x4a, 0x4a);
    pub const NEUTRAL_400: Color = Color::from_rgb8(0xa0, 0xa0, 0xa0);
    pub const NEUTRAL_300: Color = Color::from_rgb8(0xd0, 0xd0, 0xd0);

    // Light mode surfaces and text
    pub const LAVENDER_50: Color = Color::from_rgb8(0xfa, 0xf7, 0xff);
    pub const SLATE_50: Color = Color::from_rgb8(0xf8, 0xfa, 0xfc);
    pub const SLATE_200: Color = Color::from_rgb8(0xe2, 0xe8, 0xf0);
    pub const GRAY_100: Color = Color::from_rgb8(0xf3, 0xf4, 0xf6);
    pub const GRAY_500: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
    pub const GRAY_600: Color = Color::from_rgb8(0x4b, 0x55, 0x63);

    // Accents
    pub const AMBER_400: Color = Color::from_rgb8(0xfb, 0xbf, 0x24);
    pub const AMBER_100: Color = Color::from_rgb8(0xfe, 0xf3, 0xc7);
    pub const GREEN_50: Color = Color::from_rgb8(0xf0, 0xfd, 0xf4);

    // Status
    pub const EMERALD_500: Color = Color::from_rgb8(0x10, 0xb9, 0x81);
    pub const AMBER_500: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Modal backdrop dimming the screen behind a dialog.
    pub const BACKDROP: f32 = 0.5;
    pub const SHADOW_LIGHT: f32 = 0.15;
    pub const SHADOW_DARK: f32 = 0.3;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Theme toggle glyph.
    pub const ICON_MD: f32 = 24.0;
    /// Social link badge on the contact screen.
    pub const SOCIAL_BADGE: f32 = 50.0;
    /// Profile picture placeholder on the home header.
    pub const AVATAR: f32 = 120.0;
    /// Project emoji on cards.
    pub const EMOJI: f32 = 32.0;
    /// Project emoji in the detail dialog.
    pub const EMOJI_LG: f32 = 48.0;
    /// Document cover placeholder height.
    pub const COVER_HEIGHT: f32 = 160.0;
    /// Upper bound on dialog width.
    pub const MODAL_MAX_WIDTH: f32 = 350.0;
    /// Upper bound on the readable content column.
    pub const CONTENT_MAX_WIDTH: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: screen headings and dialog titles
    //! - Body: primary content
    //! - Caption: tags, badges, supporting text

    /// Screen heading and profile name.
    pub const TITLE_LG: f32 = 28.0;

    /// Section and dialog titles.
    pub const TITLE_MD: f32 = 20.0;

    /// Profile tagline.
    pub const TITLE_SM: f32 = 18.0;

    /// Call-to-action labels and social names.
    pub const BODY_LG: f32 = 16.0;

    /// Descriptions and about text.
    pub const BODY: f32 = 15.0;

    /// Secondary labels.
    pub const BODY_SM: f32 = 14.0;

    /// Tags, badges, email addresses.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 15.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 25.0;
    pub const XXL: f32 = 30.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const CARD_OFFSET: Vector = Vector { x: 0.0, y: 2.0 };
    pub const CARD_BLUR: f32 = 8.0;

    pub const HEADER_OFFSET: Vector = Vector { x: 0.0, y: 4.0 };
    pub const HEADER_BLUR: f32 = 12.0;

    pub const MODAL_OFFSET: Vector = Vector { x: 0.0, y: 10.0 };
    pub const MODAL_BLUR: f32 = 20.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::LG > radius::MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_violet_matches_hex() {
        let violet = palette::VIOLET_500;
        assert!((violet.r - 0x8b as f32 / 255.0).abs() < 1e-6);
        assert!(violet.b > violet.r);
    }
}
