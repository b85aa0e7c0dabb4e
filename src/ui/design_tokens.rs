// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the shell: palette, opacity, spacing, sizing,
typography, radii and shadows.

```
use oneui_shell::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
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

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.58);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.82);
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.94, 0.96);

    // One UI blue
    pub const PRIMARY_400: Color = Color::from_rgb(0.33, 0.58, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.45, 0.95);
    pub const PRIMARY_600: Color = Color::from_rgb(0.0, 0.36, 0.8);

    // App accents
    pub const CAMERA: Color = Color::from_rgb(0.2, 0.2, 0.24);
    pub const GALLERY: Color = Color::from_rgb(0.93, 0.27, 0.45);
    pub const MUSIC: Color = Color::from_rgb(0.56, 0.3, 0.95);
    pub const WEATHER: Color = Color::from_rgb(0.98, 0.66, 0.15);
    pub const CLOCK: Color = Color::from_rgb(0.15, 0.68, 0.55);
    pub const NOTES: Color = Color::from_rgb(0.98, 0.8, 0.2);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const SCRIM: f32 = 0.45;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Settings panel and app surfaces.
    pub const SURFACE: f32 = 0.96;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// App icon tile on the home grid.
    pub const ICON_TILE: f32 = 64.0;
    pub const ICON_GLYPH: f32 = 28.0;

    pub const STATUS_BAR_HEIGHT: f32 = 36.0;
    pub const SETTINGS_PANEL_WIDTH: f32 = 300.0;

    /// Icon columns by orientation.
    pub const GRID_COLUMNS_PORTRAIT: usize = 4;
    pub const GRID_COLUMNS_LANDSCAPE: usize = 6;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 12.0;
    /// One UI squircle-ish icon corner.
    pub const ICON: f32 = 18.0;
    pub const LG: f32 = 26.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);

    assert!(sizing::ICON_TILE > sizing::ICON_GLYPH);
    assert!(sizing::GRID_COLUMNS_LANDSCAPE > sizing::GRID_COLUMNS_PORTRAIT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
};
