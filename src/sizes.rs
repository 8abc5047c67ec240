//! The static iOS app icon size table.
//!
//! Every entry is a plain record: which device class it belongs to, its
//! logical point size, the scale factor, and what the icon is used for. The
//! table mirrors the slots Xcode shows for an `AppIcon.appiconset`, so a
//! catalog generated from it imports without "unassigned child" warnings.
//!
//! ```text
//! iphone         20pt @2x @3x    notification
//! iphone         29pt @2x @3x    settings
//! iphone         40pt @2x @3x    spotlight
//! iphone         60pt @2x @3x    home screen
//! ipad           20pt @1x @2x    notification
//! ipad           29pt @1x @2x    settings
//! ipad           40pt @1x @2x    spotlight
//! ipad           76pt @1x @2x    home screen
//! ipad         83.5pt @2x        home screen (iPad Pro)
//! ios-marketing  1024pt @1x      App Store
//! ```

use serde::{Deserialize, Serialize};

/// Device class tag used by the asset catalog (`idiom` in `Contents.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Idiom {
    Iphone,
    Ipad,
    IosMarketing,
}

impl Idiom {
    /// The catalog spelling: `iphone`, `ipad`, `ios-marketing`.
    pub fn as_str(self) -> &'static str {
        match self {
            Idiom::Iphone => "iphone",
            Idiom::Ipad => "ipad",
            Idiom::IosMarketing => "ios-marketing",
        }
    }
}

/// Where the platform shows an icon of this size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    Notification,
    Settings,
    Spotlight,
    HomeScreen,
    AppStore,
}

impl Usage {
    pub fn label(self) -> &'static str {
        match self {
            Usage::Notification => "notification",
            Usage::Settings => "settings",
            Usage::Spotlight => "spotlight",
            Usage::HomeScreen => "home screen",
            Usage::AppStore => "App Store",
        }
    }
}

/// One required output icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    pub idiom: Idiom,
    /// Logical size in points. Fractional for the iPad Pro slot (83.5).
    pub points: f32,
    /// Pixel multiplier: 1, 2 or 3.
    pub scale: u32,
    pub usage: Usage,
}

impl SizeSpec {
    const fn new(idiom: Idiom, points: f32, scale: u32, usage: Usage) -> Self {
        Self {
            idiom,
            points,
            scale,
            usage,
        }
    }

    /// Side length of the square output in pixels.
    pub fn pixels(&self) -> u32 {
        (self.points * self.scale as f32).round() as u32
    }

    /// The App Store listing icon has no scale variants and gets its own name.
    pub fn is_store_icon(&self) -> bool {
        self.idiom == Idiom::IosMarketing
    }
}

use Idiom::*;
use Usage::*;

/// Every icon an iOS app target needs, in catalog order.
pub const APP_ICON_SIZES: &[SizeSpec] = &[
    SizeSpec::new(Iphone, 20.0, 2, Notification),
    SizeSpec::new(Iphone, 20.0, 3, Notification),
    SizeSpec::new(Iphone, 29.0, 2, Settings),
    SizeSpec::new(Iphone, 29.0, 3, Settings),
    SizeSpec::new(Iphone, 40.0, 2, Spotlight),
    SizeSpec::new(Iphone, 40.0, 3, Spotlight),
    SizeSpec::new(Iphone, 60.0, 2, HomeScreen),
    SizeSpec::new(Iphone, 60.0, 3, HomeScreen),
    SizeSpec::new(Ipad, 20.0, 1, Notification),
    SizeSpec::new(Ipad, 20.0, 2, Notification),
    SizeSpec::new(Ipad, 29.0, 1, Settings),
    SizeSpec::new(Ipad, 29.0, 2, Settings),
    SizeSpec::new(Ipad, 40.0, 1, Spotlight),
    SizeSpec::new(Ipad, 40.0, 2, Spotlight),
    SizeSpec::new(Ipad, 76.0, 1, HomeScreen),
    SizeSpec::new(Ipad, 76.0, 2, HomeScreen),
    SizeSpec::new(Ipad, 83.5, 2, HomeScreen),
    SizeSpec::new(IosMarketing, 1024.0, 1, AppStore),
];

/// Largest pixel size in the table (the App Store icon).
pub fn largest_pixels(specs: &[SizeSpec]) -> u32 {
    specs.iter().map(SizeSpec::pixels).max().unwrap_or(0)
}
