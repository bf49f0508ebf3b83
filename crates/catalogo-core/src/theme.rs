// ── Theme store ──
//
// Light/dark palette plus a responsive font-size table. Read-only for
// consumers; only the setters and OS appearance events change it. Has no
// interaction with product data.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tokio::sync::watch;
use tracing::debug;

use crate::stream::StateStream;

/// Physical width, in pixels, at or below which the compact font table applies.
pub const COMPACT_WIDTH_PX: f64 = 720.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Resolve a device-reported scheme. Anything but dark is light.
    pub fn from_device(scheme: Option<ColorScheme>) -> Self {
        match scheme {
            Some(ColorScheme::Dark) => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }
}

/// Application lifecycle state as reported by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AppState {
    Active,
    Background,
    Inactive,
}

/// Logical screen width and pixel density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    pub width: f64,
    pub scale: f64,
}

impl ScreenMetrics {
    pub fn new(width: f64, scale: f64) -> Self {
        Self { width, scale }
    }

    pub fn physical_width(&self) -> f64 {
        self.width * self.scale
    }

    pub fn is_compact(&self) -> bool {
        self.physical_width() <= COMPACT_WIDTH_PX
    }
}

/// Navigation palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationColors {
    pub primary: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub notification: &'static str,
}

/// Application palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalColors {
    pub primary: &'static str,
    pub primary_text: &'static str,
    pub success: &'static str,
    pub success_text: &'static str,
    pub info: &'static str,
    pub info_text: &'static str,
    pub warning: &'static str,
    pub warning_text: &'static str,
    pub danger: &'static str,
    pub danger_text: &'static str,
    pub price_warning: &'static str,
    pub price_featured: &'static str,
    pub grey_light: &'static str,
    pub grey_medium: &'static str,
    pub grey_dark: &'static str,
    pub white: &'static str,
    pub black: &'static str,
}

const LIGHT_PALETTE: GlobalColors = GlobalColors {
    primary: "#dae6cf",
    primary_text: "#8CB369",
    success: "#00C851",
    success_text: "#007E33",
    info: "#33b5e5",
    info_text: "#0099CC",
    warning: "#ffbb33",
    warning_text: "#FF8800",
    danger: "#ff4444",
    danger_text: "#CC0000",
    price_warning: "#CC0000",
    price_featured: "#007E33",
    grey_light: "#e6e6e6",
    grey_medium: "#cacaca",
    grey_dark: "#8a8a8a",
    white: "#ffffff",
    black: "#131313",
};

const DARK_PALETTE: GlobalColors = GlobalColors {
    primary: "green",
    primary_text: "white",
    ..LIGHT_PALETTE
};

const LIGHT_NAVIGATION: NavigationColors = NavigationColors {
    primary: "black",
    background: "white",
    card: "red",
    text: "orange",
    border: "pink",
    notification: "teal",
};

const DARK_NAVIGATION: NavigationColors = NavigationColors {
    primary: "white",
    background: "black",
    ..LIGHT_NAVIGATION
};

/// Responsive font and icon sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizes {
    pub button_menu: u16,
    pub button_menu_big: u16,
    pub xxsmall: u16,
    pub xsmall: u16,
    pub small: u16,
    pub normal: u16,
    pub large: u16,
    pub xlarge: u16,
    pub xxlarge: u16,
    pub xxxlarge: u16,
    pub icon_small: u16,
    pub icon_normal: u16,
    pub icon_large: u16,
    pub icon_large25: u16,
    pub icon_large30: u16,
    pub icon_large33: u16,
    pub icon_xtra_large: u16,
    pub icon_header_bar: u16,
    pub icon_card: u16,
}

impl FontSizes {
    pub const COMPACT: Self = Self {
        button_menu: 10,
        button_menu_big: 16,
        xxsmall: 6,
        xsmall: 7,
        small: 8,
        normal: 10,
        large: 12,
        xlarge: 14,
        xxlarge: 16,
        xxxlarge: 18,
        icon_small: 8,
        icon_normal: 12,
        icon_large: 18,
        icon_large25: 23,
        icon_large30: 28,
        icon_large33: 31,
        icon_xtra_large: 36,
        icon_header_bar: 30,
        icon_card: 28,
    };

    pub const REGULAR: Self = Self {
        button_menu: 14,
        button_menu_big: 20,
        xxsmall: 7,
        xsmall: 8,
        small: 10,
        normal: 12,
        large: 14,
        xlarge: 16,
        xxlarge: 18,
        xxxlarge: 20,
        icon_small: 10,
        icon_normal: 14,
        icon_large: 20,
        icon_large25: 25,
        icon_large30: 30,
        icon_large33: 33,
        icon_xtra_large: 40,
        icon_header_bar: 35,
        icon_card: 30,
    };

    pub fn for_width(metrics: ScreenMetrics) -> Self {
        if metrics.is_compact() {
            Self::COMPACT
        } else {
            Self::REGULAR
        }
    }
}

/// Complete theme snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeState {
    pub name: ColorScheme,
    pub dark: bool,
    pub colors: NavigationColors,
    pub palette: GlobalColors,
    pub fonts: FontSizes,
}

impl ThemeState {
    pub fn build(scheme: ColorScheme, metrics: ScreenMetrics) -> Self {
        let (colors, palette) = match scheme {
            ColorScheme::Light => (LIGHT_NAVIGATION, LIGHT_PALETTE),
            ColorScheme::Dark => (DARK_NAVIGATION, DARK_PALETTE),
        };
        Self {
            name: scheme,
            dark: scheme == ColorScheme::Dark,
            colors,
            palette,
            fonts: FontSizes::for_width(metrics),
        }
    }
}

/// Process-wide theme service.
pub struct ThemeStore {
    metrics: ScreenMetrics,
    state: watch::Sender<Arc<ThemeState>>,
}

impl ThemeStore {
    /// Derive the initial theme from the device color scheme.
    pub fn new(metrics: ScreenMetrics, device_scheme: Option<ColorScheme>) -> Self {
        let initial = ThemeState::build(ColorScheme::from_device(device_scheme), metrics);
        let (state, _) = watch::channel(Arc::new(initial));
        Self { metrics, state }
    }

    pub fn current(&self) -> Arc<ThemeState> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> StateStream<ThemeState> {
        StateStream::new(self.state.subscribe())
    }

    pub fn set_light_theme(&self) {
        self.set(ColorScheme::Light);
    }

    pub fn set_dark_theme(&self) {
        self.set(ColorScheme::Dark);
    }

    /// React to an OS appearance or lifecycle event.
    ///
    /// Only applied when the app becomes [`AppState::Active`]. Returns
    /// whether the theme was re-evaluated.
    pub fn on_appearance_change(&self, app_state: AppState, scheme: Option<ColorScheme>) -> bool {
        if app_state != AppState::Active {
            debug!(%app_state, "appearance change ignored");
            return false;
        }
        self.set(ColorScheme::from_device(scheme));
        true
    }

    fn set(&self, scheme: ColorScheme) {
        let next = Arc::new(ThemeState::build(scheme, self.metrics));
        self.state.send_if_modified(|current| {
            if **current == *next {
                return false;
            }
            *current = next;
            true
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const PHONE: ScreenMetrics = ScreenMetrics {
        width: 360.0,
        scale: 2.0,
    };
    const TABLET: ScreenMetrics = ScreenMetrics {
        width: 800.0,
        scale: 2.0,
    };

    #[test]
    fn font_breakpoint_is_inclusive() {
        assert_eq!(FontSizes::for_width(PHONE), FontSizes::COMPACT);
        assert_eq!(FontSizes::for_width(ScreenMetrics::new(360.5, 2.0)), FontSizes::REGULAR);
        assert_eq!(FontSizes::for_width(TABLET).icon_card, 30);
    }

    #[test]
    fn initial_theme_follows_device() {
        assert!(ThemeStore::new(PHONE, Some(ColorScheme::Dark)).current().dark);
        assert!(!ThemeStore::new(PHONE, None).current().dark);
    }

    #[test]
    fn dark_palette_differs_only_in_primary() {
        let dark = ThemeState::build(ColorScheme::Dark, PHONE);
        assert_eq!(dark.palette.primary, "green");
        assert_eq!(dark.palette.primary_text, "white");
        assert_eq!(dark.palette.danger, LIGHT_PALETTE.danger);
        assert_eq!(dark.colors.background, "black");
        assert_eq!(dark.colors.card, "red");
    }

    #[test]
    fn appearance_only_applies_when_active() {
        let store = ThemeStore::new(PHONE, Some(ColorScheme::Light));

        assert!(!store.on_appearance_change(AppState::Background, Some(ColorScheme::Dark)));
        assert!(!store.current().dark);

        assert!(store.on_appearance_change(AppState::Active, Some(ColorScheme::Dark)));
        assert!(store.current().dark);
    }

    #[test]
    fn setters_switch_theme() {
        let store = ThemeStore::new(TABLET, None);
        store.set_dark_theme();
        assert_eq!(store.current().name, ColorScheme::Dark);
        store.set_light_theme();
        assert_eq!(store.current().colors.primary, "black");
    }

    #[tokio::test]
    async fn subscribers_see_theme_changes() {
        let store = ThemeStore::new(PHONE, None);
        let mut stream = store.subscribe();
        store.set_dark_theme();
        let next = stream.changed().await.unwrap();
        assert!(next.dark);
    }

    #[test]
    fn scheme_parses_case_insensitively() {
        assert_eq!(ColorScheme::from_str("Dark").unwrap(), ColorScheme::Dark);
    }
}
