//! Built-in wallpaper presets and background style resolution.

use serde::{Deserialize, Serialize};

/// Backdrop source for one preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallpaperSource {
    /// Remote photo rendered with `cover` sizing.
    Image(&'static str),
    /// CSS gradient painted directly as `background-image`.
    Gradient(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallpaperPreset {
    Ventura,
    Sonoma,
    Aurora,
    Graphite,
}

impl Default for WallpaperPreset {
    fn default() -> Self {
        Self::Ventura
    }
}

impl WallpaperPreset {
    pub const ALL: [WallpaperPreset; 4] = [
        WallpaperPreset::Ventura,
        WallpaperPreset::Sonoma,
        WallpaperPreset::Aurora,
        WallpaperPreset::Graphite,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Ventura => "ventura",
            Self::Sonoma => "sonoma",
            Self::Aurora => "aurora",
            Self::Graphite => "graphite",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ventura => "Ventura",
            Self::Sonoma => "Sonoma",
            Self::Aurora => "Aurora",
            Self::Graphite => "Graphite",
        }
    }

    pub const fn source(self) -> WallpaperSource {
        match self {
            Self::Ventura => WallpaperSource::Image(
                "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=1400&q=80",
            ),
            Self::Sonoma => WallpaperSource::Image(
                "https://images.unsplash.com/photo-1600585154340-0ef3c08dcdb6?auto=format&fit=crop&w=1400&q=80",
            ),
            Self::Aurora => WallpaperSource::Image(
                "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=1600&q=80",
            ),
            Self::Graphite => {
                WallpaperSource::Gradient("linear-gradient(135deg, #0f172a, #1e293b, #020617)")
            }
        }
    }

    /// Looks up a preset by id; unknown ids resolve to `None`.
    pub fn from_id(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|preset| preset.id() == raw)
    }

    /// Inline style for the wallpaper layer.
    pub fn css_background(self) -> String {
        match self.source() {
            WallpaperSource::Image(url) => format!(
                "background-image:url({url});background-size:cover;background-position:center;"
            ),
            WallpaperSource::Gradient(gradient) => format!("background-image:{gradient};"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn presets_resolve_by_id() {
        for preset in WallpaperPreset::ALL {
            assert_eq!(WallpaperPreset::from_id(preset.id()), Some(preset));
        }
        assert_eq!(WallpaperPreset::from_id("monterey"), None);
        assert_eq!(WallpaperPreset::default(), WallpaperPreset::Ventura);
    }

    #[test]
    fn gradient_presets_skip_cover_sizing() {
        assert_eq!(
            WallpaperPreset::Graphite.css_background(),
            "background-image:linear-gradient(135deg, #0f172a, #1e293b, #020617);"
        );
        assert!(WallpaperPreset::Sonoma
            .css_background()
            .contains("background-size:cover"));
    }
}
