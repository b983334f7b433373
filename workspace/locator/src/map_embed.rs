use crate::location::Location;

/// ArcGIS Instant Apps viewer hosting the flood risk layers.
pub const MAP_VIEWER_URL: &str = "https://www.arcgis.com/apps/instant/basic/index.html";

/// Application id of the published Patna flood risk map.
pub const MAP_APP_ID: &str = "1e2107f7a72443659d5ddef3355681f2";

/// Height of the iframe box as a percentage of its width (4:3).
pub const ASPECT_PADDING_PCT: u32 = 75;

/// What the page needs to embed the third-party map for a location.
///
/// The widget itself is opaque: the page only hands the locator to an iframe
/// and never talks to it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEmbed {
    pub src: String,
    pub title: String,
    pub allow_fullscreen: bool,
}

impl MapEmbed {
    pub fn for_location(location: &Location) -> Self {
        Self {
            src: embed_url(),
            title: format!("Flood Risk Map - {}", location.headline()),
            allow_fullscreen: true,
        }
    }

    /// Inline style for the wrapper that keeps the iframe at 4:3.
    pub fn container_style(&self) -> String {
        format!("padding-bottom: {}%", ASPECT_PADDING_PCT)
    }
}

pub fn embed_url() -> String {
    format!("{}?appid={}", MAP_VIEWER_URL, MAP_APP_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::PATNA_BIHAR;

    #[test]
    fn test_embed_for_patna() {
        let embed = MapEmbed::for_location(&PATNA_BIHAR);
        assert_eq!(
            embed.src,
            "https://www.arcgis.com/apps/instant/basic/index.html?appid=1e2107f7a72443659d5ddef3355681f2"
        );
        assert_eq!(embed.title, "Flood Risk Map - Patna, Bihar");
        assert!(embed.allow_fullscreen);
        assert_eq!(embed.container_style(), "padding-bottom: 75%");
    }
}
