//! Static reference data: the five-city ROI comparison and the amenity cards.
//!
//! Both lists are read-only for the session; the UI only ever iterates them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// ROI comparison
// =============================================================================

/// One city's appreciation / tourism-growth figures for the investment chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub city: String,
    pub appreciation_pct: f32,
    pub tourism_growth_pct: f32,
}

/// The comparison table. The first entry is the project's own market and is
/// highlighted in the chart.
#[derive(Resource, Default, Debug, Clone)]
pub struct RoiTable(pub Vec<MarketData>);

// =============================================================================
// Amenities
// =============================================================================

/// Closed icon set for amenity cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmenityIcon {
    TreePine,
    Umbrella,
    HeartHandshake,
    ShieldCheck,
}

impl AmenityIcon {
    /// Glyph rendered in the card header.
    pub fn glyph(self) -> &'static str {
        match self {
            AmenityIcon::TreePine => "🌲",
            AmenityIcon::Umbrella => "⛱",
            AmenityIcon::HeartHandshake => "🤝",
            AmenityIcon::ShieldCheck => "🛡",
        }
    }
}

/// A lifestyle amenity card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub title: String,
    pub description: String,
    pub icon: AmenityIcon,
}

#[derive(Resource, Default, Debug, Clone)]
pub struct AmenityList(pub Vec<Amenity>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_glyphs_distinct() {
        let icons = [
            AmenityIcon::TreePine,
            AmenityIcon::Umbrella,
            AmenityIcon::HeartHandshake,
            AmenityIcon::ShieldCheck,
        ];
        for i in 0..icons.len() {
            for j in (i + 1)..icons.len() {
                assert_ne!(icons[i].glyph(), icons[j].glyph());
            }
        }
    }
}
