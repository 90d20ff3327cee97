use crate::model::feature::SignBearing;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://haukauntrie.de/online/api/staticmaps/staticmap.php";

/// parameters of the static map image shown to the reviewer. the renderer
/// draws a marker icon rotated to the inferred bearing.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    pub base_url: String,
    pub zoom: u8,
    /// image size as `<width>x<height>` in pixels
    pub size: String,
    pub maptype: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            zoom: 19,
            size: String::from("480x312"),
            maptype: String::from("mapnikde"),
        }
    }
}

impl PreviewConfig {
    /// static map URL centered on the sign with a marker such as `icon_stop_270`
    pub fn url(&self, sign: &SignBearing) -> String {
        format!(
            "{}?center={},{}&zoom={}&size={}&maptype={}&markers={},{},icon_{}_{}",
            self.base_url,
            sign.lat,
            sign.lon,
            self.zoom,
            self.size,
            self.maptype,
            sign.lat,
            sign.lon,
            sign.kind.marker_icon(),
            sign.int_angle()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PreviewConfig;
    use crate::{
        algorithm::direction::SignDirection,
        model::{
            feature::{SignBearing, SignKind},
            osm::graph::{OsmNodeId, OsmWayId},
        },
    };

    fn sign(kind: SignKind, bearing_degrees: f64) -> SignBearing {
        SignBearing {
            node_id: OsmNodeId(42),
            kind,
            way_id: OsmWayId(7),
            bearing_degrees,
            direction: SignDirection::Forward,
            lat: 52.5,
            lon: 13.4,
        }
    }

    #[test]
    fn test_default_url() {
        let url = PreviewConfig::default().url(&sign(SignKind::GiveWay, 271.9));
        assert_eq!(
            url,
            "https://haukauntrie.de/online/api/staticmaps/staticmap.php?center=52.5,13.4&zoom=19&size=480x312&maptype=mapnikde&markers=52.5,13.4,icon_yield_271"
        );
    }

    #[test]
    fn test_marker_icon_per_kind() {
        let conf = PreviewConfig::default();
        assert!(conf.url(&sign(SignKind::Stop, 0.4)).ends_with("icon_stop_0"));
        assert!(conf
            .url(&sign(SignKind::GiveWay, 359.99))
            .ends_with("icon_yield_359"));
    }
}
