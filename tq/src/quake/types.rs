//! GeoJSON feed types
//!
//! Only the fields the summary needs; everything else in the feed is ignored.

use serde::Deserialize;

/// Top-level GeoJSON feature collection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single earthquake feature
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Properties,
}

/// Earthquake properties of interest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    /// Human-readable location
    pub place: Option<String>,

    /// Magnitude; missing for some events
    pub mag: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_feed_payload() {
        let json = r#"{
            "type": "FeatureCollection",
            "metadata": {"title": "USGS All Earthquakes, Past Day"},
            "features": [
                {"type": "Feature", "properties": {"mag": 2.4, "place": "13km SSE of Bodie, CA", "time": 1700000000}},
                {"type": "Feature", "properties": {"mag": null, "place": "Somewhere"}}
            ]
        }"#;

        let collection: FeatureCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.features[0].properties.mag, Some(2.4));
        assert_eq!(
            collection.features[0].properties.place.as_deref(),
            Some("13km SSE of Bodie, CA")
        );
        assert_eq!(collection.features[1].properties.mag, None);
    }

    #[test]
    fn test_deserialize_empty_collection() {
        let collection: FeatureCollection = serde_json::from_str("{}").unwrap();
        assert!(collection.features.is_empty());
    }

    #[test]
    fn test_deserialize_feature_without_properties() {
        let collection: FeatureCollection =
            serde_json::from_str(r#"{"features": [{"type": "Feature"}]}"#).unwrap();
        assert_eq!(collection.features[0].properties.mag, None);
        assert_eq!(collection.features[0].properties.place, None);
    }
}
