use std::sync::OnceLock;

use geo::LineString;
use serde::Deserialize;

/// An encoded polyline as served by the API, e.g. the path a route travels.
///
/// Decoding the points into a [`LineString`] costs CPU proportional to the
/// shape length, so it is deferred until a caller actually needs the geometry
/// and then computed at most once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolylineEntity {
    #[serde(default)]
    length: Option<u32>,
    points: Option<String>,
    #[serde(skip)]
    line: OnceLock<Option<LineString>>,
}

impl PolylineEntity {
    /// The raw encoded points, as received.
    pub fn points(&self) -> Option<&str> {
        self.points.as_deref()
    }

    /// Number of points the server claims the shape has.
    pub fn length(&self) -> Option<u32> {
        self.length
    }

    /// The decoded shape, or `None` when the points are absent or malformed.
    pub fn line_string(&self) -> Option<&LineString> {
        self.line
            .get_or_init(|| {
                let points = self.points.as_deref()?;
                match polyline::decode_polyline(points, 5) {
                    Ok(line) => Some(line),
                    Err(e) => {
                        log::warn!("Discarding undecodable polyline: {}", e);
                        None
                    }
                }
            })
            .as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity(value: serde_json::Value) -> PolylineEntity {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_decodes_known_shape() {
        let polyline = entity(json!({
            "length": 3,
            "levels": "",
            "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
        }));

        let line = polyline.line_string().expect("shape should decode");
        assert_eq!(line.0.len(), 3);
        assert!((line.0[0].y - 38.5).abs() < 1e-6);
        assert!((line.0[0].x - (-120.2)).abs() < 1e-6);

        // Second access returns the same decoded shape.
        assert!(std::ptr::eq(line, polyline.line_string().unwrap()));
    }

    #[test]
    fn test_absent_points_yield_no_shape() {
        let polyline = entity(json!({ "length": 0 }));
        assert!(polyline.line_string().is_none());
        assert!(polyline.points().is_none());
    }

    #[test]
    fn test_malformed_points_yield_no_shape() {
        // Truncated mid-coordinate: the final chunk still has its
        // continuation bit set.
        let polyline = entity(json!({ "points": "_p~iF~ps|U_" }));
        assert!(polyline.line_string().is_none());
    }
}
