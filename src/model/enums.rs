use std::fmt;

use serde::Deserialize;
use serde_repr::Deserialize_repr;

/// The reference categories an API response can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityType {
    Agency,
    Route,
    Situation,
    Stop,
    Trip,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EntityType::Agency => "Agency",
            EntityType::Route => "Route",
            EntityType::Situation => "Situation",
            EntityType::Stop => "Stop",
            EntityType::Trip => "Trip",
        };
        write!(f, "{}", name)
    }
}

/// The mode of travel used on a route, from the numeric `type` field.
///
/// Values follow the GTFS route type codes. Agencies occasionally serve
/// extended codes, which map to [`RouteType::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize_repr)]
#[repr(i32)]
pub enum RouteType {
    LightRail = 0,
    Subway = 1,
    Rail = 2,
    Bus = 3,
    Ferry = 4,
    CableCar = 5,
    Gondola = 6,
    Funicular = 7,
    #[serde(other)]
    Unknown = 999,
}

/// Whether a record describes a simple stop or part of a larger station.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize_repr)]
#[repr(i32)]
pub enum LocationType {
    Stop = 0,
    Station = 1,
    Entrance = 2,
    #[serde(other)]
    Unknown = 999,
}

impl Default for LocationType {
    fn default() -> Self {
        LocationType::Stop
    }
}

/// Whether wheelchair boardings are possible at a stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WheelchairBoarding {
    Accessible,
    NotAccessible,
    #[serde(other)]
    #[default]
    Unknown,
}

/// Compass heading riders face when boarding at a stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Default)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    #[serde(other)]
    #[default]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_type_from_wire() {
        let bus: RouteType = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(bus, RouteType::Bus);

        let extended: RouteType = serde_json::from_value(json!(715)).unwrap();
        assert_eq!(extended, RouteType::Unknown);
    }

    #[test]
    fn test_wheelchair_boarding_from_wire() {
        let accessible: WheelchairBoarding =
            serde_json::from_value(json!("ACCESSIBLE")).unwrap();
        assert_eq!(accessible, WheelchairBoarding::Accessible);

        let unknown: WheelchairBoarding =
            serde_json::from_value(json!("SOMETHING_NEW")).unwrap();
        assert_eq!(unknown, WheelchairBoarding::Unknown);
    }

    #[test]
    fn test_direction_tolerates_empty() {
        let west: Direction = serde_json::from_value(json!("W")).unwrap();
        assert_eq!(west, Direction::W);

        let blank: Direction = serde_json::from_value(json!("")).unwrap();
        assert_eq!(blank, Direction::Unknown);
    }
}
