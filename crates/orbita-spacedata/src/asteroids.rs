// NASA NeoWs (Near Earth Object Web Service) feed.
//
// The feed groups objects by date; velocity and miss distance arrive as
// decimal strings and are parsed before rounding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpaceDataError};

/// Cap on how many summarized asteroids a report carries; the total count
/// still reflects everything the feed returned for the date.
pub const MAX_ASTEROIDS: usize = 10;

// ============================================================================
// UPSTREAM SHAPES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NeoFeedResponse {
    #[serde(default)]
    pub near_earth_objects: HashMap<String, Vec<NeoObject>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoObject {
    pub name: String,
    pub is_potentially_hazardous_asteroid: bool,
    pub estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: DiameterRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeVelocity {
    /// km/h as a decimal string
    pub kilometers_per_hour: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MissDistance {
    /// km as a decimal string
    pub kilometers: String,
}

// ============================================================================
// PUBLISHED PAYLOAD
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidReport {
    pub data_pesquisada: String,
    pub total_asteroides_detectados: usize,
    pub asteroides: Vec<AsteroidSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidSummary {
    pub nome: String,
    pub perigoso: bool,
    pub tamanho_estimado_metros: SizeRange,
    pub velocidade_km_h: f64,
    pub distancia_da_terra_km: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

/// Round to two decimal places, the resolution the summaries publish
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn parse_numeric(value: &str, field: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| SpaceDataError::Shape(format!("{} is not numeric: {:?}", field, value)))
}

/// Reshape a one-day NeoWs feed into the summary report
pub fn summarize_feed(date: &str, feed: &NeoFeedResponse) -> Result<AsteroidReport> {
    let objects = feed
        .near_earth_objects
        .get(date)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut asteroides = Vec::with_capacity(objects.len());
    for object in objects {
        let approach = object.close_approach_data.first().ok_or_else(|| {
            SpaceDataError::Shape(format!("{} has no close approach data", object.name))
        })?;

        asteroides.push(AsteroidSummary {
            nome: object.name.clone(),
            perigoso: object.is_potentially_hazardous_asteroid,
            tamanho_estimado_metros: SizeRange {
                min: round2(object.estimated_diameter.meters.estimated_diameter_min),
                max: round2(object.estimated_diameter.meters.estimated_diameter_max),
            },
            velocidade_km_h: round2(parse_numeric(
                &approach.relative_velocity.kilometers_per_hour,
                "relative velocity",
            )?),
            distancia_da_terra_km: round2(parse_numeric(
                &approach.miss_distance.kilometers,
                "miss distance",
            )?),
        });
    }

    let total = asteroides.len();
    asteroides.truncate(MAX_ASTEROIDS);

    Ok(AsteroidReport {
        data_pesquisada: date.to_string(),
        total_asteroides_detectados: total,
        asteroides,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neo(name: &str, velocity: &str, distance: &str) -> NeoObject {
        NeoObject {
            name: name.to_string(),
            is_potentially_hazardous_asteroid: false,
            estimated_diameter: EstimatedDiameter {
                meters: DiameterRange {
                    estimated_diameter_min: 12.3456,
                    estimated_diameter_max: 98.7654,
                },
            },
            close_approach_data: vec![CloseApproach {
                relative_velocity: RelativeVelocity {
                    kilometers_per_hour: velocity.to_string(),
                },
                miss_distance: MissDistance {
                    kilometers: distance.to_string(),
                },
            }],
        }
    }

    fn feed_for(date: &str, objects: Vec<NeoObject>) -> NeoFeedResponse {
        let mut near_earth_objects = HashMap::new();
        near_earth_objects.insert(date.to_string(), objects);
        NeoFeedResponse { near_earth_objects }
    }

    #[test]
    fn test_caps_list_but_counts_everything() {
        let objects = (0..15)
            .map(|i| neo(&format!("Asteroid {}", i), "1000.0", "2000.0"))
            .collect();
        let feed = feed_for("2026-01-15", objects);

        let report = summarize_feed("2026-01-15", &feed).unwrap();

        assert_eq!(report.total_asteroides_detectados, 15);
        assert_eq!(report.asteroides.len(), MAX_ASTEROIDS);
        assert_eq!(report.data_pesquisada, "2026-01-15");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let feed = feed_for("2026-01-15", vec![neo("Apophis", "12345.6789", "99999.999")]);

        let report = summarize_feed("2026-01-15", &feed).unwrap();
        let summary = &report.asteroides[0];

        assert_eq!(summary.tamanho_estimado_metros.min, 12.35);
        assert_eq!(summary.tamanho_estimado_metros.max, 98.77);
        assert_eq!(summary.velocidade_km_h, 12345.68);
        assert_eq!(summary.distancia_da_terra_km, 100000.0);
    }

    #[test]
    fn test_date_missing_from_feed_is_empty_report() {
        let feed = feed_for("2026-01-14", vec![neo("Apophis", "1.0", "2.0")]);

        let report = summarize_feed("2026-01-15", &feed).unwrap();

        assert_eq!(report.total_asteroides_detectados, 0);
        assert!(report.asteroides.is_empty());
    }

    #[test]
    fn test_object_without_approach_data_is_shape_error() {
        let mut object = neo("Apophis", "1.0", "2.0");
        object.close_approach_data.clear();
        let feed = feed_for("2026-01-15", vec![object]);

        let result = summarize_feed("2026-01-15", &feed);

        assert!(matches!(result, Err(SpaceDataError::Shape(_))));
    }

    #[test]
    fn test_non_numeric_velocity_is_shape_error() {
        let feed = feed_for("2026-01-15", vec![neo("Apophis", "rápido", "2.0")]);

        let result = summarize_feed("2026-01-15", &feed);

        assert!(matches!(result, Err(SpaceDataError::Shape(_))));
    }
}
