// Open Notify: who is in space, and where the ISS is right now.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpaceDataError};

/// Fixed message served when the upstreams cannot be reached
pub const FALLBACK_MESSAGE: &str =
    "Desculpe, não foi possível consultar quem está no espaço agora. Tente novamente em instantes.";

// ============================================================================
// UPSTREAM SHAPES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AstrosResponse {
    pub number: u32,
    #[serde(default)]
    pub people: Vec<AstroPerson>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AstroPerson {
    pub name: String,
    pub craft: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssNowResponse {
    pub iss_position: IssPosition,
}

/// Coordinates arrive as decimal strings
#[derive(Debug, Clone, Deserialize)]
pub struct IssPosition {
    pub latitude: String,
    pub longitude: String,
}

// ============================================================================
// PUBLISHED PAYLOAD
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeopleInSpaceReport {
    pub total_humanos_no_espaco: u32,
    pub astronautas: Vec<AstronautSummary>,
    pub iss_posicao_atual: Option<IssPositionSummary>,
    pub mensagem: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstronautSummary {
    pub nome: String,
    pub nave: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssPositionSummary {
    pub latitude: f64,
    pub longitude: f64,
}

impl PeopleInSpaceReport {
    /// Combine the crew roster with the current station position
    pub fn from_feeds(astros: AstrosResponse, iss: IssNowResponse) -> Result<Self> {
        let latitude = parse_coordinate(&iss.iss_position.latitude, "latitude")?;
        let longitude = parse_coordinate(&iss.iss_position.longitude, "longitude")?;

        let astronautas = astros
            .people
            .into_iter()
            .map(|p| AstronautSummary {
                nome: p.name,
                nave: p.craft,
            })
            .collect();

        Ok(Self {
            total_humanos_no_espaco: astros.number,
            astronautas,
            iss_posicao_atual: Some(IssPositionSummary {
                latitude,
                longitude,
            }),
            mensagem: format!("Há {} humanos no espaço neste momento.", astros.number),
        })
    }

    /// Payload served when any upstream fails: same shape, empty values,
    /// fixed apology, always behind HTTP 200
    pub fn fallback() -> Self {
        Self {
            total_humanos_no_espaco: 0,
            astronautas: Vec::new(),
            iss_posicao_atual: None,
            mensagem: FALLBACK_MESSAGE.to_string(),
        }
    }
}

fn parse_coordinate(value: &str, field: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| SpaceDataError::Shape(format!("{} is not numeric: {:?}", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feeds_combine_into_report() {
        let astros: AstrosResponse = serde_json::from_str(
            r#"{
                "number": 2,
                "people": [
                    {"name": "Ana Souza", "craft": "ISS"},
                    {"name": "Li Wei", "craft": "Tiangong"}
                ],
                "message": "success"
            }"#,
        )
        .unwrap();
        let iss: IssNowResponse = serde_json::from_str(
            r#"{
                "iss_position": {"latitude": "-23.5505", "longitude": "-46.6333"},
                "message": "success",
                "timestamp": 1767139200
            }"#,
        )
        .unwrap();

        let report = PeopleInSpaceReport::from_feeds(astros, iss).unwrap();

        assert_eq!(report.total_humanos_no_espaco, 2);
        assert_eq!(report.astronautas[0].nome, "Ana Souza");
        assert_eq!(report.astronautas[1].nave, "Tiangong");

        let position = report.iss_posicao_atual.unwrap();
        assert_eq!(position.latitude, -23.5505);
        assert_eq!(position.longitude, -46.6333);

        assert_eq!(report.mensagem, "Há 2 humanos no espaço neste momento.");
    }

    #[test]
    fn test_bad_coordinate_is_shape_error() {
        let astros = AstrosResponse {
            number: 0,
            people: vec![],
        };
        let iss = IssNowResponse {
            iss_position: IssPosition {
                latitude: "norte".to_string(),
                longitude: "0.0".to_string(),
            },
        };

        let result = PeopleInSpaceReport::from_feeds(astros, iss);

        assert!(matches!(result, Err(SpaceDataError::Shape(_))));
    }

    #[test]
    fn test_fallback_shape() {
        let report = PeopleInSpaceReport::fallback();

        assert_eq!(report.total_humanos_no_espaco, 0);
        assert!(report.astronautas.is_empty());
        assert!(report.iss_posicao_atual.is_none());
        assert_eq!(report.mensagem, FALLBACK_MESSAGE);
    }
}
