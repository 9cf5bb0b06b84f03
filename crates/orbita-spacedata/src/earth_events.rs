// NASA EONET v3 (Earth Observatory Natural Event Tracker).

use serde::{Deserialize, Serialize};

// ============================================================================
// UPSTREAM SHAPES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct EonetResponse {
    #[serde(default)]
    pub events: Vec<EonetEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EonetEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub categories: Vec<EonetCategory>,
    #[serde(default)]
    pub geometry: Vec<EonetGeometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EonetCategory {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EonetGeometry {
    pub date: String,
}

// ============================================================================
// PUBLISHED PAYLOAD
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarthEventReport {
    pub periodo_dias: u32,
    pub eventos: Vec<EarthEventSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarthEventSummary {
    pub id: String,
    pub titulo: String,
    pub categoria: Option<String>,
    pub ultima_atualizacao: Option<String>,
    pub link: Option<String>,
}

/// Reshape open EONET events into the summary report
///
/// Each event keeps its first category and the date of its latest geometry
/// entry (EONET lists geometries chronologically).
pub fn summarize_events(days: u32, response: EonetResponse) -> EarthEventReport {
    let eventos = response
        .events
        .into_iter()
        .map(|event| EarthEventSummary {
            id: event.id,
            titulo: event.title,
            categoria: event.categories.into_iter().next().map(|c| c.title),
            ultima_atualizacao: event.geometry.into_iter().last().map(|g| g.date),
            link: event.link,
        })
        .collect();

    EarthEventReport {
        periodo_dias: days,
        eventos,
    }
}
