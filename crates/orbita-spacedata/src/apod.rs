// NASA APOD (Astronomy Picture of the Day).

use serde::{Deserialize, Serialize};

/// Copyright credit used when APOD carries none
pub const PUBLIC_DOMAIN: &str = "Domínio Público";

/// Upstream APOD payload; every field is optional because media entries
/// (notably videos) omit some of them
#[derive(Debug, Clone, Deserialize)]
pub struct ApodResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

/// Published APOD summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApodSummary {
    pub titulo: Option<String>,
    pub data: Option<String>,
    pub explicacao: Option<String>,
    pub url_imagem: Option<String>,
    pub tipo_midia: Option<String>,
    pub copyright: String,
}

impl ApodResponse {
    /// Flatten into the published summary; uncredited pictures are public
    /// domain
    pub fn into_summary(self) -> ApodSummary {
        ApodSummary {
            titulo: self.title,
            data: self.date,
            explicacao: self.explanation,
            url_imagem: self.url,
            tipo_midia: self.media_type,
            copyright: self.copyright.unwrap_or_else(|| PUBLIC_DOMAIN.to_string()),
        }
    }
}
