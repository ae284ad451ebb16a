//! Assessment data model returned by the analysis service

use serde::{Deserialize, Serialize};

/// Connection quality classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightStatus {
    /// Connection comfortably supports demanding use
    Excellent,
    /// Connection is healthy for everyday use
    Good,
    /// Connection works but shows weaknesses
    Fair,
    /// Connection has serious problems
    Poor,
}

impl InsightStatus {
    /// Status as its lowercase wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightStatus::Excellent => "excellent",
            InsightStatus::Good => "good",
            InsightStatus::Fair => "fair",
            InsightStatus::Poor => "poor",
        }
    }
}

/// Assessment produced by the analysis service: a classification, a
/// plain-language summary, and actionable recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionInsight {
    /// Overall quality classification
    pub status: InsightStatus,
    /// Plain-language summary of the connection's recent behavior
    pub summary: String,
    /// Actionable suggestions for the user
    pub recommendations: Vec<String>,
}

impl ConnectionInsight {
    /// Assessment shown before any measurement exists.
    ///
    /// Returned locally, without contacting the service.
    pub fn no_data() -> Self {
        Self {
            status: InsightStatus::Fair,
            summary: "Insufficient data to assess this connection yet.".to_string(),
            recommendations: vec![
                "Keep monitoring; an assessment appears after the first measurements.".to_string(),
            ],
        }
    }

    /// Assessment shown when the analysis service cannot be reached
    pub fn unreachable() -> Self {
        Self {
            status: InsightStatus::Good,
            summary: "Unable to connect to the analysis service.".to_string(),
            recommendations: vec![
                "Check your internet connection and try again later.".to_string()
            ],
        }
    }
}
