//! Disease record types.

use serde::{Deserialize, Serialize};

/// The six pre-authored text fields held for one disease.
///
/// Every field is required. Records are built once at startup and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub general_info: String,
    pub symptoms: String,
    pub prevention: String,
    pub treatment: String,
    pub more_info: String,
    pub emergency_tips: String,
}

impl DiseaseRecord {
    /// Return the text for `field`.
    pub fn field(&self, field: InfoField) -> &str {
        match field {
            InfoField::GeneralInfo => &self.general_info,
            InfoField::Symptoms => &self.symptoms,
            InfoField::Prevention => &self.prevention,
            InfoField::Treatment => &self.treatment,
            InfoField::MoreInfo => &self.more_info,
            InfoField::EmergencyTips => &self.emergency_tips,
        }
    }
}

/// Selector for one of the six `DiseaseRecord` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoField {
    GeneralInfo,
    Symptoms,
    Prevention,
    Treatment,
    MoreInfo,
    EmergencyTips,
}

impl InfoField {
    pub const ALL: [InfoField; 6] = [
        InfoField::GeneralInfo,
        InfoField::Symptoms,
        InfoField::Prevention,
        InfoField::Treatment,
        InfoField::MoreInfo,
        InfoField::EmergencyTips,
    ];

    /// The field name as it appears in knowledge files.
    pub fn as_str(self) -> &'static str {
        match self {
            InfoField::GeneralInfo => "general_info",
            InfoField::Symptoms => "symptoms",
            InfoField::Prevention => "prevention",
            InfoField::Treatment => "treatment",
            InfoField::MoreInfo => "more_info",
            InfoField::EmergencyTips => "emergency_tips",
        }
    }
}
