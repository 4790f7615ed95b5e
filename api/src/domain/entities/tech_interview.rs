//! Tech interview domain entity
//!
//! A categorized interview question. Questions and contest problems point at one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

entity_id!(
    /// Unique identifier for a tech interview question
    TechInterviewId
);

/// Subject area of an interview question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechClass {
    Java,
    Spring,
    Database,
    Network,
    OperatingSystem,
    DataStructure,
    Algorithm,
    Architecture,
}

impl TechClass {
    /// Every variant, in declaration order
    pub const ALL: [TechClass; 8] = [
        TechClass::Java,
        TechClass::Spring,
        TechClass::Database,
        TechClass::Network,
        TechClass::OperatingSystem,
        TechClass::DataStructure,
        TechClass::Algorithm,
        TechClass::Architecture,
    ];
}

impl std::fmt::Display for TechClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TechClass::Java => write!(f, "java"),
            TechClass::Spring => write!(f, "spring"),
            TechClass::Database => write!(f, "database"),
            TechClass::Network => write!(f, "network"),
            TechClass::OperatingSystem => write!(f, "operating_system"),
            TechClass::DataStructure => write!(f, "data_structure"),
            TechClass::Algorithm => write!(f, "algorithm"),
            TechClass::Architecture => write!(f, "architecture"),
        }
    }
}

impl std::str::FromStr for TechClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(TechClass::Java),
            "spring" => Ok(TechClass::Spring),
            "database" => Ok(TechClass::Database),
            "network" => Ok(TechClass::Network),
            "operating_system" | "os" => Ok(TechClass::OperatingSystem),
            "data_structure" => Ok(TechClass::DataStructure),
            "algorithm" => Ok(TechClass::Algorithm),
            "architecture" => Ok(TechClass::Architecture),
            _ => Err(format!("Unknown tech class: {}", s)),
        }
    }
}

/// An interview question tagged with its subject area
#[derive(Debug, Clone, Serialize)]
pub struct TechInterview {
    pub id: Option<TechInterviewId>,
    pub tech_class: TechClass,
    pub question: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl TechInterview {
    pub fn new(tech_class: TechClass, question: impl Into<String>) -> Self {
        Self {
            id: None,
            tech_class,
            question: question.into(),
            created_at: None,
        }
    }
}
