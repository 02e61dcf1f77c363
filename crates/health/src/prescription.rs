use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::Entity;

/// Prescription record, linked to its patient by `patient_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: u32,
    pub patient_id: u32,
    pub medication: String,
    pub date_issued: DateTime<Utc>,
}

impl Prescription {
    pub fn new(
        id: u32,
        patient_id: u32,
        medication: impl Into<String>,
        date_issued: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            patient_id,
            medication: medication.into(),
            date_issued,
        }
    }
}

impl Entity for Prescription {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
