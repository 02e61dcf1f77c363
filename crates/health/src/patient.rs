use serde::{Deserialize, Serialize};

use tally_core::Entity;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

/// Patient record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}

impl Patient {
    pub fn new(id: u32, name: impl Into<String>, age: u32, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender,
        }
    }
}

impl Entity for Patient {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
