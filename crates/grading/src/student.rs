use serde::{Deserialize, Serialize};

use tally_core::Entity;

/// Letter grade band.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl core::fmt::Display for Grade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub full_name: String,
    pub score: u32,
}

impl Student {
    pub fn new(id: u32, full_name: impl Into<String>, score: u32) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    /// Band the score into a letter grade.
    pub fn grade(&self) -> Grade {
        match self.score {
            80.. => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl Entity for Student {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
