use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::{Grade, Student};

/// Per-subject average marker: a computed mean, or "N/A" when the student has
/// no grades in that subject.
///
/// An empty collection never averages to zero or an error; it is explicitly
/// not available. Serializes as the plain number or the string `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradeAverage {
    Mean(f64),
    NotAvailable,
}

impl Serialize for GradeAverage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Mean(value) => serializer.serialize_f64(*value),
            Self::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for GradeAverage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Mean(f64),
            Marker(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Mean(value) => Ok(Self::Mean(value)),
            Repr::Marker(s) if s == "N/A" => Ok(Self::NotAvailable),
            Repr::Marker(s) => Err(de::Error::custom(format!("unknown average marker: {s}"))),
        }
    }
}

/// Composite single-student view: identity fields, the three grade
/// collections, and the three average markers.
///
/// Assembled by the domain service for the student detail view; nothing here
/// is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradebookEntry {
    #[serde(flatten)]
    pub student: Student,
    pub math_grades: Vec<Grade>,
    pub science_grades: Vec<Grade>,
    pub history_grades: Vec<Grade>,
    pub math_average: GradeAverage,
    pub science_average: GradeAverage,
    pub history_average: GradeAverage,
}
