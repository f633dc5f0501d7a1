use serde::{Deserialize, Serialize};

/// A single numeric result for one student in one subject.
///
/// Grades in all three subjects share this shape but live in separate
/// collections. The `student_id` is a reference, not ownership: a grade's row
/// is independent, but it is deleted when its student is deleted. Grades are
/// never updated in place; the only transitions are created and deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    /// Constrained to [0, 100] by the domain service before persistence.
    pub grade: f64,
}

/// The three fixed grade subjects.
///
/// This is a closed set: any other subject string is rejected where it is
/// parsed, so core operations can only ever be called with one of these
/// three variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    Science,
    History,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Self::Math, Self::Science, Self::History];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Science => "science",
            Self::History => "history",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "math" => Some(Self::Math),
            "science" => Some(Self::Science),
            "history" => Some(Self::History),
            _ => None,
        }
    }

    /// Name of the grade table backing this subject.
    pub(crate) fn table(&self) -> &'static str {
        match self {
            Self::Math => "math_grades",
            Self::Science => "science_grades",
            Self::History => "history_grades",
        }
    }
}

/// Input for recording a new grade. The gateway assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGradeInput {
    pub student_id: i64,
    pub grade: f64,
}
