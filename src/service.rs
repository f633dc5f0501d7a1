//! Student and grade domain service.
//!
//! Orchestrates the persistence gateway and grade statistics: student
//! lifecycle, grade lifecycle, the cascading delete across all four
//! collections, and assembly of the composite [`GradebookEntry`] view.
//!
//! Not-found and invalid-input conditions are reported through the return
//! channel (`false`, `None`), never as errors; only storage failures
//! propagate as `Err`.

use anyhow::Result;

use crate::db::Database;
use crate::models::*;
use crate::stats;

#[derive(Clone)]
pub struct GradebookService {
    db: Database,
}

impl GradebookService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Enroll a new student. The gateway assigns the id; the string fields
    /// are stored as given.
    pub fn create_student(&self, first_name: &str, last_name: &str, email: &str) -> Result<Student> {
        self.db.create_student(CreateStudentInput {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn student_exists(&self, id: i64) -> Result<bool> {
        self.db.student_exists(id)
    }

    /// Remove a student and every grade referencing them, in all three
    /// subject collections, as one unit of work. No-op if the student does
    /// not exist.
    pub fn delete_student(&self, id: i64) -> Result<()> {
        if !self.db.student_exists(id)? {
            return Ok(());
        }

        self.db.unit_of_work(|tx| {
            tx.delete_student(id)?;
            for subject in Subject::ALL {
                tx.delete_grades_by_student(subject, id)?;
            }
            Ok(())
        })?;

        tracing::debug!("Deleted student {} and their grades", id);
        Ok(())
    }

    /// All students in storage (insertion) order.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        self.db.get_all_students()
    }

    /// Record a grade for a student in one subject.
    ///
    /// Returns `false` with no side effect when the student does not exist
    /// or the value is outside [0, 100]. Exactly one collection is touched
    /// on success.
    pub fn create_grade(&self, grade: f64, student_id: i64, subject: Subject) -> Result<bool> {
        if !self.db.student_exists(student_id)? {
            return Ok(false);
        }
        if !(0.0..=100.0).contains(&grade) {
            return Ok(false);
        }

        self.db
            .create_grade(subject, CreateGradeInput { student_id, grade })?;
        Ok(true)
    }

    /// Delete one grade by id, returning the id of the student it referenced.
    ///
    /// Returns `None` with no deletion when no grade with this id exists in
    /// the subject's collection.
    pub fn delete_grade(&self, grade_id: i64, subject: Subject) -> Result<Option<i64>> {
        let Some(grade) = self.db.get_grade(subject, grade_id)? else {
            return Ok(None);
        };

        self.db.delete_grade(subject, grade_id)?;
        Ok(Some(grade.student_id))
    }

    /// The composite single-student view, or `None` if the student does not
    /// exist. Each subject's average is a mean over its collection, or
    /// "N/A" when that collection is empty.
    pub fn student_detail(&self, student_id: i64) -> Result<Option<GradebookEntry>> {
        let Some(student) = self.db.get_student(student_id)? else {
            return Ok(None);
        };

        let math_grades = self.db.get_grades_by_student(Subject::Math, student_id)?;
        let science_grades = self.db.get_grades_by_student(Subject::Science, student_id)?;
        let history_grades = self.db.get_grades_by_student(Subject::History, student_id)?;

        Ok(Some(GradebookEntry {
            student,
            math_average: average_of(&math_grades),
            science_average: average_of(&science_grades),
            history_average: average_of(&history_grades),
            math_grades,
            science_grades,
            history_grades,
        }))
    }
}

fn average_of(grades: &[Grade]) -> GradeAverage {
    if grades.is_empty() {
        return GradeAverage::NotAvailable;
    }
    let values: Vec<f64> = grades.iter().map(|g| g.grade).collect();
    GradeAverage::Mean(stats::grade_point_average(&values))
}
