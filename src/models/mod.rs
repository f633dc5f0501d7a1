//! Domain models for the gradebook.
//!
//! # Core Concepts
//!
//! ## Persisted Entities
//!
//! - [`Student`]: A person on the roster. Identity is a gateway-assigned
//!   integer id; the email address is a secondary human lookup key.
//! - [`Grade`]: A numeric result in the range [0, 100]. One shape, three
//!   parallel collections, one per [`Subject`]. A grade references its owning
//!   student and is removed when that student is deleted.
//!
//! ## Derived Views
//!
//! Assembled on demand, never persisted:
//!
//! - [`GradebookEntry`]: A student's identity, their three grade collections,
//!   and the three per-subject averages.
//! - [`GradeAverage`]: Either a computed mean or an explicit "N/A" marker for
//!   a subject with no grades.

mod grade;
mod gradebook;
mod student;

pub use grade::*;
pub use gradebook::*;
pub use student::*;
