use serde::{Deserialize, Serialize};

/// A student on the roster.
///
/// The id is assigned by the persistence gateway on save. The email address
/// serves as a secondary lookup key for humans; the core does not enforce its
/// uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Input for enrolling a new student. The gateway assigns the id.
///
/// No validation is performed on these fields; empty or duplicate values are
/// accepted and any screening is a boundary concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
