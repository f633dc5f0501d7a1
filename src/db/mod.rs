mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use rusqlite::Connection;

use crate::models::*;

/// Persistence gateway over SQLite.
///
/// Four independent collections — students plus one grade table per
/// [`Subject`] — each with the same minimal surface: id-assigning save,
/// get-by-id, exists-by-id, find-all, find-by-student-id, delete-by-id and
/// delete-by-student-id. Multi-collection mutations go through
/// [`Database::unit_of_work`] so they commit or roll back as one.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "gradebook")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("gradebook.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    /// Run `f` inside a single transaction. Commits when `f` returns `Ok`,
    /// rolls back otherwise.
    pub fn unit_of_work<T>(&self, f: impl FnOnce(&StoreTx<'_>) -> Result<T>) -> Result<T> {
        let mut conn = self.conn.lock().expect("database lock poisoned");
        let tx = conn.transaction()?;
        let store = StoreTx { tx };
        let value = f(&store)?;
        store.tx.commit()?;
        Ok(value)
    }

    // ============================================================
    // Student operations
    // ============================================================

    pub fn create_student(&self, input: CreateStudentInput) -> Result<Student> {
        let conn = self.conn.lock().expect("database lock poisoned");

        conn.execute(
            "INSERT INTO students (first_name, last_name, email) VALUES (?, ?, ?)",
            (&input.first_name, &input.last_name, &input.email),
        )?;

        Ok(Student {
            id: conn.last_insert_rowid(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        })
    }

    pub fn student_exists(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM students WHERE id = ?",
            [id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn get_student(&self, id: i64) -> Result<Option<Student>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, first_name, last_name, email FROM students WHERE id = ?",
        )?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Student {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                email: row.get(3)?,
            }))
        } else {
            Ok(None)
        }
    }

    pub fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, first_name, last_name, email FROM students WHERE email = ? ORDER BY id LIMIT 1",
        )?;

        let mut rows = stmt.query([email])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Student {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                email: row.get(3)?,
            }))
        } else {
            Ok(None)
        }
    }

    pub fn get_all_students(&self) -> Result<Vec<Student>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, first_name, last_name, email FROM students ORDER BY id",
        )?;

        let students = stmt
            .query_map([], |row| {
                Ok(Student {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    email: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(students)
    }

    // ============================================================
    // Grade operations (one table per subject)
    // ============================================================

    pub fn create_grade(&self, subject: Subject, input: CreateGradeInput) -> Result<Grade> {
        let conn = self.conn.lock().expect("database lock poisoned");

        conn.execute(
            &format!(
                "INSERT INTO {} (student_id, grade) VALUES (?, ?)",
                subject.table()
            ),
            (input.student_id, input.grade),
        )?;

        Ok(Grade {
            id: conn.last_insert_rowid(),
            student_id: input.student_id,
            grade: input.grade,
        })
    }

    pub fn get_grade(&self, subject: Subject, id: i64) -> Result<Option<Grade>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(&format!(
            "SELECT id, student_id, grade FROM {} WHERE id = ?",
            subject.table()
        ))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Grade {
                id: row.get(0)?,
                student_id: row.get(1)?,
                grade: row.get(2)?,
            }))
        } else {
            Ok(None)
        }
    }

    pub fn get_grades_by_student(&self, subject: Subject, student_id: i64) -> Result<Vec<Grade>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(&format!(
            "SELECT id, student_id, grade FROM {} WHERE student_id = ? ORDER BY id",
            subject.table()
        ))?;

        let grades = stmt
            .query_map([student_id], |row| {
                Ok(Grade {
                    id: row.get(0)?,
                    student_id: row.get(1)?,
                    grade: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(grades)
    }

    pub fn delete_grade(&self, subject: Subject, id: i64) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?", subject.table()),
            [id],
        )?;
        Ok(rows > 0)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

/// Per-collection delete operations available inside a unit of work.
pub struct StoreTx<'a> {
    tx: rusqlite::Transaction<'a>,
}

impl StoreTx<'_> {
    pub fn delete_student(&self, id: i64) -> Result<bool> {
        let rows = self
            .tx
            .execute("DELETE FROM students WHERE id = ?", [id])?;
        Ok(rows > 0)
    }

    pub fn delete_grades_by_student(&self, subject: Subject, student_id: i64) -> Result<usize> {
        let rows = self.tx.execute(
            &format!("DELETE FROM {} WHERE student_id = ?", subject.table()),
            [student_id],
        )?;
        Ok(rows)
    }
}
