use gradebook::db::Database;
use gradebook::models::*;
use gradebook::service::GradebookService;
use speculate2::speculate;

fn enroll_test_student(service: &GradebookService) -> Student {
    service
        .create_student("Rick", "Norman", "rick.norman@example.com")
        .expect("Failed to create student")
}

speculate! {
    before {
        let db = Database::open_memory().expect("Failed to create in-memory database");
        db.migrate().expect("Failed to run migrations");
        let service = GradebookService::new(db.clone());
    }

    describe "create_student" {
        it "persists the student and assigns an id" {
            let student = service
                .create_student("Chad", "Darby", "chad.darby@example.com")
                .expect("Failed to create student");

            assert!(student.id > 0);
            assert_eq!(student.first_name, "Chad");
            assert_eq!(student.last_name, "Darby");
        }

        it "is findable by email afterwards" {
            service
                .create_student("Chad", "Darby", "chad.darby@example.com")
                .expect("Failed to create student");

            let found = db
                .get_student_by_email("chad.darby@example.com")
                .expect("Query failed")
                .expect("Student not found by email");

            assert_eq!(found.email, "chad.darby@example.com");
        }

        it "accepts empty and duplicate string fields" {
            service.create_student("", "", "dup@example.com").expect("Failed to create");
            service.create_student("", "", "dup@example.com").expect("Failed to create");

            let students = service.list_students().expect("Query failed");
            assert_eq!(students.len(), 2);
        }
    }

    describe "student_exists" {
        it "returns false for an unknown id" {
            assert!(!service.student_exists(0).expect("Query failed"));
            assert!(!service.student_exists(42).expect("Query failed"));
        }

        it "returns true after enrollment" {
            let student = enroll_test_student(&service);
            assert!(service.student_exists(student.id).expect("Query failed"));
        }
    }

    describe "list_students" {
        it "returns empty list when no students exist" {
            let students = service.list_students().expect("Query failed");
            assert!(students.is_empty());
        }

        it "returns all students in insertion order" {
            service.create_student("Zed", "Last", "zed@example.com").expect("Failed");
            service.create_student("Amy", "First", "amy@example.com").expect("Failed");

            let students = service.list_students().expect("Query failed");
            assert_eq!(students.len(), 2);
            assert_eq!(students[0].first_name, "Zed");
            assert_eq!(students[1].first_name, "Amy");
        }
    }

    describe "create_grade" {
        it "records an in-range grade in each subject" {
            let student = enroll_test_student(&service);

            assert!(service.create_grade(80.5, student.id, Subject::Math).expect("Query failed"));
            assert!(service.create_grade(90.5, student.id, Subject::Science).expect("Query failed"));
            assert!(service.create_grade(88.0, student.id, Subject::History).expect("Query failed"));

            for subject in Subject::ALL {
                let grades = db.get_grades_by_student(subject, student.id).expect("Query failed");
                assert_eq!(grades.len(), 1, "expected one {} grade", subject.as_str());
            }
        }

        it "accepts the inclusive range boundaries" {
            let student = enroll_test_student(&service);

            assert!(service.create_grade(0.0, student.id, Subject::Math).expect("Query failed"));
            assert!(service.create_grade(100.0, student.id, Subject::Math).expect("Query failed"));
        }

        it "rejects values outside the range without persisting" {
            let student = enroll_test_student(&service);

            assert!(!service.create_grade(105.0, student.id, Subject::Math).expect("Query failed"));
            assert!(!service.create_grade(-5.0, student.id, Subject::Math).expect("Query failed"));

            let grades = db.get_grades_by_student(Subject::Math, student.id).expect("Query failed");
            assert!(grades.is_empty());
        }

        it "rejects grades for a nonexistent student" {
            assert!(!service.create_grade(80.5, 2, Subject::Math).expect("Query failed"));

            let grades = db.get_grades_by_student(Subject::Math, 2).expect("Query failed");
            assert!(grades.is_empty());
        }

        it "touches only the targeted collection" {
            let student = enroll_test_student(&service);

            assert!(service.create_grade(75.0, student.id, Subject::Science).expect("Query failed"));

            assert!(db.get_grades_by_student(Subject::Math, student.id).expect("Query failed").is_empty());
            assert!(db.get_grades_by_student(Subject::History, student.id).expect("Query failed").is_empty());
            assert_eq!(db.get_grades_by_student(Subject::Science, student.id).expect("Query failed").len(), 1);
        }
    }

    describe "delete_grade" {
        it "removes the grade and returns the owning student id" {
            let student = enroll_test_student(&service);
            service.create_grade(80.0, student.id, Subject::Math).expect("Query failed");

            let grade = db.get_grades_by_student(Subject::Math, student.id)
                .expect("Query failed")
                .pop()
                .expect("Grade not persisted");

            let affected = service.delete_grade(grade.id, Subject::Math).expect("Query failed");
            assert_eq!(affected, Some(student.id));

            let remaining = db.get_grades_by_student(Subject::Math, student.id).expect("Query failed");
            assert!(remaining.is_empty());
        }

        it "returns None for an unknown grade id in every subject" {
            for subject in Subject::ALL {
                let affected = service.delete_grade(0, subject).expect("Query failed");
                assert!(affected.is_none(), "no {} grade with id 0", subject.as_str());
            }
        }

        it "leaves all collections unchanged when nothing matches" {
            let student = enroll_test_student(&service);
            service.create_grade(70.0, student.id, Subject::History).expect("Query failed");

            let affected = service.delete_grade(999, Subject::History).expect("Query failed");
            assert!(affected.is_none());

            let grades = db.get_grades_by_student(Subject::History, student.id).expect("Query failed");
            assert_eq!(grades.len(), 1);
        }

        it "only searches the named subject's collection" {
            let student = enroll_test_student(&service);
            service.create_grade(80.0, student.id, Subject::Math).expect("Query failed");

            let grade = db.get_grades_by_student(Subject::Math, student.id)
                .expect("Query failed")
                .pop()
                .expect("Grade not persisted");

            // Same id, wrong subject
            let affected = service.delete_grade(grade.id, Subject::Science).expect("Query failed");
            assert!(affected.is_none());

            let grades = db.get_grades_by_student(Subject::Math, student.id).expect("Query failed");
            assert_eq!(grades.len(), 1);
        }
    }

    describe "delete_student" {
        it "removes the student and every grade in all three subjects" {
            let student = enroll_test_student(&service);
            service.create_grade(80.0, student.id, Subject::Math).expect("Query failed");
            service.create_grade(85.0, student.id, Subject::Science).expect("Query failed");
            service.create_grade(90.0, student.id, Subject::History).expect("Query failed");

            service.delete_student(student.id).expect("Delete failed");

            assert!(!service.student_exists(student.id).expect("Query failed"));
            for subject in Subject::ALL {
                let grades = db.get_grades_by_student(subject, student.id).expect("Query failed");
                assert!(grades.is_empty(), "{} grades should be deleted", subject.as_str());
            }
        }

        it "is a no-op for a nonexistent student" {
            let student = enroll_test_student(&service);

            service.delete_student(9999).expect("Delete should not fail");

            assert!(service.student_exists(student.id).expect("Query failed"));
        }

        it "leaves other students' grades untouched" {
            let keep = enroll_test_student(&service);
            let gone = service
                .create_student("Jane", "Doe", "jane.doe@example.com")
                .expect("Failed to create student");

            service.create_grade(95.0, keep.id, Subject::Math).expect("Query failed");
            service.create_grade(55.0, gone.id, Subject::Math).expect("Query failed");

            service.delete_student(gone.id).expect("Delete failed");

            let grades = db.get_grades_by_student(Subject::Math, keep.id).expect("Query failed");
            assert_eq!(grades.len(), 1);
        }
    }

    describe "student_detail" {
        it "returns None for a nonexistent student" {
            let detail = service.student_detail(0).expect("Query failed");
            assert!(detail.is_none());
        }

        it "reports N/A for subjects with no grades" {
            let student = enroll_test_student(&service);

            let detail = service.student_detail(student.id)
                .expect("Query failed")
                .expect("Student not found");

            assert_eq!(detail.math_average, GradeAverage::NotAvailable);
            assert_eq!(detail.science_average, GradeAverage::NotAvailable);
            assert_eq!(detail.history_average, GradeAverage::NotAvailable);
        }

        it "computes the arithmetic mean per subject" {
            let student = enroll_test_student(&service);
            service.create_grade(80.0, student.id, Subject::Math).expect("Query failed");
            service.create_grade(90.0, student.id, Subject::Math).expect("Query failed");

            let detail = service.student_detail(student.id)
                .expect("Query failed")
                .expect("Student not found");

            assert_eq!(detail.math_average, GradeAverage::Mean(85.0));
            assert_eq!(detail.math_grades.len(), 2);
            assert_eq!(detail.science_average, GradeAverage::NotAvailable);
        }

        it "carries the student identity fields" {
            let student = enroll_test_student(&service);

            let detail = service.student_detail(student.id)
                .expect("Query failed")
                .expect("Student not found");

            assert_eq!(detail.student.id, student.id);
            assert_eq!(detail.student.first_name, "Rick");
            assert_eq!(detail.student.last_name, "Norman");
            assert_eq!(detail.student.email, "rick.norman@example.com");
        }
    }

    describe "end_to_end" {
        it "runs the full student lifecycle" {
            let student = service
                .create_student("Rick", "Norman", "rick.norman@x.com")
                .expect("Failed to create student");
            assert_eq!(student.id, 1);

            assert!(service.create_grade(100.0, 1, Subject::Math).expect("Query failed"));

            let detail = service.student_detail(1)
                .expect("Query failed")
                .expect("Student not found");
            assert_eq!(detail.math_average, GradeAverage::Mean(100.0));
            assert_eq!(detail.science_average, GradeAverage::NotAvailable);
            assert_eq!(detail.history_average, GradeAverage::NotAvailable);

            service.delete_student(1).expect("Delete failed");
            assert!(!service.student_exists(1).expect("Query failed"));

            assert!(!service.create_grade(50.0, 1, Subject::Math).expect("Query failed"));
        }
    }
}
