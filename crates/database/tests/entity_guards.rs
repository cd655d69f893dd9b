mod common;

use common::{seed_course, seed_department, seed_professor, seed_student, setup_db};
use database::error::ServiceError;
use database::services::course::{CoursePatch, CourseService, NewCourse};
use database::services::department::{DepartmentPatch, DepartmentService, NewDepartment};
use database::services::enrollment::EnrollmentService;
use database::services::professor::{NewProfessor, ProfessorService};
use database::services::student::{NewStudent, StudentPatch, StudentService};

#[tokio::test]
async fn create_student_aggregates_every_field_problem() {
    let db = setup_db().await;

    let err = StudentService::create(
        &db,
        NewStudent {
            national_id: "12".to_string(),
            name: "Ada99".to_string(),
            email: "not-an-email".to_string(),
            semester: 3,
        },
    )
    .await
    .unwrap_err();

    match err {
        ServiceError::Validation(errors) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_student_rejects_duplicate_keys() {
    let db = setup_db().await;
    seed_student(&db, "100001", "Ada Lovelace", 3).await;

    let err = StudentService::create(
        &db,
        NewStudent {
            national_id: "100001".to_string(),
            name: "Ada Byron".to_string(),
            email: "100001@students.edu".to_string(),
            semester: 2,
        },
    )
    .await
    .unwrap_err();

    match err {
        ServiceError::Validation(errors) => {
            assert!(errors.contains(&"The national id is already registered".to_string()));
            assert!(errors.contains(&"The email is already registered".to_string()));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn student_patch_skips_blank_fields() {
    let db = setup_db().await;
    let student = seed_student(&db, "100001", "Ada Lovelace", 3).await;

    let updated = StudentService::update(
        &db,
        student.id,
        StudentPatch {
            name: Some("   ".to_string()),
            email: None,
            semester: Some(4),
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.name, "Ada Lovelace");
    assert_eq!(updated.semester, 4);

    let err = StudentService::update(
        &db,
        student.id,
        StudentPatch {
            name: Some("".to_string()),
            email: Some("  ".to_string()),
            semester: None,
        },
    )
    .await
    .unwrap_err();
    assert!(
        matches!(err, ServiceError::Validation(ref errors) if errors == &vec!["No valid fields to update".to_string()])
    );
}

#[tokio::test]
async fn student_update_rejects_taken_email_with_conflict() {
    let db = setup_db().await;
    seed_student(&db, "100001", "Ada Lovelace", 3).await;
    let other = seed_student(&db, "100002", "Alan Turing", 5).await;

    let err = StudentService::update(
        &db,
        other.id,
        StudentPatch {
            email: Some("100001@students.edu".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    // Keeping your own email is not a conflict.
    let updated = StudentService::update(
        &db,
        other.id,
        StudentPatch {
            email: Some("100002@students.edu".to_string()),
            name: Some("Alan M Turing".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.name, "Alan M Turing");
}

#[tokio::test]
async fn empty_lookups_are_not_found() {
    let db = setup_db().await;

    assert!(matches!(
        StudentService::list_all(&db).await.unwrap_err(),
        ServiceError::NotFound(ref m) if m == "No students registered"
    ));
    assert!(matches!(
        ProfessorService::list_all(&db).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        DepartmentService::list_all(&db).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        CourseService::list_all(&db).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        StudentService::search_by_name(&db, "ada").await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[tokio::test]
async fn semester_search_checks_range_before_querying() {
    let db = setup_db().await;
    seed_student(&db, "100001", "Ada Lovelace", 3).await;

    let err = StudentService::find_by_semester(&db, 0).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = StudentService::find_by_semester(&db, 7).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let found = StudentService::find_by_semester(&db, 3).await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn name_search_is_case_insensitive() {
    let db = setup_db().await;
    seed_student(&db, "100001", "Ada Lovelace", 3).await;
    seed_student(&db, "100002", "Alan Turing", 5).await;

    let found = StudentService::search_by_name(&db, "LOVE").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Ada Lovelace");

    let found = StudentService::search_by_name(&db, "a").await.unwrap();
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn department_code_is_normalized_everywhere() {
    let db = setup_db().await;

    let dept = DepartmentService::create(
        &db,
        NewDepartment {
            code: "ing".to_string(),
            name: "Engineering".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(dept.code, "ING");

    // Lookup goes through the same normalization as writes.
    let found = DepartmentService::find_by_code(&db, "ing").await.unwrap();
    assert_eq!(found.id, dept.id);

    let err = DepartmentService::create(
        &db,
        NewDepartment {
            code: "InG".to_string(),
            name: "Engineering Too".to_string(),
        },
    )
    .await
    .unwrap_err();
    match err {
        ServiceError::Validation(errors) => {
            assert!(errors.contains(&"The department code already exists".to_string()));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn department_delete_is_blocked_by_dependents() {
    let db = setup_db().await;
    let dept = seed_department(&db, "CS", "Computer Science").await;
    let prof = seed_professor(&db, "900001", "Grace Hopper", Some(dept.id)).await;
    seed_course(&db, "CS101", "Programming I", prof.id, dept.id).await;

    let err = DepartmentService::delete(&db, dept.id).await.unwrap_err();
    match err {
        ServiceError::Validation(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(errors[0].contains("1 professor(s)"));
            assert!(errors[1].contains("1 course(s)"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    // A department nothing references deletes cleanly.
    let empty = seed_department(&db, "PHY", "Physics").await;
    DepartmentService::delete(&db, empty.id).await.unwrap();
    let err = DepartmentService::get(&db, empty.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn department_update_touches_only_the_name() {
    let db = setup_db().await;
    let dept = seed_department(&db, "CS", "Computer Science").await;

    let updated = DepartmentService::update(
        &db,
        dept.id,
        DepartmentPatch {
            name: Some("Computing".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.name, "Computing");
    assert_eq!(updated.code, "CS");

    let err = DepartmentService::update(&db, dept.id, DepartmentPatch { name: None })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn course_create_requires_an_active_professor() {
    let db = setup_db().await;
    let dept = seed_department(&db, "CS", "Computer Science").await;
    let prof = seed_professor(&db, "900001", "Grace Hopper", Some(dept.id)).await;
    ProfessorService::deactivate(&db, prof.id).await.unwrap();

    let err = CourseService::create(
        &db,
        NewCourse {
            code: "CS101".to_string(),
            name: "Programming I".to_string(),
            credits: 4,
            schedule: "Mon 10:00-12:00".to_string(),
            professor_id: prof.id,
            department_id: dept.id,
        },
    )
    .await
    .unwrap_err();
    match err {
        ServiceError::Validation(errors) => {
            assert!(errors.iter().any(|e| e.contains("not active")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let active = seed_professor(&db, "900002", "Barbara Liskov", Some(dept.id)).await;
    let course = seed_course(&db, "CS101", "Programming I", active.id, dept.id).await;
    assert_eq!(course.professor_id, active.id);
    assert_eq!(course.department_id, dept.id);
    assert!(course.active);
}

#[tokio::test]
async fn course_create_aggregates_field_and_reference_problems() {
    let db = setup_db().await;

    let err = CourseService::create(
        &db,
        NewCourse {
            code: "  ".to_string(),
            name: "Programming I".to_string(),
            credits: 9,
            schedule: "".to_string(),
            professor_id: 1,
            department_id: 1,
        },
    )
    .await
    .unwrap_err();
    match err {
        ServiceError::Validation(errors) => {
            assert_eq!(errors.len(), 5);
            assert!(errors.contains(&"Professor not found".to_string()));
            assert!(errors.contains(&"Department not found".to_string()));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn professor_deactivation_waits_for_reassignment() {
    let db = setup_db().await;
    let dept = seed_department(&db, "CS", "Computer Science").await;
    let prof = seed_professor(&db, "900001", "Grace Hopper", Some(dept.id)).await;
    let course = seed_course(&db, "CS101", "Programming I", prof.id, dept.id).await;

    let err = ProfessorService::deactivate(&db, prof.id).await.unwrap_err();
    match err {
        ServiceError::Validation(errors) => {
            assert!(errors[0].contains("1 course(s) are still assigned"));
            assert!(errors.contains(&"Assigned course: Programming I".to_string()));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let substitute = seed_professor(&db, "900002", "Barbara Liskov", Some(dept.id)).await;
    CourseService::update(
        &db,
        course.id,
        CoursePatch {
            professor_id: Some(substitute.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let report = ProfessorService::deactivate(&db, prof.id).await.unwrap();
    assert!(!report.active);

    let err = ProfessorService::deactivate(&db, prof.id).await.unwrap_err();
    assert!(
        matches!(err, ServiceError::Validation(ref errors) if errors == &vec!["The professor is already inactive".to_string()])
    );
}

#[tokio::test]
async fn active_and_inactive_professor_listings() {
    let db = setup_db().await;

    let err = ProfessorService::list_active(&db).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(ref m) if m == "No active professors found"));

    let hopper = seed_professor(&db, "900001", "Grace Hopper", None).await;
    let liskov = seed_professor(&db, "900002", "Barbara Liskov", None).await;

    let active = ProfessorService::list_active(&db).await.unwrap();
    assert_eq!(active.len(), 2);

    // Nobody has been deactivated yet.
    let err = ProfessorService::list_inactive(&db).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(ref m) if m == "No inactive professors found"));

    ProfessorService::deactivate(&db, hopper.id).await.unwrap();

    let active = ProfessorService::list_active(&db).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, liskov.id);

    let inactive = ProfessorService::list_inactive(&db).await.unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].id, hopper.id);
}

#[tokio::test]
async fn professor_create_validates_department_reference() {
    let db = setup_db().await;

    let err = ProfessorService::create(
        &db,
        NewProfessor {
            national_id: "900001".to_string(),
            name: "Grace Hopper".to_string(),
            email: "hopper@faculty.edu".to_string(),
            title: "Professor".to_string(),
            department_id: Some(42),
        },
    )
    .await
    .unwrap_err();
    match err {
        ServiceError::Validation(errors) => {
            assert_eq!(errors, vec!["Department not found".to_string()]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    // No department at all is fine.
    let prof = ProfessorService::create(
        &db,
        NewProfessor {
            national_id: "900001".to_string(),
            name: "Grace Hopper".to_string(),
            email: "hopper@faculty.edu".to_string(),
            title: "Professor".to_string(),
            department_id: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(prof.department_id, None);
}

#[tokio::test]
async fn relation_listings_and_filtered_searches() {
    let db = setup_db().await;
    let cs = seed_department(&db, "CS", "Computer Science").await;
    let math = seed_department(&db, "MATH", "Mathematics").await;
    let hopper = seed_professor(&db, "900001", "Grace Hopper", Some(cs.id)).await;
    let noether = seed_professor(&db, "900002", "Emmy Noether", Some(math.id)).await;
    seed_course(&db, "CS101", "Programming I", hopper.id, cs.id).await;
    seed_course(&db, "MATH201", "Abstract Algebra", noether.id, math.id).await;

    let cs_profs = DepartmentService::professors_of(&db, cs.id).await.unwrap();
    assert_eq!(cs_profs.len(), 1);
    assert_eq!(cs_profs[0].id, hopper.id);

    let math_courses = CourseService::find_by_department(&db, math.id).await.unwrap();
    assert_eq!(math_courses.len(), 1);
    assert_eq!(math_courses[0].code, "MATH201");

    let hoppers = CourseService::find_by_professor(&db, hopper.id).await.unwrap();
    assert_eq!(hoppers.len(), 1);

    let err = CourseService::find_by_professor(&db, 99).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Professor not found"));

    let by_title = ProfessorService::search_by_title(&db, "associate")
        .await
        .unwrap();
    assert_eq!(by_title.len(), 2);

    let four_credit = CourseService::find_by_credits(&db, 4).await.unwrap();
    assert_eq!(four_credit.len(), 2);
    let err = CourseService::find_by_credits(&db, 0).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn full_semester_walkthrough() {
    let db = setup_db().await;
    let dept = seed_department(&db, "CS", "Computer Science").await;
    let prof = seed_professor(&db, "900001", "Grace Hopper", Some(dept.id)).await;
    let ada = seed_student(&db, "100001", "Ada Lovelace", 3).await;
    let alan = seed_student(&db, "100002", "Alan Turing", 3).await;
    let course = seed_course(&db, "CS101", "Programming I", prof.id, dept.id).await;

    EnrollmentService::enroll(&db, ada.id, course.id).await.unwrap();
    EnrollmentService::enroll(&db, alan.id, course.id).await.unwrap();

    EnrollmentService::set_grade(&db, ada.id, course.id, 4.2)
        .await
        .unwrap();
    EnrollmentService::set_grade(&db, alan.id, course.id, 2.8)
        .await
        .unwrap();

    let roster = EnrollmentService::list_by_course(&db, course.id)
        .await
        .unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].passed, Some(true));
    assert_eq!(roster[1].passed, Some(false));

    // Alan drops the course, Ada's record is untouched.
    EnrollmentService::withdraw(&db, alan.id, course.id)
        .await
        .unwrap();
    let roster = EnrollmentService::list_by_course(&db, course.id)
        .await
        .unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].student_id, ada.id);

    // Winding the department down: courses go first, then professors, then
    // the department itself.
    let report = CourseService::deactivate(&db, course.id).await.unwrap();
    assert_eq!(report.students_unenrolled, 1);

    let err = DepartmentService::delete(&db, dept.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}
