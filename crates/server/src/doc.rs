use crate::routes::{course, department, enrollment, health, professor, root, student};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        student::create_student,
        student::list_students,
        student::get_student,
        student::update_student,
        student::deactivate_student,
        student::get_student_courses,
        student::find_student_by_national_id,
        student::find_students_by_semester,
        student::search_students_by_name,
        professor::create_professor,
        professor::list_professors,
        professor::get_professor,
        professor::update_professor,
        professor::deactivate_professor,
        professor::get_professor_courses,
        professor::find_professor_by_national_id,
        professor::search_professors_by_name,
        professor::search_professors_by_title,
        professor::list_active_professors,
        professor::list_inactive_professors,
        professor::find_professors_by_department,
        department::create_department,
        department::list_departments,
        department::get_department,
        department::update_department,
        department::delete_department,
        department::get_department_professors,
        department::get_department_courses,
        department::find_department_by_code,
        department::search_departments_by_name,
        course::create_course,
        course::list_courses,
        course::get_course,
        course::update_course,
        course::deactivate_course,
        course::get_course_students,
        course::find_course_by_code,
        course::search_courses_by_name,
        course::find_courses_by_credits,
        course::find_courses_by_professor,
        course::find_courses_by_department,
        enrollment::create_enrollment,
        enrollment::get_enrollment,
        enrollment::withdraw_enrollment,
        enrollment::set_enrollment_grade,
        enrollment::list_enrollments_by_student,
        enrollment::list_enrollments_by_course
    ),
    tags(
        (name = "Health", description = "Service health endpoints"),
        (name = "Students", description = "Student records"),
        (name = "Professors", description = "Professor records"),
        (name = "Departments", description = "Department records"),
        (name = "Courses", description = "Course catalog"),
        (name = "Enrollments", description = "Student-course enrollments and grades"),
    ),
    info(
        title = "University Records API",
        version = "1.0.0",
        description = "Students, professors, departments, courses, and enrollments",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
