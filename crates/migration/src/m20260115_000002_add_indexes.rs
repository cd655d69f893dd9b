use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Indexes on enrollments for the cascade deletes and per-parent listings
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_student_id")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_course_id")
                    .table(Enrollments::Table)
                    .col(Enrollments::CourseId)
                    .to_owned(),
            )
            .await?;

        // Indexes on courses for the dependent-blocking checks and reverse listings
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_professor_id")
                    .table(Courses::Table)
                    .col(Courses::ProfessorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_department_id")
                    .table(Courses::Table)
                    .col(Courses::DepartmentId)
                    .to_owned(),
            )
            .await?;

        // Index on professors.department_id for department dependent counts
        manager
            .create_index(
                Index::create()
                    .name("idx_professors_department_id")
                    .table(Professors::Table)
                    .col(Professors::DepartmentId)
                    .to_owned(),
            )
            .await?;

        // Index on students.semester for the semester filter
        manager
            .create_index(
                Index::create()
                    .name("idx_students_semester")
                    .table(Students::Table)
                    .col(Students::Semester)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(Index::drop().name("idx_students_semester").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_professors_department_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_department_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_professor_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_enrollments_course_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_enrollments_student_id").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Enrollments {
    Table,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum Courses {
    Table,
    ProfessorId,
    DepartmentId,
}

#[derive(Iden)]
enum Professors {
    Table,
    DepartmentId,
}

#[derive(Iden)]
enum Students {
    Table,
    Semester,
}
