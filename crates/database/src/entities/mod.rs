pub mod course;
pub mod department;
pub mod enrollment;
pub mod professor;
pub mod student;

pub use self::course as courses;
pub use self::department as departments;
pub use self::enrollment as enrollments;
pub use self::professor as professors;
pub use self::student as students;
