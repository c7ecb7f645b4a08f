// Course and lecture catalog
pub mod mock;
pub mod models;

pub use models::{Course, Lecture, LectureKey, Semester};

/// Find a course by id across all semesters. Unknown ids are a defined
/// empty state for the course screens, not an error.
pub fn find_course<'a>(semesters: &'a [Semester], course_id: &str) -> Option<&'a Course> {
    semesters
        .iter()
        .flat_map(|semester| semester.courses.iter())
        .find(|course| course.id == course_id)
}
