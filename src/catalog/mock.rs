// Mock catalog data, stand-in for the LMS API provider
use super::models::{Course, Lecture, Semester};

fn course(
    id: &str,
    code: &str,
    name: &str,
    instructor: &str,
    credits: u32,
    meeting_times: &str,
    location: &str,
) -> Course {
    Course {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        instructor: instructor.to_string(),
        credits,
        meeting_times: meeting_times.to_string(),
        location: location.to_string(),
    }
}

pub fn semesters() -> Vec<Semester> {
    vec![
        Semester {
            id: "fall-2025".to_string(),
            name: "Fall 2025".to_string(),
            start_date: "2025-08-25".to_string(),
            end_date: "2025-12-15".to_string(),
            courses: vec![
                course(
                    "cs210",
                    "CS 210",
                    "Introduction to Computer Science",
                    "Dr. Jane Smith",
                    3,
                    "MWF 10:00-10:50",
                    "Science Building 101",
                ),
                course(
                    "math241",
                    "MATH 241",
                    "Calculus III",
                    "Dr. Robert Johnson",
                    4,
                    "TTh 11:00-12:15",
                    "Math Building 305",
                ),
                course(
                    "phys211",
                    "PHYS 211",
                    "University Physics I",
                    "Dr. Michael Chen",
                    4,
                    "MWF 1:00-1:50, T 3:00-4:50 (Lab)",
                    "Physics Building 210",
                ),
            ],
        },
        Semester {
            id: "spring-2026".to_string(),
            name: "Spring 2026".to_string(),
            start_date: "2026-01-12".to_string(),
            end_date: "2026-05-07".to_string(),
            courses: vec![
                course(
                    "cs201",
                    "CS 201",
                    "Data Structures and Algorithms",
                    "Dr. Thomas Lee",
                    3,
                    "MWF 11:00-11:50",
                    "Science Building 203",
                ),
                course(
                    "math242",
                    "MATH 242",
                    "Differential Equations",
                    "Dr. Emily Parker",
                    3,
                    "TTh 2:00-3:15",
                    "Math Building 202",
                ),
                course(
                    "phys212",
                    "PHYS 212",
                    "University Physics II",
                    "Dr. Michael Chen",
                    4,
                    "MWF 2:00-2:50, Th 3:00-4:50 (Lab)",
                    "Physics Building 210",
                ),
                course(
                    "hist101",
                    "HIST 101",
                    "World History I",
                    "Prof. David Thompson",
                    3,
                    "MWF 9:00-9:50",
                    "Humanities Hall 305",
                ),
            ],
        },
        Semester {
            id: "summer-2026".to_string(),
            name: "Summer 2026".to_string(),
            start_date: "2026-06-01".to_string(),
            end_date: "2026-07-30".to_string(),
            courses: vec![
                course(
                    "cs215",
                    "CS 215",
                    "Database Systems",
                    "Dr. Amanda Garcia",
                    3,
                    "MTWTh 9:00-10:30",
                    "Science Building 105",
                ),
                course(
                    "psyc101",
                    "PSYC 101",
                    "Introduction to Psychology",
                    "Dr. James Wilson",
                    3,
                    "MTWTh 1:00-2:30",
                    "Social Sciences 203",
                ),
            ],
        },
    ]
}

/// Recorded lectures for a course. Every course shares the same five mock
/// entries until the LMS integration lands, so lecture ids repeat across
/// courses and only the composite key is unique.
pub fn lectures_for(course: &Course) -> Vec<Lecture> {
    let entries = [
        (
            "1",
            "Introduction to the Course",
            "50:00",
            "2024-03-15",
            "Overview of course objectives and syllabus review.",
        ),
        (
            "2",
            "Fundamental Concepts",
            "45:30",
            "2024-03-17",
            "Introduction to basic principles and terminology.",
        ),
        (
            "3",
            "Advanced Topics Part 1",
            "55:15",
            "2024-03-20",
            "Deep dive into advanced concepts and their applications.",
        ),
        (
            "4",
            "Problem Solving Session",
            "48:20",
            "2024-03-22",
            "Interactive session working through complex problems.",
        ),
        (
            "5",
            "Case Studies",
            "52:45",
            "2024-03-24",
            "Analysis of real-world applications and examples.",
        ),
    ];

    entries
        .iter()
        .map(|(id, title, duration, date, description)| Lecture {
            id: id.to_string(),
            course: course.code.clone(),
            title: title.to_string(),
            instructor: course.instructor.clone(),
            duration: duration.to_string(),
            date: date.to_string(),
            description: description.to_string(),
        })
        .collect()
}
