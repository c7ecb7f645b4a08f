// Data models
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::duration::parse_duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub name: String,
    pub instructor: String,
    pub credits: u32,
    pub meeting_times: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub courses: Vec<Course>,
}

/// A single recorded class session. Immutable once loaded from the catalog.
///
/// `id` is unique only within a course; use [`Lecture::key`] whenever a
/// globally unique identity is needed. `duration` is the raw `mm:ss` source
/// string and `date` is display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecture {
    pub id: String,
    pub course: String,
    pub title: String,
    pub instructor: String,
    pub duration: String,
    pub date: String,
    pub description: String,
}

impl Lecture {
    pub fn key(&self) -> LectureKey {
        LectureKey::new(&self.course, &self.id)
    }

    /// Total length in seconds; malformed duration strings yield 0.
    pub fn duration_seconds(&self) -> u32 {
        parse_duration(&self.duration)
    }
}

/// Composite `course + "-" + id` identity. Mock lecture ids repeat across
/// courses, so progress tracking keys on the pair rather than the bare id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LectureKey(String);

impl LectureKey {
    pub fn new(course: &str, id: &str) -> Self {
        Self(format!("{}-{}", course, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LectureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
