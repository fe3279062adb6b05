//! Course catalog
//!
//! Courses are immutable once added to a [`Catalog`], which hands out
//! small-integer [`CourseId`] handles. All identity checks in the
//! eligibility rules key on the handle, not on the course code: two
//! courses added separately are distinct even if their codes collide.

use serde::{Deserialize, Serialize};

use super::ScheduleSlot;

/// Handle to a course in a [`Catalog`]
///
/// Minted by [`Catalog::add`]; only valid for the catalog that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(usize);

/// A course catalog entry
///
/// Immutable after being added to a catalog. The semester is informational
/// only; no rule enforces it. Credits and schedule validity (positive
/// credits, `start < end`) are the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Course code, e.g. "INF101"
    pub code: String,

    /// Display name, e.g. "Programming I"
    pub name: String,

    /// Credit weight counted against the enrollment ceiling
    pub credits: u32,

    /// Semester the course is offered in (informational)
    pub semester: u32,

    /// Courses that must be passed before enrolling, in listed order
    pub prerequisites: Vec<CourseId>,

    /// Weekly schedule slots, in listed order
    pub schedules: Vec<ScheduleSlot>,
}

impl Course {
    /// Create a course with no prerequisites and no schedule
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
        semester: u32,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
            semester,
            prerequisites: Vec::new(),
            schedules: Vec::new(),
        }
    }

    /// Set the prerequisite list
    #[must_use]
    pub fn with_prerequisites(mut self, prerequisites: Vec<CourseId>) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    /// Set the weekly schedule slots
    #[must_use]
    pub fn with_schedules(mut self, schedules: Vec<ScheduleSlot>) -> Self {
        self.schedules = schedules;
        self
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({} credits)", self.code, self.name, self.credits)
    }
}

/// Arena of course records
///
/// The catalog owns every course; students and prerequisite lists refer to
/// courses by [`CourseId`]. Multiple students can share one catalog
/// read-only since nothing mutates a course after [`Catalog::add`].
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self { courses: Vec::new() }
    }

    /// Add a course and return its handle
    pub fn add(&mut self, course: Course) -> CourseId {
        let id = CourseId(self.courses.len());
        self.courses.push(course);
        id
    }

    /// Look up a course by handle
    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(id.0)
    }

    /// Number of courses in the catalog
    #[must_use]
    pub const fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Iterate over all courses with their handles
    pub fn courses(&self) -> impl Iterator<Item = (CourseId, &Course)> {
        self.courses.iter().enumerate().map(|(i, c)| (CourseId(i), c))
    }
}

impl std::ops::Index<CourseId> for Catalog {
    type Output = Course;

    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalog.
    fn index(&self, id: CourseId) -> &Course {
        &self.courses[id.0]
    }
}
