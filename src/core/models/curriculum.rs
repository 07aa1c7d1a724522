//! Curriculum model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Difficulty rating assumed when a curriculum entry carries none
pub const DEFAULT_DIFFICULTY: u8 = 3;

/// Category of a curriculum course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// General-education requirement
    General,
    /// Major requirement
    Major,
    /// Elective
    Elective,
    /// Internship
    Internship,
    /// Graduation thesis
    Thesis,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "major" => Ok(Self::Major),
            "elective" => Ok(Self::Elective),
            "internship" => Ok(Self::Internship),
            "thesis" => Ok(Self::Thesis),
            other => Err(format!("Unknown course category: '{other}'")),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::General => "general",
            Self::Major => "major",
            Self::Elective => "elective",
            Self::Internship => "internship",
            Self::Thesis => "thesis",
        };
        write!(f, "{as_str}")
    }
}

/// A course in a degree curriculum
///
/// The `code` is the unique key within a curriculum; matching against the
/// transcript goes through it first, then through the normalized name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumCourse {
    /// External course code (unique within the curriculum)
    pub code: String,

    /// Course name
    pub name: String,

    /// Credit weight
    pub credits: f32,

    /// Recommended term label (e.g., "semester 3")
    #[serde(default)]
    pub recommended_term: Option<String>,

    /// Course category
    #[serde(default)]
    pub category: Option<Category>,

    /// Difficulty rating on a 1-5 scale
    #[serde(default)]
    pub difficulty: Option<u8>,
}

impl CurriculumCourse {
    /// Create a new curriculum course
    ///
    /// # Arguments
    /// * `code` - External course code
    /// * `name` - Course name
    /// * `credits` - Credit weight
    #[must_use]
    pub const fn new(code: String, name: String, credits: f32) -> Self {
        Self {
            code,
            name,
            credits,
            recommended_term: None,
            category: None,
            difficulty: None,
        }
    }

    /// Create a curriculum course with a category and difficulty rating
    #[must_use]
    pub const fn with_rating(
        code: String,
        name: String,
        credits: f32,
        category: Category,
        difficulty: u8,
    ) -> Self {
        Self {
            code,
            name,
            credits,
            recommended_term: None,
            category: Some(category),
            difficulty: Some(difficulty),
        }
    }

    /// Effective difficulty rating, defaulting to 3 when unset
    #[must_use]
    pub fn difficulty(&self) -> u8 {
        self.difficulty.unwrap_or(DEFAULT_DIFFICULTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curriculum_course_creation() {
        let course = CurriculumCourse::new(
            "CS102".to_string(),
            "Data Structures and Algorithms".to_string(),
            3.0,
        );

        assert_eq!(course.code, "CS102");
        assert_eq!(course.name, "Data Structures and Algorithms");
        assert!((course.credits - 3.0).abs() < f32::EPSILON);
        assert!(course.category.is_none());
        assert_eq!(course.difficulty(), DEFAULT_DIFFICULTY);
    }

    #[test]
    fn test_explicit_difficulty() {
        let course = CurriculumCourse::with_rating(
            "MIS411".to_string(),
            "Graduation Thesis".to_string(),
            10.0,
            Category::Thesis,
            5,
        );

        assert_eq!(course.difficulty(), 5);
        assert_eq!(course.category, Some(Category::Thesis));
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("general".parse::<Category>(), Ok(Category::General));
        assert_eq!(" Major ".parse::<Category>(), Ok(Category::Major));
        assert_eq!("ELECTIVE".parse::<Category>(), Ok(Category::Elective));
        assert!("unknown".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display_round_trip() {
        for category in [
            Category::General,
            Category::Major,
            Category::Elective,
            Category::Internship,
            Category::Thesis,
        ] {
            let parsed: Category = category.to_string().parse().expect("round trip");
            assert_eq!(parsed, category);
        }
    }
}
