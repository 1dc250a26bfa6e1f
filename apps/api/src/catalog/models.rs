use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::normalize::normalize;

/// Proficiency level scoping a set of recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// The level name as it appears in dataset column headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    /// Matches a level name verbatim against the column-header fragment.
    /// `"beginner"` or `"Expert"` are not levels.
    pub fn from_column_fragment(fragment: &str) -> Option<Self> {
        Level::ALL.into_iter().find(|l| l.as_str() == fragment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Courses,
    Certifications,
    Projects,
}

/// One (level, category) recommendation cell of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub level: Level,
    pub category: Category,
}

impl Slot {
    pub fn new(level: Level, category: Category) -> Self {
        Self { level, category }
    }
}

/// A single dataset row.
///
/// Empty CSV cells are stored as `None` so that "absent" and "blank"
/// behave the same everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerRecord {
    pub programming_language: Option<String>,
    pub career_path: Option<String>,
    pub description: Option<String>,
    pub cells: HashMap<Slot, String>,
}

impl CareerRecord {
    pub fn cell(&self, slot: Slot) -> Option<&str> {
        self.cells.get(&slot).map(String::as_str)
    }

    /// Builds the recommendation bundle for one level.
    pub fn bundle(&self, level: Level) -> LevelBundle {
        LevelBundle {
            courses: normalize(self.cell(Slot::new(level, Category::Courses))),
            certifications: normalize(self.cell(Slot::new(level, Category::Certifications))),
            projects: normalize(self.cell(Slot::new(level, Category::Projects))),
        }
    }

    pub fn description_or_empty(&self) -> String {
        self.description.clone().unwrap_or_default()
    }
}

/// Courses, certifications and projects for one proficiency level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBundle {
    pub courses: Vec<String>,
    pub certifications: Vec<String>,
    pub projects: Vec<String>,
}

impl LevelBundle {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty() && self.certifications.is_empty() && self.projects.is_empty()
    }
}

/// A value per proficiency level, serialized as `{beginner, intermediate, advanced}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByLevel<T> {
    pub beginner: T,
    pub intermediate: T,
    pub advanced: T,
}

/// Full per-row projection returned by the by-language query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDetail {
    pub programming_language: String,
    pub career: String,
    pub description: String,
    pub courses: ByLevel<Vec<String>>,
    pub certifications: ByLevel<Vec<String>>,
    pub projects: ByLevel<Vec<String>>,
}

impl CareerDetail {
    pub fn from_record(record: &CareerRecord) -> Self {
        let [beginner, intermediate, advanced] = Level::ALL.map(|level| record.bundle(level));

        Self {
            programming_language: record.programming_language.clone().unwrap_or_default(),
            career: record.career_path.clone().unwrap_or_default(),
            description: record.description_or_empty(),
            courses: ByLevel {
                beginner: beginner.courses,
                intermediate: intermediate.courses,
                advanced: advanced.courses,
            },
            certifications: ByLevel {
                beginner: beginner.certifications,
                intermediate: intermediate.certifications,
                advanced: advanced.certifications,
            },
            projects: ByLevel {
                beginner: beginner.projects,
                intermediate: intermediate.projects,
                advanced: advanced.projects,
            },
        }
    }
}

/// Single-level projection returned by the career-details query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDetail {
    pub career: String,
    pub programming_language: String,
    pub description: String,
    #[serde(flatten)]
    pub bundle: LevelBundle,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CareerRecord {
        let mut cells = HashMap::new();
        cells.insert(
            Slot::new(Level::Beginner, Category::Courses),
            "Intro to Python\n  Python Crash Course \n".to_string(),
        );
        cells.insert(
            Slot::new(Level::Advanced, Category::Projects),
            "Build a recommender".to_string(),
        );
        CareerRecord {
            programming_language: Some("Python".to_string()),
            career_path: Some("Data Scientist".to_string()),
            description: None,
            cells,
        }
    }

    #[test]
    fn test_level_fragment_is_verbatim() {
        assert_eq!(
            Level::from_column_fragment("Intermediate"),
            Some(Level::Intermediate)
        );
        assert_eq!(Level::from_column_fragment("intermediate"), None);
        assert_eq!(Level::from_column_fragment("Expert"), None);
        assert_eq!(Level::from_column_fragment(" Beginner"), None);
    }

    #[test]
    fn test_career_detail_from_record() {
        let detail = CareerDetail::from_record(&record());
        assert_eq!(detail.programming_language, "Python");
        assert_eq!(detail.description, "");
        assert_eq!(
            detail.courses.beginner,
            vec!["Intro to Python", "Python Crash Course"]
        );
        assert!(detail.courses.advanced.is_empty());
        assert_eq!(detail.projects.advanced, vec!["Build a recommender"]);
        assert!(detail.courses.intermediate.is_empty());
        assert!(detail.certifications.intermediate.is_empty());
    }

    #[test]
    fn test_career_detail_serializes_camel_case_by_category() {
        let json = serde_json::to_value(CareerDetail::from_record(&record())).unwrap();
        assert_eq!(json["programmingLanguage"], "Python");
        assert_eq!(json["career"], "Data Scientist");
        assert_eq!(json["description"], "");
        assert_eq!(json["courses"]["beginner"][1], "Python Crash Course");
        assert!(json["certifications"]["intermediate"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_path_detail_flattens_bundle() {
        let rec = record();
        let detail = PathDetail {
            career: "Data Scientist".to_string(),
            programming_language: "Python".to_string(),
            description: String::new(),
            bundle: rec.bundle(Level::Beginner),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["courses"][0], "Intro to Python");
        assert!(json["projects"].as_array().unwrap().is_empty());
        assert!(json.get("bundle").is_none());
    }
}
