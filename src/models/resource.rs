use serde::{Deserialize, Serialize};

/// A curated learning resource in the community catalog.
///
/// Records are loaded once from the bundled catalog document at startup and
/// are immutable afterwards. `id` is unique across the catalog and `rating`
/// is clamped to 0–5 by validation, not by the type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    /// Free-text label, not an enumeration. Distinct values present in the
    /// catalog form the category filter options.
    pub category: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub rating: u8,
    pub added_by: String,
    /// Opaque timestamp string, carried through as-is.
    pub added_at: String,
    pub featured: bool,
}

/// The medium of a resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Video,
    Course,
    Tool,
    Documentation,
    Book,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Course => "course",
            Self::Tool => "tool",
            Self::Documentation => "documentation",
            Self::Book => "book",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "article" => Some(Self::Article),
            "video" => Some(Self::Video),
            "course" => Some(Self::Course),
            "tool" => Some(Self::Tool),
            "documentation" => Some(Self::Documentation),
            "book" => Some(Self::Book),
            _ => None,
        }
    }
}

/// Experience level a resource is pitched at.
///
/// Unlike categories and types, the difficulty option list is fixed
/// regardless of what the catalog contains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}
