use crate::models::{Difficulty, Resource, ResourceType};

/// A filter dimension: either unconstrained or pinned to one value.
///
/// This replaces the web client's `"all"` sentinel string, which could
/// collide with a real category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Any,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Any
    }
}

impl<T: PartialEq> Selection<T> {
    /// True when unconstrained or when the value equals the pinned one.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(only) => only == value,
        }
    }
}

impl Selection<String> {
    /// Map the HTTP edge's convention back to a tagged value: an absent
    /// parameter or the literal `all` means no constraint.
    pub fn from_param(param: Option<String>) -> Self {
        match param {
            None => Selection::Any,
            Some(s) if s == "all" => Selection::Any,
            Some(s) => Selection::Only(s),
        }
    }
}

/// The four independent filter dimensions. Default state admits everything.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub search: String,
    pub category: Selection<String>,
    pub kind: Selection<ResourceType>,
    pub difficulty: Selection<Difficulty>,
}

impl FilterState {
    /// A resource is included iff all four predicates hold.
    ///
    /// Search is a case-insensitive substring match against title,
    /// description, or any tag; category is an exact, case-sensitive match.
    pub fn matches(&self, resource: &Resource) -> bool {
        self.matches_search(resource)
            && self.category.admits(&resource.category)
            && self.kind.admits(&resource.kind)
            && self.difficulty.admits(&resource.difficulty)
    }

    fn matches_search(&self, resource: &Resource) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        resource.title.to_lowercase().contains(&needle)
            || resource.description.to_lowercase().contains(&needle)
            || resource
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}
