use super::Career;
use serde::Serialize;
use std::collections::BTreeSet;

/// Selectable values offered to a user, derived from the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogOptions {
    pub courses: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub interests: BTreeSet<String>,
}

impl CatalogOptions {
    pub fn from_careers(careers: &[Career]) -> Self {
        let mut options = Self::default();
        for career in careers {
            options.courses.extend(career.courses.iter().cloned());
            options.skills.extend(career.skills.iter().cloned());
            options.interests.extend(career.interests.iter().cloned());
        }
        options
    }
}
