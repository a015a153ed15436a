//! Consumer-facing surface over a finished [`FamilyTree`]: rendered names,
//! a stable name-ordered listing of everyone in the file, substring
//! filtering over rendered names, and default-subject selection.
//!
//! Everything here consumes the graph read-only; nothing feeds back into
//! the record builder or the resolver.

use crate::record::{FamilyTree, Person, Pointer};

/// Strips the surname delimiters (`/`) and any stray quotes from the raw
/// name and trims the remainder. A person with no usable name renders as
/// `"Unnamed relative"`.
pub fn display_name(person: &Person) -> String {
    let stripped: String = person
        .name()
        .chars()
        .filter(|c| *c != '/' && *c != '"')
        .collect();
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        String::from("Unnamed relative")
    } else {
        trimmed.to_owned()
    }
}

/// A name-ordered index of every person in a tree, computed once per load.
/// Ordering is case-insensitive on the rendered name with the pointer as a
/// tiebreak, so a reload of the same file lists people identically.
pub struct Roster {
    ordered: Vec<Pointer>,
}

impl Roster {
    pub fn new(tree: &FamilyTree) -> Self {
        let mut ordered: Vec<Pointer> = tree.people().iter().map(|(id, _)| id.clone()).collect();
        ordered.sort_by_cached_key(|id| {
            let name = tree.person(id).map(display_name).unwrap_or_default();
            (name.to_lowercase(), id.clone())
        });
        Self { ordered }
    }

    pub fn ordered(&self) -> &[Pointer] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Case-insensitive substring filtering over rendered names, keeping
    /// roster order. An empty query matches everyone.
    pub fn filter<'a>(&'a self, tree: &FamilyTree, query: &str) -> Vec<&'a str> {
        let query = query.trim().to_lowercase();
        self.ordered
            .iter()
            .filter(|id| {
                tree.person(id)
                    .map(|person| display_name(person).to_lowercase().contains(&query))
                    .unwrap_or(false)
            })
            .map(|id| id.as_str())
            .collect()
    }

    /// The first person whose rendered name contains `preferred`
    /// (case-insensitively), falling back to the first roster entry.
    pub fn default_subject<'a>(
        &'a self,
        tree: &FamilyTree,
        preferred: Option<&str>,
    ) -> Option<&'a str> {
        if let Some(preferred) = preferred {
            let wanted = preferred.to_lowercase();
            let hit = self.ordered.iter().find(|id| {
                tree.person(id)
                    .map(|person| display_name(person).to_lowercase().contains(&wanted))
                    .unwrap_or(false)
            });
            if let Some(id) = hit {
                return Some(id.as_str());
            }
        }
        self.ordered.first().map(|id| id.as_str())
    }
}
