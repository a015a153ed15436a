use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::record::{FamilyTree, Person, Pointer};

lazy_static! {
    // first plausible four-digit year anywhere in a free-form date string
    static ref YEAR: Regex = Regex::new(r"(1[0-9]{3}|20[0-9]{2}|2100)").unwrap();
}

/// One related person as seen from a query subject: the raw name straight
/// from the record plus a short context fact (a marriage date for spouses,
/// otherwise a lifespan).
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct Relative {
    pub id: Pointer,
    pub name: String,
    pub meta: String,
}
impl Relative {
    fn of(person: &Person) -> Self {
        Self {
            id: person.id().to_owned(),
            name: person.name().to_owned(),
            meta: lifespan(person),
        }
    }
}

fn extract_year(text: &str) -> Option<&str> {
    YEAR.find(text).map(|m| m.as_str())
}

/// Renders a person's lifespan from whatever years can be dug out of the
/// raw birth and death date strings: `"1850 – 1920"`, `"? – 1920"`,
/// `"1850 – "`, or `""` when neither string yields a year.
pub fn lifespan(person: &Person) -> String {
    let birth = person.birth().and_then(|f| f.date.as_deref()).and_then(extract_year);
    let death = person.death().and_then(|f| f.date.as_deref()).and_then(extract_year);
    if birth.is_none() && death.is_none() {
        return String::new();
    }
    format!("{} – {}", birth.unwrap_or("?"), death.unwrap_or(""))
}

// Relationship queries. All three are pure reads over the finished tree,
// derive their answers on demand, and silently drop any stored reference
// that does not resolve to a kept record.
impl FamilyTree {
    /// The husband and wife (in that order) of the family in which the
    /// subject is a child. Unpopulated or unresolved roles are omitted,
    /// and a family that pathologically lists the subject in a parent
    /// role never yields the subject as their own parent.
    pub fn parents(&self, subject: &str) -> Vec<Relative> {
        let Some(person) = self.person(subject) else {
            return Vec::new();
        };
        let Some(family) = person.family_child().and_then(|f| self.family(f)) else {
            return Vec::new();
        };
        [family.husband(), family.wife()]
            .into_iter()
            .flatten()
            .filter(|pointer| *pointer != subject)
            .filter_map(|pointer| self.person(pointer))
            .map(Relative::of)
            .collect()
    }

    /// The other spouse of every family in which the subject is a spouse,
    /// in stored order. A family where the subject matches neither role
    /// contributes nothing, and the subject never appears as their own
    /// spouse even when a record lists one person in both roles. The meta
    /// is the family's marriage date when recorded, else the spouse's
    /// lifespan.
    pub fn spouses(&self, subject: &str) -> Vec<Relative> {
        let Some(person) = self.person(subject) else {
            return Vec::new();
        };
        let mut spouses = Vec::new();
        for family_pointer in person.families_spouse() {
            let Some(family) = self.family(family_pointer) else {
                continue;
            };
            let other = if family.husband() == Some(subject) {
                family.wife()
            } else if family.wife() == Some(subject) {
                family.husband()
            } else {
                None
            };
            let Some(spouse_pointer) = other else {
                continue;
            };
            if spouse_pointer == subject {
                continue;
            }
            let Some(spouse) = self.person(spouse_pointer) else {
                continue;
            };
            let meta = match family.marriage().and_then(|m| m.date.as_deref()) {
                Some(date) => format!("Married {date}"),
                None => lifespan(spouse),
            };
            spouses.push(Relative {
                id: spouse_pointer.to_owned(),
                name: spouse.name().to_owned(),
                meta,
            });
        }
        spouses
    }

    /// Every resolving child of every family in which the subject is a
    /// spouse, families in stored order and children in family order. No
    /// deduplication: a child recorded in two of the subject's families
    /// appears once per occurrence.
    pub fn children(&self, subject: &str) -> Vec<Relative> {
        let Some(person) = self.person(subject) else {
            return Vec::new();
        };
        let mut children = Vec::new();
        for family_pointer in person.families_spouse() {
            let Some(family) = self.family(family_pointer) else {
                continue;
            };
            for child_pointer in family.children() {
                if let Some(child) = self.person(child_pointer) {
                    children.push(Relative::of(child));
                }
            }
        }
        children
    }
}
