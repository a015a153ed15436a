use core::hash::BuildHasherDefault;
use std::collections::HashMap;
use std::collections::hash_map::{Entry, Iter};
use seahash::SeaHasher;
use serde::Serialize;

// used to print out readable forms of a record
use std::fmt;

// ------------- Pointer -------------
/// The opaque identifier token of a record, e.g. `@I1@`, captured verbatim
/// from the file. Pointers are matched literally and people and families
/// live in independent namespaces, so the same token may identify one of
/// each without colliding.
pub type Pointer = String;

pub type PointerHasher = BuildHasherDefault<SeaHasher>;

// ------------- Fact -------------
/// A single recorded event: an optional date and an optional place, both
/// kept as the raw strings found in the file.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct Fact {
    pub date: Option<String>,
    pub place: Option<String>,
}
impl Fact {
    pub fn new() -> Self {
        Self { date: None, place: None }
    }
}
impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            self.date.as_deref().unwrap_or(""),
            self.place.as_deref().unwrap_or("")
        )
    }
}

// ------------- Sex -------------
/// Derived from the raw sex code at query time, never stored.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Sex {
    Male,
    Female,
    Unknown,
}
impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
            Sex::Unknown => write!(f, "Unknown"),
        }
    }
}

// ------------- Person -------------
/// An individual record. Fields hold whatever the file said, uninterpreted:
/// the name keeps its surname delimiters, the sex keeps its single-letter
/// code, and the family references are raw pointer tokens that may dangle.
#[derive(PartialEq, Eq, Debug)]
pub struct Person {
    id: Pointer,
    name: String,
    sex: String,
    birth: Option<Fact>,
    death: Option<Fact>,
    residences: Vec<Fact>,
    family_child: Option<Pointer>,
    families_spouse: Vec<Pointer>,
}

impl Person {
    pub fn new(id: Pointer) -> Self {
        Self {
            id,
            name: String::new(),
            sex: String::new(),
            birth: None,
            death: None,
            residences: Vec::new(),
            family_child: None,
            families_spouse: Vec::new(),
        }
    }
    // It's intentional to encapsulate the fields in the struct and only
    // expose them using "getters", because this yields true immutability
    // for records once a parse has completed.
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// The raw one-letter code from the file (may be empty).
    pub fn sex_code(&self) -> &str {
        &self.sex
    }
    /// The enumerated sex, defaulted at query time.
    pub fn sex(&self) -> Sex {
        match self.sex.as_str() {
            "M" => Sex::Male,
            "F" => Sex::Female,
            _ => Sex::Unknown,
        }
    }
    pub fn birth(&self) -> Option<&Fact> {
        self.birth.as_ref()
    }
    pub fn death(&self) -> Option<&Fact> {
        self.death.as_ref()
    }
    /// Residence facts in the order they appeared in the file.
    pub fn residences(&self) -> &[Fact] {
        &self.residences
    }
    /// The family in which this person is a child, when one was recorded.
    /// A file declaring several keeps only the last one.
    pub fn family_child(&self) -> Option<&str> {
        self.family_child.as_deref()
    }
    /// The families in which this person is a spouse, in file order.
    pub fn families_spouse(&self) -> &[Pointer] {
        &self.families_spouse
    }

    // mutators for the record builder; records are mutated in place and
    // never replaced, so pointers stay stable across the whole parse
    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }
    pub(crate) fn set_sex(&mut self, sex: &str) {
        self.sex = sex.to_owned();
    }
    pub(crate) fn birth_mut(&mut self) -> &mut Fact {
        self.birth.get_or_insert_with(Fact::new)
    }
    pub(crate) fn death_mut(&mut self) -> &mut Fact {
        self.death.get_or_insert_with(Fact::new)
    }
    /// Appends an empty residence fact and returns its index, so the
    /// parser can aim subsequent detail lines at it.
    pub(crate) fn push_residence(&mut self) -> usize {
        self.residences.push(Fact::new());
        self.residences.len() - 1
    }
    pub(crate) fn residence_mut(&mut self, index: usize) -> Option<&mut Fact> {
        self.residences.get_mut(index)
    }
    pub(crate) fn set_family_child(&mut self, family: &str) {
        self.family_child = Some(family.to_owned());
    }
    pub(crate) fn push_family_spouse(&mut self, family: &str) {
        self.families_spouse.push(family.to_owned());
    }
}
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [{}]", self.id, self.name)
    }
}

// ------------- Family -------------
/// A family unit record. The husband and wife slots are positional labels
/// from the file and are never validated against the sex of the person
/// they point at; either, both, or neither may be populated.
#[derive(PartialEq, Eq, Debug)]
pub struct Family {
    id: Pointer,
    husband: Option<Pointer>,
    wife: Option<Pointer>,
    children: Vec<Pointer>,
    marriage: Option<Fact>,
}

impl Family {
    pub fn new(id: Pointer) -> Self {
        Self {
            id,
            husband: None,
            wife: None,
            children: Vec::new(),
            marriage: None,
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn husband(&self) -> Option<&str> {
        self.husband.as_deref()
    }
    pub fn wife(&self) -> Option<&str> {
        self.wife.as_deref()
    }
    /// Child pointers in the order they appeared in the file.
    pub fn children(&self) -> &[Pointer] {
        &self.children
    }
    pub fn marriage(&self) -> Option<&Fact> {
        self.marriage.as_ref()
    }

    pub(crate) fn set_husband(&mut self, person: &str) {
        self.husband = Some(person.to_owned());
    }
    pub(crate) fn set_wife(&mut self, person: &str) {
        self.wife = Some(person.to_owned());
    }
    pub(crate) fn push_child(&mut self, person: &str) {
        self.children.push(person.to_owned());
    }
    pub(crate) fn marriage_mut(&mut self) -> &mut Fact {
        self.marriage.get_or_insert_with(Fact::new)
    }
}

// ------------- Keepers -------------
/// Keepers own the records and guarantee there is at most one per pointer:
/// `keep` is fetch-or-create, and a pointer seen again yields the record
/// created the first time around.
#[derive(PartialEq, Debug)]
pub struct PersonKeeper {
    kept: HashMap<Pointer, Person, PointerHasher>,
}
impl PersonKeeper {
    pub fn new() -> Self {
        Self { kept: HashMap::default() }
    }
    pub fn keep(&mut self, pointer: &str) -> (&mut Person, bool) {
        let mut previously_kept = true;
        match self.kept.entry(pointer.to_owned()) {
            Entry::Vacant(e) => {
                e.insert(Person::new(pointer.to_owned()));
                previously_kept = false;
            }
            Entry::Occupied(_e) => (),
        };
        (self.kept.get_mut(pointer).unwrap(), previously_kept)
    }
    pub fn get(&self, pointer: &str) -> Option<&Person> {
        self.kept.get(pointer)
    }
    pub fn iter(&self) -> Iter<'_, Pointer, Person> {
        self.kept.iter()
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

#[derive(PartialEq, Debug)]
pub struct FamilyKeeper {
    kept: HashMap<Pointer, Family, PointerHasher>,
}
impl FamilyKeeper {
    pub fn new() -> Self {
        Self { kept: HashMap::default() }
    }
    pub fn keep(&mut self, pointer: &str) -> (&mut Family, bool) {
        let mut previously_kept = true;
        match self.kept.entry(pointer.to_owned()) {
            Entry::Vacant(e) => {
                e.insert(Family::new(pointer.to_owned()));
                previously_kept = false;
            }
            Entry::Occupied(_e) => (),
        };
        (self.kept.get_mut(pointer).unwrap(), previously_kept)
    }
    pub fn get(&self, pointer: &str) -> Option<&Family> {
        self.kept.get(pointer)
    }
    pub fn iter(&self) -> Iter<'_, Pointer, Family> {
        self.kept.iter()
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

// ------------- FamilyTree -------------
/// The whole graph produced by one parse: a keeper of people and a keeper
/// of families. Built once, then treated as read-only by every consumer;
/// a reload replaces the tree wholesale instead of mutating it.
#[derive(PartialEq, Debug)]
pub struct FamilyTree {
    people: PersonKeeper,
    families: FamilyKeeper,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self {
            people: PersonKeeper::new(),
            families: FamilyKeeper::new(),
        }
    }
    // functions to access the owned keepers
    pub fn people(&self) -> &PersonKeeper {
        &self.people
    }
    pub fn families(&self) -> &FamilyKeeper {
        &self.families
    }
    pub fn person(&self, pointer: &str) -> Option<&Person> {
        self.people.get(pointer)
    }
    pub fn family(&self, pointer: &str) -> Option<&Family> {
        self.families.get(pointer)
    }

    pub(crate) fn keep_person(&mut self, pointer: &str) -> (&mut Person, bool) {
        self.people.keep(pointer)
    }
    pub(crate) fn keep_family(&mut self, pointer: &str) -> (&mut Family, bool) {
        self.families.keep(pointer)
    }
    pub(crate) fn person_mut(&mut self, pointer: &str) -> Option<&mut Person> {
        self.people.kept.get_mut(pointer)
    }
    pub(crate) fn family_mut(&mut self, pointer: &str) -> Option<&mut Family> {
        self.families.kept.get_mut(pointer)
    }
}
