use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::record::{FamilyTree, Pointer};

lazy_static! {
    // <level> [<@pointer@>] <tag> [<value>]
    static ref LINE: Regex =
        Regex::new(r"^(\d+)\s+(?:(@[A-Za-z0-9_]+@)\s+)?(\S+)(?:\s+(.*))?$").unwrap();
}

// ------------- Tag -------------
// The subset of GEDCOM tags the record builder understands. Everything
// else lexes to Other, which dispatch treats as a no-op.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Tag {
    Individual,
    Family,
    Name,
    Sex,
    Birth,
    Death,
    Residence,
    FamilySpouse,
    FamilyChild,
    Husband,
    Wife,
    Child,
    Marriage,
    Date,
    Place,
    Other,
}
impl Tag {
    fn lex(raw: &str) -> Self {
        match raw {
            "INDI" => Tag::Individual,
            "FAM" => Tag::Family,
            "NAME" => Tag::Name,
            "SEX" => Tag::Sex,
            "BIRT" => Tag::Birth,
            "DEAT" => Tag::Death,
            "RESI" => Tag::Residence,
            "FAMS" => Tag::FamilySpouse,
            "FAMC" => Tag::FamilyChild,
            "HUSB" => Tag::Husband,
            "WIFE" => Tag::Wife,
            "CHIL" => Tag::Child,
            "MARR" => Tag::Marriage,
            "DATE" => Tag::Date,
            "PLAC" => Tag::Place,
            _ => Tag::Other,
        }
    }
}

// ------------- Cursor -------------
// Which record the level-1 lines currently belong to. A level-0 line that
// is not a recognized record declaration parks the cursor at None, which
// suppresses everything until the next recognized declaration.
#[derive(PartialEq, Eq, Debug)]
enum Subject {
    None,
    Person(Pointer),
    Family(Pointer),
}

// Which fact of the current subject the next level-2 date/place lines
// should be written into.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Detail {
    None,
    Birth,
    Death,
    Residence(usize),
    Marriage,
}

struct Cursor {
    subject: Subject,
    detail: Detail,
}

impl Cursor {
    fn new() -> Self {
        Self { subject: Subject::None, detail: Detail::None }
    }

    fn open_record(&mut self, tree: &mut FamilyTree, pointer: Option<&str>, tag: Tag) {
        self.detail = Detail::None;
        self.subject = match (tag, pointer) {
            (Tag::Individual, Some(pointer)) => {
                let (person, previously_kept) = tree.keep_person(pointer);
                if !previously_kept {
                    debug!(pointer = person.id(), "new individual record");
                }
                Subject::Person(pointer.to_owned())
            }
            (Tag::Family, Some(pointer)) => {
                let (family, previously_kept) = tree.keep_family(pointer);
                if !previously_kept {
                    debug!(pointer = family.id(), "new family record");
                }
                Subject::Family(pointer.to_owned())
            }
            _ => Subject::None,
        };
    }

    fn attribute(&mut self, tree: &mut FamilyTree, tag: Tag, value: &str) {
        self.detail = Detail::None;
        match &self.subject {
            Subject::Person(pointer) => {
                let Some(person) = tree.person_mut(pointer) else {
                    return;
                };
                match tag {
                    Tag::Name => person.set_name(value),
                    Tag::Sex => person.set_sex(value),
                    Tag::Birth => {
                        person.birth_mut();
                        self.detail = Detail::Birth;
                    }
                    Tag::Death => {
                        person.death_mut();
                        self.detail = Detail::Death;
                    }
                    Tag::Residence => {
                        self.detail = Detail::Residence(person.push_residence());
                    }
                    Tag::FamilySpouse => person.push_family_spouse(value),
                    // a repeated child-family line overwrites: last one wins
                    Tag::FamilyChild => person.set_family_child(value),
                    _ => (),
                }
            }
            Subject::Family(pointer) => {
                let Some(family) = tree.family_mut(pointer) else {
                    return;
                };
                match tag {
                    Tag::Husband => family.set_husband(value),
                    Tag::Wife => family.set_wife(value),
                    Tag::Child => family.push_child(value),
                    Tag::Marriage => {
                        family.marriage_mut();
                        self.detail = Detail::Marriage;
                    }
                    _ => (),
                }
            }
            Subject::None => (),
        }
    }

    fn sub_attribute(&mut self, tree: &mut FamilyTree, tag: Tag, value: &str) {
        let fact = match (&self.subject, self.detail) {
            (Subject::Person(pointer), Detail::Birth) => {
                tree.person_mut(pointer).map(|p| p.birth_mut())
            }
            (Subject::Person(pointer), Detail::Death) => {
                tree.person_mut(pointer).map(|p| p.death_mut())
            }
            (Subject::Person(pointer), Detail::Residence(index)) => {
                tree.person_mut(pointer).and_then(|p| p.residence_mut(index))
            }
            (Subject::Family(pointer), Detail::Marriage) => {
                tree.family_mut(pointer).map(|f| f.marriage_mut())
            }
            _ => None,
        };
        let Some(fact) = fact else {
            return;
        };
        match tag {
            Tag::Date => fact.date = Some(value.to_owned()),
            Tag::Place => fact.place = Some(value.to_owned()),
            _ => (),
        }
    }
}

// ------------- parse -------------
/// Builds a [`FamilyTree`] from the full text of a GEDCOM file in a single
/// forward pass. The builder is deliberately forgiving: a line that does
/// not match the grammar is skipped, an unrecognized tag is a no-op, and a
/// reference that never resolves is left for query time to filter out.
/// Parsing the same text twice yields structurally equal trees.
pub fn parse(text: &str) -> FamilyTree {
    let mut tree = FamilyTree::new();
    let mut cursor = Cursor::new();
    // split on both CR and LF so CR, LF and CRLF delimited files all work;
    // the empty fragments a CRLF produces fall out with the blank lines
    for raw in text.split(|c: char| c == '\n' || c == '\r') {
        if raw.trim().is_empty() {
            continue;
        }
        let Some(captures) = LINE.captures(raw) else {
            trace!(line = raw, "skipping unparseable line");
            continue;
        };
        // a digit run too long for usize is still a structural level, just
        // one far deeper than anything the dispatch below cares about
        let level = captures[1].parse::<usize>().unwrap_or(usize::MAX);
        let pointer = captures.get(2).map(|m| m.as_str());
        let tag = Tag::lex(&captures[3]);
        let value = captures.get(4).map(|m| m.as_str().trim()).unwrap_or("");
        match level {
            0 => cursor.open_record(&mut tree, pointer, tag),
            1 => cursor.attribute(&mut tree, tag, value),
            2 => cursor.sub_attribute(&mut tree, tag, value),
            // deeper levels carry tags outside the kept subset
            _ => (),
        }
    }
    tree
}
