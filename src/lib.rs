//! Lineage – an in-memory genealogy graph built from GEDCOM text.
//!
//! Lineage ingests the line-oriented, level-tagged GEDCOM format and turns
//! it into a queryable graph:
//! * A [`record::Person`] is an individual record identified by a pointer
//!   token (e.g. `@I1@`), carrying the raw name, sex code, birth/death and
//!   residence facts, and its family references.
//! * A [`record::Family`] is a family-unit record with positional husband
//!   and wife slots, an ordered child list, and an optional marriage fact.
//! * A [`record::FamilyTree`] owns both kinds of records through "keeper"
//!   structures that guarantee at most one record per pointer, created on
//!   first reference and mutated in place for the rest of the parse.
//!
//! ## Modules
//! * [`record`] – Record types and the keepers that own them.
//! * [`gedcom`] – The line parser / record builder: one forward pass over
//!   the text, tracking the current record and detail target across lines.
//! * [`resolver`] – Relationship queries (parents, spouses, children)
//!   derived on demand from the finished tree, plus lifespan rendering.
//! * [`interface`] – Name rendering, roster ordering and filtering for the
//!   layer that presents the graph.
//! * [`error`] – The crate error type. Parsing itself never fails: a line
//!   that does not match the grammar is skipped and a dangling reference
//!   is filtered out at query time, so a slightly damaged file still
//!   yields a useful partial graph.
//!
//! ## Quick Start
//! ```
//! use lineage::gedcom;
//! let tree = gedcom::parse(
//!     "0 @I1@ INDI\n1 NAME John /Doe/\n1 FAMS @F1@\n\
//!      0 @I2@ INDI\n1 NAME Jane /Doe/\n1 FAMS @F1@\n\
//!      0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I2@\n1 MARR\n2 DATE 1 JAN 1900\n",
//! );
//! let spouses = tree.spouses("@I1@");
//! assert_eq!(spouses.len(), 1);
//! assert_eq!(spouses[0].name, "Jane /Doe/");
//! assert_eq!(spouses[0].meta, "Married 1 JAN 1900");
//! ```
//!
//! ## Concurrency
//! A parse is a bounded, synchronous, single-pass operation and the tree
//! it returns is never mutated afterwards, so shared references to it may
//! be read from any number of threads. A reload builds a fresh tree and
//! replaces the old one wholesale.

pub mod record;
pub mod gedcom;
pub mod resolver;
pub mod interface;
pub mod error;
