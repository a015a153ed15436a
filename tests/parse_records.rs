use lineage::gedcom;
use lineage::record::Sex;

#[test]
fn birth_fact_round_trip() {
    let tree = gedcom::parse(
        "0 @I1@ INDI\n1 NAME John /Doe/\n1 SEX M\n1 BIRT\n2 DATE 12 MAR 1850\n2 PLAC Springfield\n",
    );
    let person = tree.person("@I1@").expect("individual kept");
    assert_eq!(person.name(), "John /Doe/");
    assert_eq!(person.sex(), Sex::Male);
    let birth = person.birth().expect("birth fact initialized");
    assert_eq!(birth.date.as_deref(), Some("12 MAR 1850"));
    assert_eq!(birth.place.as_deref(), Some("Springfield"));
}

#[test]
fn parsing_is_idempotent() {
    let text = "0 HEAD\n1 SOUR test\n\
                0 @I1@ INDI\n1 NAME Ada\n1 SEX F\n1 BIRT\n2 DATE 1850\n1 FAMS @F1@\n\
                0 @F1@ FAM\n1 WIFE @I1@\n1 MARR\n2 DATE 1870\n\
                0 TRLR\n";
    assert_eq!(gedcom::parse(text), gedcom::parse(text), "same text, same tree");
}

#[test]
fn residences_keep_file_order() {
    let tree = gedcom::parse(
        "0 @I1@ INDI\n1 RESI\n2 PLAC Springfield\n1 RESI\n2 DATE 1870\n2 PLAC Shelbyville\n",
    );
    let person = tree.person("@I1@").unwrap();
    assert_eq!(person.residences().len(), 2);
    assert_eq!(person.residences()[0].place.as_deref(), Some("Springfield"));
    assert_eq!(person.residences()[0].date, None);
    assert_eq!(person.residences()[1].date.as_deref(), Some("1870"));
    assert_eq!(person.residences()[1].place.as_deref(), Some("Shelbyville"));
}

#[test]
fn malformed_and_blank_lines_are_skipped() {
    let tree = gedcom::parse(
        "garbage without a level\n\n   \n0 @I1@ INDI\nnot a line either\n1 NAME Ada\n",
    );
    assert_eq!(tree.people().len(), 1);
    assert_eq!(tree.person("@I1@").unwrap().name(), "Ada");
}

#[test]
fn unrecognized_top_level_record_suppresses_sub_lines() {
    // the header's level-1 lines must not leak into any record, and a
    // pointered but unrecognized record type parks the cursor as well
    let tree = gedcom::parse(
        "0 HEAD\n1 NAME should not exist\n\
         0 @S1@ SOUR\n1 NAME also ignored\n\
         0 @I1@ INDI\n1 NAME Ada\n",
    );
    assert_eq!(tree.people().len(), 1);
    assert_eq!(tree.person("@I1@").unwrap().name(), "Ada");
    assert!(tree.person("@S1@").is_none());
}

#[test]
fn unknown_attribute_clears_the_detail_target() {
    // the NOTE line sits between BIRT and its DATE, so the date must not
    // be written into the birth fact
    let tree = gedcom::parse("0 @I1@ INDI\n1 BIRT\n1 NOTE whatever\n2 DATE 1850\n");
    let birth = tree.person("@I1@").unwrap().birth().expect("fact stays initialized");
    assert_eq!(birth.date, None);
}

#[test]
fn detail_lines_without_a_target_are_ignored() {
    let tree = gedcom::parse("0 @I1@ INDI\n1 NAME Ada\n2 DATE 1850\n2 PLAC Nowhere\n");
    let person = tree.person("@I1@").unwrap();
    assert_eq!(person.birth(), None);
    assert_eq!(person.residences().len(), 0);
}

#[test]
fn levels_deeper_than_two_are_ignored() {
    // the last line's level overflows usize; it is a no-op like any other
    // deep level and must not disturb the cursor
    let tree = gedcom::parse(
        "0 @I1@ INDI\n1 BIRT\n2 DATE 1850\n3 TIME 12:00\n\
         99999999999999999999999999999 TIME 13:00\n2 PLAC Springfield\n",
    );
    let birth = tree.person("@I1@").unwrap().birth().unwrap();
    assert_eq!(birth.date.as_deref(), Some("1850"));
    assert_eq!(birth.place.as_deref(), Some("Springfield"));
}

#[test]
fn carriage_return_delimited_text_parses() {
    let crlf = gedcom::parse("0 @I1@ INDI\r\n1 NAME Ada\r\n");
    assert_eq!(crlf.person("@I1@").unwrap().name(), "Ada");
    let cr = gedcom::parse("0 @I1@ INDI\r1 NAME Ada\r");
    assert_eq!(cr.person("@I1@").unwrap().name(), "Ada");
}

#[test]
fn people_and_families_are_independent_namespaces() {
    let tree = gedcom::parse("0 @X1@ INDI\n1 NAME Ada\n0 @X1@ FAM\n1 CHIL @X1@\n");
    assert_eq!(tree.people().len(), 1);
    assert_eq!(tree.families().len(), 1);
    assert_eq!(tree.person("@X1@").unwrap().name(), "Ada");
    assert_eq!(tree.family("@X1@").unwrap().children(), ["@X1@"]);
}

#[test]
fn reopening_a_record_mutates_instead_of_replacing() {
    let tree = gedcom::parse(
        "0 @I1@ INDI\n1 NAME Ada\n1 FAMS @F1@\n\
         0 @F1@ FAM\n\
         0 @I1@ INDI\n1 SEX F\n1 FAMS @F2@\n",
    );
    let person = tree.person("@I1@").unwrap();
    assert_eq!(person.name(), "Ada", "earlier fields survive the reopen");
    assert_eq!(person.sex(), Sex::Female);
    assert_eq!(person.families_spouse(), ["@F1@", "@F2@"]);
    assert_eq!(tree.people().len(), 1);
}

#[test]
fn missing_values_are_empty_strings() {
    let tree = gedcom::parse("0 @I1@ INDI\n1 SEX\n1 NAME\n");
    let person = tree.person("@I1@").unwrap();
    assert_eq!(person.sex_code(), "");
    assert_eq!(person.sex(), Sex::Unknown);
    assert_eq!(person.name(), "");
}

#[test]
fn repeated_child_family_lines_keep_the_last() {
    let tree = gedcom::parse("0 @I1@ INDI\n1 FAMC @F1@\n1 FAMC @F2@\n");
    assert_eq!(tree.person("@I1@").unwrap().family_child(), Some("@F2@"));
}
