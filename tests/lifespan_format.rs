use lineage::gedcom;
use lineage::resolver::lifespan;

fn span_of(body: &str) -> String {
    let tree = gedcom::parse(&format!("0 @I1@ INDI\n{body}"));
    lifespan(tree.person("@I1@").expect("individual kept"))
}

#[test]
fn both_years_present() {
    assert_eq!(
        span_of("1 BIRT\n2 DATE 12 MAR 1850\n1 DEAT\n2 DATE 1920\n"),
        "1850 – 1920"
    );
}

#[test]
fn birth_only_leaves_the_right_side_open() {
    assert_eq!(span_of("1 BIRT\n2 DATE 1850\n"), "1850 – ");
}

#[test]
fn death_only_marks_the_birth_unknown() {
    assert_eq!(span_of("1 DEAT\n2 DATE 4 JUL 1920\n"), "? – 1920");
}

#[test]
fn no_extractable_year_renders_empty() {
    assert_eq!(span_of(""), "");
    assert_eq!(span_of("1 BIRT\n2 PLAC Springfield\n"), "", "place alone has no year");
    assert_eq!(span_of("1 BIRT\n2 DATE sometime in spring\n"), "");
}

#[test]
fn first_plausible_year_wins_in_free_form_dates() {
    assert_eq!(span_of("1 BIRT\n2 DATE BET 1850 AND 1855\n"), "1850 – ");
    assert_eq!(span_of("1 BIRT\n2 DATE ABT 2024\n"), "2024 – ");
}

#[test]
fn implausible_digit_runs_are_not_years() {
    // 850 is three digits and 0850 starts outside the accepted range
    assert_eq!(span_of("1 BIRT\n2 DATE 850\n"), "");
}
