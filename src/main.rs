use serde::Serialize;
use tracing::{error, info};

use lineage::error::{LineageError, Result};
use lineage::gedcom;
use lineage::interface::{Roster, display_name};
use lineage::record::Fact;
use lineage::resolver::{Relative, lifespan};

#[derive(Serialize)]
struct SubjectCard<'a> {
    id: &'a str,
    name: String,
    sex: String,
    lifespan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth: Option<&'a Fact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    death: Option<&'a Fact>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    residences: Vec<&'a Fact>,
}

#[derive(Serialize)]
struct Report<'a> {
    subject: SubjectCard<'a>,
    parents: Vec<Relative>,
    spouses: Vec<Relative>,
    children: Vec<Relative>,
}

fn run() -> Result<()> {
    // defaults, then an optional `lineage.*` settings file, then LINEAGE_*
    // environment overrides
    let settings = config::Config::builder()
        .set_default("gedcom", "data/family.ged")?
        .add_source(config::File::with_name("lineage").required(false))
        .add_source(config::Environment::with_prefix("LINEAGE"))
        .build()?;
    let path = settings.get_string("gedcom")?;
    let preferred = settings.get_string("subject").ok();

    // the one failure the caller must surface: the raw text could not be
    // obtained; everything after this degrades by omission instead
    let text = std::fs::read_to_string(&path)
        .map_err(|e| LineageError::Retrieval(format!("{path}: {e}")))?;
    let tree = gedcom::parse(&text);
    info!(
        people = tree.people().len(),
        families = tree.families().len(),
        "parsed {path}"
    );

    let roster = Roster::new(&tree);
    let Some(subject) = roster.default_subject(&tree, preferred.as_deref()) else {
        info!("no individual records found");
        return Ok(());
    };
    let person = tree
        .person(subject)
        .ok_or_else(|| LineageError::Render(format!("roster entry {subject} vanished")))?;

    let report = Report {
        subject: SubjectCard {
            id: person.id(),
            name: display_name(person),
            sex: person.sex().to_string(),
            lifespan: lifespan(person),
            birth: person.birth(),
            death: person.death(),
            residences: person.residences().iter().collect(),
        },
        parents: tree.parents(subject),
        spouses: tree.spouses(subject),
        children: tree.children(subject),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}
