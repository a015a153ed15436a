use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use lineage::gedcom;

// A synthetic tree of `couples` married pairs, each with two children who
// marry into the next couple's family. Shape matters more than realism:
// every record exercises the fact, role and reference paths.
fn synthetic(couples: usize) -> String {
    let mut text = String::from("0 HEAD\n1 SOUR lineage-bench\n");
    for i in 0..couples {
        let h = i * 4 + 1;
        let w = h + 1;
        let c1 = h + 2;
        let c2 = h + 3;
        text.push_str(&format!(
            "0 @I{h}@ INDI\n1 NAME Husband{i} /Bench/\n1 SEX M\n1 BIRT\n2 DATE 1 JAN {}\n2 PLAC Springfield\n1 RESI\n2 PLAC Shelbyville\n1 FAMS @F{i}@\n",
            1800 + i % 200
        ));
        text.push_str(&format!(
            "0 @I{w}@ INDI\n1 NAME Wife{i} /Bench/\n1 SEX F\n1 BIRT\n2 DATE 2 FEB {}\n1 FAMS @F{i}@\n",
            1802 + i % 200
        ));
        text.push_str(&format!(
            "0 @I{c1}@ INDI\n1 NAME Child{i}a /Bench/\n1 FAMC @F{i}@\n"
        ));
        text.push_str(&format!(
            "0 @I{c2}@ INDI\n1 NAME Child{i}b /Bench/\n1 FAMC @F{i}@\n"
        ));
        text.push_str(&format!(
            "0 @F{i}@ FAM\n1 HUSB @I{h}@\n1 WIFE @I{w}@\n1 CHIL @I{c1}@\n1 CHIL @I{c2}@\n1 MARR\n2 DATE 3 MAY {}\n",
            1820 + i % 200
        ));
    }
    text.push_str("0 TRLR\n");
    text
}

fn parse_benchmark(c: &mut Criterion) {
    let text = synthetic(500);
    c.bench_function("parse 2000 individuals", |b| {
        b.iter(|| gedcom::parse(black_box(&text)))
    });
}

fn query_benchmark(c: &mut Criterion) {
    let tree = gedcom::parse(&synthetic(500));
    c.bench_function("relationship queries", |b| {
        b.iter(|| {
            let parents = tree.parents(black_box("@I3@"));
            let spouses = tree.spouses(black_box("@I1@"));
            let children = tree.children(black_box("@I1@"));
            (parents, spouses, children)
        })
    });
}

criterion_group!(benches, parse_benchmark, query_benchmark);
criterion_main!(benches);
