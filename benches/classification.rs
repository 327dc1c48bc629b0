//! Classification and sorting micro-benchmarks
//!
//! Measures order table construction and whole-document sorting for poms with a
//! growing number of dependency entries.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pomsort::{OrderTable, PredefinedOrder, WrapperFactory, XmlDocument};
use std::hint::black_box;

/// A pom whose dependencies are listed in reverse artifact order
fn pom_with_dependencies(count: usize) -> String {
    let mut pom = String::from("<project><version>1</version><groupId>g</groupId><dependencies>");
    for i in (0..count).rev() {
        pom.push_str(&format!(
            "<dependency><version>1.{i}</version><artifactId>artifact-{i:05}</artifactId><groupId>org.example</groupId></dependency>"
        ));
    }
    pom.push_str("</dependencies><modelVersion>4.0.0</modelVersion></project>");
    pom
}

fn bench_order_table(c: &mut Criterion) {
    let template = PredefinedOrder::Recommended2008_06.template();
    c.bench_function("build_order_table", |b| {
        b.iter(|| OrderTable::from_template_str(black_box(template)).unwrap())
    });
}

fn bench_sort_document(c: &mut Criterion) {
    let factory = WrapperFactory::builder()
        .with_sort_dependencies(true)
        .build()
        .unwrap();

    let mut group = c.benchmark_group("sort_document");
    for count in [10, 100, 1000] {
        let pom = pom_with_dependencies(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &pom, |b, pom| {
            let doc = XmlDocument::parse(pom).unwrap();
            b.iter(|| {
                let mut wrappers = factory.create_group(doc.root_element()).unwrap();
                wrappers.sort();
                black_box(wrappers.is_sorted())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_order_table, bench_sort_document);
criterion_main!(benches);
