//! 查询串构造性能基准测试

use criterion::{Criterion, criterion_group, criterion_main};
use kmlquery::config::EndpointConfig;
use kmlquery::query::{KmlForm, build_query_string, build_request_url, escape};

fn sample_form() -> KmlForm {
    KmlForm {
        layer: "LS8:NBAR".to_string(),
        region: "Australia".to_string(),
        west: "110".to_string(),
        south: "-45".to_string(),
        east: "155".to_string(),
        north: "-10".to_string(),
        time: "2013-03-17T00:00:00+10:00".to_string(),
    }
}

// ============== escape 基准测试 ==============

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("query/escape");

    group.bench_function("ascii", |b| {
        b.iter(|| escape("&layer=LS8:NBAR&region=Australia"));
    });

    group.bench_function("non_latin", |b| {
        b.iter(|| escape("&region=東京&layer=€"));
    });

    let long = "&west=110.123456".repeat(64);
    group.bench_function("long", |b| {
        b.iter(|| escape(&long));
    });

    group.finish();
}

// ============== URL 构造基准测试 ==============

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("query/build");
    let form = sample_form();
    let endpoint = EndpointConfig::default();

    group.bench_function("query_string", |b| {
        b.iter(|| build_query_string(&form));
    });

    group.bench_function("request_url", |b| {
        b.iter(|| build_request_url(&endpoint, &form, 1234.5678));
    });

    group.finish();
}

criterion_group!(benches, bench_escape, bench_build);
criterion_main!(benches);
