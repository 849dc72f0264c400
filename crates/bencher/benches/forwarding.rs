use std::hint::black_box;
use bencher::TestCase;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decorate_core::Value;

fn create_test_cases() -> Vec<TestCase> {
    vec![
        TestCase::pass_through("pass_through_0", 0),
        TestCase::pass_through("pass_through_1", 1),
        TestCase::pass_through("pass_through_4", 4),
        TestCase::pass_through("pass_through_16", 16),
        TestCase::markup("markup_1", 1),
        TestCase::markup("markup_4", 4),
        TestCase::markup("markup_16", 16),
    ]
}

fn benchmark_invoke(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("invoke_draw");

    for case in create_test_cases() {
        let text = case.build().expect("every layer accepts the text");
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &text, |b, text| {
            b.iter(|| black_box(text.invoke("draw", vec![]).expect("draw should succeed")));
        });
    }

    group.finish();
}

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get_property");

    for case in create_test_cases() {
        let text = case.build().expect("every layer accepts the text");
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &text, |b, text| {
            b.iter(|| black_box(text.get("text").expect("text property should exist")));
        });
    }

    group.finish();
}

fn benchmark_set(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_property");

    for case in create_test_cases() {
        let text = case.build().expect("every layer accepts the text");
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &text, |b, text| {
            b.iter(|| text.set("text", black_box(Value::from("Hello World"))).expect("set should succeed"));
        });
    }

    group.finish();
}

criterion_group!(forwarding, benchmark_invoke, benchmark_get, benchmark_set);
criterion_main!(forwarding);
