// ABOUTME: Criterion benchmarks for supplement evaluation
// ABOUTME: Measures amount parsing, recommendation lookup, and whole-product evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for supplement evaluation.
//!
//! Measures label amount parsing, demographic resolution, and the full
//! compare-then-aggregate pass over a product.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vitamin_core::models::{
    DemographicKey, Nutrient, Product, ProductNutrientProfile, ReproductiveStatus, Sex,
    UserProfile,
};
use vitamin_intelligence::{
    demographic_keys, evaluate, parse_amount, parse_micrograms, resolve, resolve_str,
};

const AMOUNT_SAMPLES: [&str; 8] = [
    "90 mg",
    "1,000 IU",
    "2.4 mcg",
    "25 µg",
    "0.5 g",
    "400 mcg DFE",
    "see label",
    "",
];

fn full_multivitamin() -> Product {
    let vitamins = ProductNutrientProfile::new()
        .with(Nutrient::VitaminA, "3500 IU")
        .with(Nutrient::VitaminC, "90 mg")
        .with(Nutrient::VitaminD, "1000 IU")
        .with(Nutrient::VitaminE, "45 IU")
        .with(Nutrient::VitaminK, "25 mcg")
        .with(Nutrient::Thiamin, "1.5 mg")
        .with(Nutrient::Riboflavin, "1.7 mg")
        .with(Nutrient::Niacin, "20 mg")
        .with(Nutrient::VitaminB6, "2 mg")
        .with(Nutrient::Folate, "400 mcg")
        .with(Nutrient::VitaminB12, "25 mcg")
        .with(Nutrient::Biotin, "40 mcg")
        .with(Nutrient::PantothenicAcid, "10 mg");
    Product::new("Benchmark Multivitamin", vitamins)
}

fn bench_amount_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount_parsing");
    group.throughput(Throughput::Elements(AMOUNT_SAMPLES.len() as u64));

    group.bench_function("parse_amount", |b| {
        b.iter(|| {
            for sample in AMOUNT_SAMPLES {
                black_box(parse_amount(black_box(sample)));
            }
        });
    });

    group.bench_function("parse_micrograms_iu", |b| {
        b.iter(|| black_box(parse_micrograms(black_box("1000 IU"), Nutrient::VitaminD)));
    });

    group.finish();
}

fn bench_recommendation_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation_lookup");

    group.bench_function("profile_to_key", |b| {
        let profile = UserProfile::new(34.0, Sex::Female, ReproductiveStatus::Pregnant);
        b.iter(|| {
            if let Ok(profile) = &profile {
                black_box(profile.demographic_key());
            }
        });
    });

    let keys: Vec<DemographicKey> = demographic_keys();
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("resolve_all_keys", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(resolve(black_box(key)));
            }
        });
    });

    group.bench_function("resolve_str_fallback", |b| {
        b.iter(|| black_box(resolve_str(black_box("male_19-30_pregnant"))));
    });

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");
    let product = full_multivitamin();

    for key in ["female_19-30", "male_70+", "female_14-18_lactating"] {
        let set = resolve_str(key);
        group.bench_with_input(BenchmarkId::new("evaluate", key), &product, |b, product| {
            b.iter(|| black_box(evaluate(black_box(product), set)));
        });
    }

    let empty = Product::new("Empty", ProductNutrientProfile::new());
    group.bench_function("evaluate_empty_product", |b| {
        let set = resolve_str("female_19-30");
        b.iter(|| black_box(evaluate(black_box(&empty), set)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_amount_parsing,
    bench_recommendation_lookup,
    bench_evaluation
);
criterion_main!(benches);
