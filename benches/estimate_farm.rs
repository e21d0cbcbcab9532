//! Estimation throughput benchmarks.
//!
//! Single-report latency plus sequential and parallel batch runs over a
//! synthetic survey of mixed farm profiles.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rustc_hash::FxHashMap;

use emission_estimator::{
    assess, compute, ActivityInput, CropClass, EmissionEstimator, EmissionFactorTable,
    FarmingPractice, FertilizerKind, FieldProfile, FuelKind, Season, SiteConditions, Species,
};

fn survey_input(seed: u32) -> ActivityInput {
    let mut livestock = FxHashMap::default();
    livestock.insert(Species::Cattle, seed % 5);
    livestock.insert(Species::Goats, seed % 9);
    if seed % 3 == 0 {
        livestock.insert(Species::Poultry, 10 + seed % 40);
    }

    ActivityInput {
        fertilizer_kind: if seed % 2 == 0 {
            FertilizerKind::Urea
        } else {
            FertilizerKind::SyntheticN
        },
        fertilizer_kg: f64::from(seed % 300),
        livestock,
        fuel_kind: FuelKind::Diesel,
        fuel_litres: f64::from(seed % 80),
        season: if seed % 2 == 0 { Season::Dry } else { Season::Rainy },
    }
}

fn survey_field() -> FieldProfile {
    FieldProfile {
        area_ha: 2.5,
        practice: FarmingPractice::Mixed,
        crops: vec![CropClass::Cereals, CropClass::Legumes],
        site: SiteConditions {
            mean_temp_c: Some(24.0),
            annual_precip_mm: Some(1600.0),
            topsoil_moisture: Some([0.28, 0.33]),
        },
    }
}

fn bench_single_report(c: &mut Criterion) {
    let table = EmissionFactorTable::cameroon_default();
    let input = survey_input(7);
    let field = survey_field();

    c.bench_function("compute_single", |b| {
        b.iter(|| compute(black_box(&input), black_box(&table)))
    });
    c.bench_function("assess_with_field", |b| {
        b.iter(|| assess(black_box(&input), Some(black_box(&field)), black_box(&table)))
    });
}

fn bench_survey_batches(c: &mut Criterion) {
    let estimator = EmissionEstimator::with_defaults();
    let inputs: Vec<ActivityInput> = (0..1024).map(survey_input).collect();

    let mut group = c.benchmark_group("survey_batch");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("sequential", inputs.len()),
        &inputs,
        |b, inputs| b.iter(|| estimator.compute_batch(black_box(inputs))),
    );
    group.bench_with_input(
        BenchmarkId::new("parallel", inputs.len()),
        &inputs,
        |b, inputs| b.iter(|| estimator.compute_batch_parallel(black_box(inputs))),
    );
    group.finish();
}

criterion_group!(benches, bench_single_report, bench_survey_batches);
criterion_main!(benches);
