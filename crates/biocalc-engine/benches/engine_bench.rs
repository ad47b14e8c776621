// -------------------------------------------------------------------------
// SCPN BioCalc -- Engine Benchmark
// Measures a full evaluate (validate + aggregate) and the aggregator alone
// over the reference factor table and preset catalog.
// -------------------------------------------------------------------------

use biocalc_engine::LifecycleEngine;
use biocalc_types::input::{
    AgriculturalInput, CalculationRequest, CombustionInput, DistributionInput, IndustrialInput,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Build a self-contained request so benchmarks do not depend on external
/// JSON files.
fn make_request(biomass_id: &str) -> CalculationRequest {
    CalculationRequest {
        biomass_id: biomass_id.to_string(),
        agricultural: AgriculturalInput {
            biomass_kg: 250_000.0,
            transport_km: 80.0,
            fertilizer_kg: 1_200.0,
            pesticide_kg: 150.0,
            luc_dluc_kg_co2: 500.0,
        },
        industrial: IndustrialInput {
            electricity_kwh: 40_000.0,
            thermal_energy_mj: 900_000.0,
            water_m3: 600.0,
        },
        distribution: DistributionInput {
            mode: "rail".to_string(),
            distance_km: 1_400.0,
        },
        combustion: CombustionInput::default(),
    }
}

fn bench_engine(c: &mut Criterion) {
    let engine = LifecycleEngine::reference();
    let request = make_request("pinus");

    let mut group = c.benchmark_group("lifecycle_engine");

    group.bench_function("evaluate", |b| {
        b.iter(|| {
            let result = engine.evaluate(black_box(&request)).unwrap();
            black_box(result.carbon_intensity_g_per_mj);
        })
    });

    group.bench_function("calculate_only", |b| {
        b.iter(|| {
            let result = engine.calculate(black_box(&request)).unwrap();
            black_box(result.total_emissions_kg_co2);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
