// ─────────────────────────────────────────────────────────────────────
// SCPN BioCalc — Lifecycle Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The aggregator: orchestrates the four phase calculators over one
//! request and derives the life-cycle metrics.
//!
//! Algorithm:
//! 1. Resolve the biomass profile from the catalog
//! 2. Inject profile-derived values into the phase calls (agricultural
//!    factor; shipment mass and PCI) by composition, never by mutating
//!    the caller's request
//! 3. Run the four calculators
//! 4. Sum emissions (use phase net-of-biogenic), derive total energy,
//!    carbon intensity, per-phase shares, NEEA and the fossil comparison
//!
//! Both lookup tables are immutable after construction, each call
//! allocates fresh results, so one engine instance may be shared across
//! threads without locking.

use crate::validator;
use biocalc_phases::{agricultural, combustion, distribution, industrial};
use biocalc_types::biomass::{BiomassCatalog, BiomassProfile};
use biocalc_types::error::{BioCalcError, BioResult};
use biocalc_types::factors::{defaults, names, FactorTable};
use biocalc_types::input::CalculationRequest;
use biocalc_types::result::{AggregateResult, FossilComparison, PhaseSummary};
use biocalc_types::validation::ValidationReport;

/// Life-cycle carbon intensity engine over one factor table and one
/// biomass catalog.
pub struct LifecycleEngine {
    factors: FactorTable,
    catalog: BiomassCatalog,
}

impl LifecycleEngine {
    pub fn new(factors: FactorTable, catalog: BiomassCatalog) -> Self {
        LifecycleEngine { factors, catalog }
    }

    /// Engine over the built-in literature factors and preset feedstocks.
    pub fn reference() -> Self {
        Self::new(FactorTable::reference(), BiomassCatalog::reference())
    }

    /// Engine loaded from the two JSON configuration files.
    pub fn from_files(factors_path: &str, presets_path: &str) -> BioResult<Self> {
        Ok(Self::new(
            FactorTable::from_file(factors_path)?,
            BiomassCatalog::from_file(presets_path)?,
        ))
    }

    pub fn factors(&self) -> &FactorTable {
        &self.factors
    }

    pub fn catalog(&self) -> &BiomassCatalog {
        &self.catalog
    }

    pub fn biomass(&self, id: &str) -> BioResult<&BiomassProfile> {
        self.catalog.get(id)
    }

    /// Range-check the request without calculating anything.
    pub fn validate(&self, request: &CalculationRequest) -> ValidationReport {
        validator::validate(&self.catalog, request)
    }

    /// Single caller-facing entry point: validate, then calculate.
    /// All validation errors are returned wholesale via `Invalid`.
    pub fn evaluate(&self, request: &CalculationRequest) -> BioResult<AggregateResult> {
        let report = self.validate(request);
        if !report.is_valid() {
            return Err(BioCalcError::Invalid(report));
        }
        self.calculate(request)
    }

    /// The aggregator proper. Assumes range checks already ran; still
    /// fails on a missing or unknown biomass id.
    pub fn calculate(&self, request: &CalculationRequest) -> BioResult<AggregateResult> {
        if request.biomass_id.is_empty() {
            return Err(BioCalcError::MissingBiomassId);
        }
        let profile = self.catalog.get(&request.biomass_id)?.clone();

        let biomass_kg = request.agricultural.biomass_kg;

        let agricultural = agricultural::emissions(
            &request.agricultural,
            profile.agricultural_factor_g_per_kg,
            &self.factors,
        );
        let industrial = industrial::emissions(&request.industrial, &self.factors);
        let distribution =
            distribution::emissions(&request.distribution, biomass_kg, &self.factors);
        let combustion = combustion::emissions(biomass_kg, profile.pci_mj_per_kg, &self.factors);

        let total_emissions_kg_co2 = agricultural.emissions_kg_co2
            + industrial.emissions_kg_co2
            + distribution.emissions_kg_co2
            + combustion.result.emissions_kg_co2;

        let total_energy_mj = biomass_kg * profile.pci_mj_per_kg;

        let carbon_intensity_g_per_mj = if total_energy_mj > 0.0 {
            total_emissions_kg_co2 * 1000.0 / total_energy_mj
        } else {
            0.0
        };

        let reference_ci =
            self.factors.value_or(names::FOSSIL_REFERENCE_CI, defaults::FOSSIL_REFERENCE_CI);
        let neea_g_per_mj = reference_ci - carbon_intensity_g_per_mj;
        let reduction_percent = if reference_ci > 0.0 {
            neea_g_per_mj / reference_ci * 100.0
        } else {
            0.0
        };

        let percent = |emissions_kg_co2: f64| {
            if total_emissions_kg_co2 > 0.0 {
                emissions_kg_co2 / total_emissions_kg_co2 * 100.0
            } else {
                0.0
            }
        };

        let agricultural_pct = percent(agricultural.emissions_kg_co2);
        let industrial_pct = percent(industrial.emissions_kg_co2);
        let distribution_pct = percent(distribution.emissions_kg_co2);
        let combustion_pct = percent(combustion.result.emissions_kg_co2);

        Ok(AggregateResult {
            biomass_id: request.biomass_id.clone(),
            agricultural: PhaseSummary::new(agricultural, agricultural_pct),
            industrial: PhaseSummary::new(industrial, industrial_pct),
            distribution: PhaseSummary::new(distribution, distribution_pct),
            combustion: PhaseSummary::with_biogenic(
                combustion.result,
                combustion_pct,
                combustion.biogenic_kg_co2,
            ),
            profile,
            total_emissions_kg_co2,
            total_energy_mj,
            carbon_intensity_g_per_mj,
            neea_g_per_mj,
            fossil: FossilComparison {
                reference_ci_g_per_mj: reference_ci,
                biofuel_ci_g_per_mj: carbon_intensity_g_per_mj,
                reduction_g_per_mj: neea_g_per_mj,
                reduction_percent,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biocalc_types::input::{
        AgriculturalInput, CombustionInput, DistributionInput, IndustrialInput,
    };

    fn pinus_request() -> CalculationRequest {
        CalculationRequest {
            biomass_id: "pinus".to_string(),
            agricultural: AgriculturalInput {
                biomass_kg: 1000.0,
                transport_km: 50.0,
                fertilizer_kg: 100.0,
                pesticide_kg: 10.0,
                luc_dluc_kg_co2: 0.0,
            },
            industrial: IndustrialInput {
                electricity_kwh: 500.0,
                thermal_energy_mj: 2000.0,
                water_m3: 5.0,
            },
            distribution: DistributionInput {
                mode: "road".to_string(),
                distance_km: 200.0,
            },
            combustion: CombustionInput::default(),
        }
    }

    #[test]
    fn test_full_calculation_is_plausible() {
        let engine = LifecycleEngine::reference();
        let result = engine.evaluate(&pinus_request()).unwrap();

        assert!(result.total_emissions_kg_co2 > 0.0);
        assert!(result.total_energy_mj > 0.0);
        assert!(result.carbon_intensity_g_per_mj > 0.0);
        // A solid biofuel should beat the fossil reference.
        assert!(result.carbon_intensity_g_per_mj < 85.0);
        assert!(result.neea_g_per_mj > 0.0);
        assert!(result.fossil.reduction_percent > 0.0);
    }

    #[test]
    fn test_pinus_energy_and_intensity() {
        // 1000 kg of pinus (PCI 18.5), everything else zeroed:
        // energy = 18500 MJ, emissions = 1000·80/1000 = 80 kg,
        // CI = 80·1000/18500.
        let engine = LifecycleEngine::reference();
        let request = CalculationRequest {
            biomass_id: "pinus".to_string(),
            agricultural: AgriculturalInput {
                biomass_kg: 1000.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = engine.calculate(&request).unwrap();
        assert!((result.total_energy_mj - 18_500.0).abs() < 1e-9);
        assert!((result.total_emissions_kg_co2 - 80.0).abs() < 1e-9);
        let expected_ci = 80.0 * 1000.0 / 18_500.0;
        assert!((result.carbon_intensity_g_per_mj - expected_ci).abs() < 1e-9);
        assert!((result.neea_g_per_mj - (85.0 - expected_ci)).abs() < 1e-9);
    }

    #[test]
    fn test_phase_shares_sum_to_100() {
        let engine = LifecycleEngine::reference();
        let result = engine.evaluate(&pinus_request()).unwrap();
        let sum: f64 = result.phases().iter().map(|(_, p)| p.percent_of_total).sum();
        assert!((sum - 100.0).abs() < 0.1, "shares sum to {sum}");
    }

    #[test]
    fn test_zero_total_zeroes_all_shares() {
        // A zero-factor feedstock with no other activity: total is 0 and
        // every share is 0 rather than NaN.
        let catalog = BiomassCatalog::from_profiles([BiomassProfile {
            id: "inert".to_string(),
            display_name: "Inert test feedstock".to_string(),
            description: String::new(),
            pci_mj_per_kg: 18.0,
            density_kg_per_m3: 500.0,
            agricultural_factor_g_per_kg: 0.0,
            category: biocalc_types::biomass::BiomassCategory::ForestryResidue,
        }])
        .unwrap();
        let engine = LifecycleEngine::new(FactorTable::reference(), catalog);
        let request = CalculationRequest {
            biomass_id: "inert".to_string(),
            agricultural: AgriculturalInput {
                biomass_kg: 1000.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = engine.calculate(&request).unwrap();
        assert_eq!(result.total_emissions_kg_co2, 0.0);
        for (name, phase) in result.phases() {
            assert_eq!(phase.percent_of_total, 0.0, "phase {name}");
        }
        assert!(result.carbon_intensity_g_per_mj == 0.0);
    }

    #[test]
    fn test_combustion_counts_zero_but_reports_biogenic() {
        let engine = LifecycleEngine::reference();
        let result = engine.evaluate(&pinus_request()).unwrap();
        assert_eq!(result.combustion.emissions_kg_co2, 0.0);
        assert_eq!(result.combustion.biogenic_kg_co2, Some(1840.0));
        // Reported, not summed.
        let phase_sum: f64 = result.phases().iter().map(|(_, p)| p.emissions_kg_co2).sum();
        assert!((result.total_emissions_kg_co2 - phase_sum).abs() < 1e-9);
    }

    #[test]
    fn test_missing_biomass_id() {
        let engine = LifecycleEngine::reference();
        let request = CalculationRequest::default();
        let err = engine.calculate(&request).unwrap_err();
        assert!(matches!(err, BioCalcError::MissingBiomassId));
    }

    #[test]
    fn test_unknown_biomass_id() {
        let engine = LifecycleEngine::reference();
        let request = CalculationRequest {
            biomass_id: "bagaco".to_string(),
            ..pinus_request()
        };
        let err = engine.calculate(&request).unwrap_err();
        assert!(matches!(err, BioCalcError::UnknownBiomass { .. }));
    }

    #[test]
    fn test_evaluate_returns_all_errors_wholesale() {
        let engine = LifecycleEngine::reference();
        let mut request = pinus_request();
        request.agricultural.biomass_kg = 0.0;
        request.distribution.mode = "aereo".to_string();
        let err = engine.evaluate(&request).unwrap_err();
        match err {
            BioCalcError::Invalid(report) => {
                assert_eq!(report.agricultural.len(), 1);
                assert_eq!(report.distribution.len(), 1);
            }
            other => panic!("expected Invalid, got {other}"),
        }
    }

    #[test]
    fn test_request_is_not_mutated() {
        let engine = LifecycleEngine::reference();
        let request = pinus_request();
        let before = request.clone();
        engine.evaluate(&request).unwrap();
        assert_eq!(request, before);
    }

    #[test]
    fn test_repeat_calls_are_bit_identical() {
        let engine = LifecycleEngine::reference();
        let request = pinus_request();
        let first = engine.calculate(&request).unwrap();
        let second = engine.calculate(&request).unwrap();
        assert_eq!(first, second);
        let json_first = serde_json::to_string(&first).unwrap();
        let json_second = serde_json::to_string(&second).unwrap();
        assert_eq!(json_first, json_second);
    }

    #[test]
    fn test_each_preset_calculates() {
        let engine = LifecycleEngine::reference();
        for id in ["amendoim", "pinus", "eucalipto"] {
            let request = CalculationRequest {
                biomass_id: id.to_string(),
                ..pinus_request()
            };
            let result = engine.evaluate(&request).unwrap();
            assert_eq!(result.biomass_id, id);
            assert!(result.carbon_intensity_g_per_mj > 0.0, "{id}");
            assert!(result.neea_g_per_mj > 0.0, "{id}");
        }
    }

    #[test]
    fn test_from_files_matches_reference() {
        let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("data");
        let engine = LifecycleEngine::from_files(
            &root.join("emission_factors.json").to_string_lossy(),
            &root.join("biomass_presets.json").to_string_lossy(),
        )
        .unwrap();
        let reference = LifecycleEngine::reference();
        let request = pinus_request();
        assert_eq!(
            engine.evaluate(&request).unwrap(),
            reference.evaluate(&request).unwrap()
        );
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(LifecycleEngine::reference());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.evaluate(&pinus_request()).unwrap())
            })
            .collect();
        let results: Vec<AggregateResult> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results[1..] {
            assert_eq!(*result, results[0]);
        }
    }
}
