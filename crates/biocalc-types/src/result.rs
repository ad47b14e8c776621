// ─────────────────────────────────────────────────────────────────────
// SCPN BioCalc — Result Records
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Value objects returned by the phase calculators and the aggregator.
//!
//! Component maps are BTreeMaps so repeated calculations over the same
//! input serialize byte-identically.

use crate::biomass::BiomassProfile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One phase's emissions with a per-component breakdown (all kg CO2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResult {
    pub emissions_kg_co2: f64,
    pub components: BTreeMap<String, f64>,
}

impl PhaseResult {
    /// Build from labeled components; the total is their sum.
    pub fn from_components<const N: usize>(components: [(&str, f64); N]) -> Self {
        let emissions_kg_co2 = components.iter().map(|(_, v)| v).sum();
        PhaseResult {
            emissions_kg_co2,
            components: components
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }
}

/// Use-phase output: net (counted) emissions plus the biogenic CO2 that is
/// reported separately and never summed into totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombustionResult {
    pub result: PhaseResult,
    pub biogenic_kg_co2: f64,
}

/// A phase result annotated with its share of total emissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub emissions_kg_co2: f64,
    pub percent_of_total: f64,
    pub components: BTreeMap<String, f64>,
    /// Only carried by the use-phase summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biogenic_kg_co2: Option<f64>,
}

impl PhaseSummary {
    pub fn new(result: PhaseResult, percent_of_total: f64) -> Self {
        PhaseSummary {
            emissions_kg_co2: result.emissions_kg_co2,
            percent_of_total,
            components: result.components,
            biogenic_kg_co2: None,
        }
    }

    pub fn with_biogenic(result: PhaseResult, percent_of_total: f64, biogenic_kg_co2: f64) -> Self {
        PhaseSummary {
            biogenic_kg_co2: Some(biogenic_kg_co2),
            ..Self::new(result, percent_of_total)
        }
    }
}

/// Side-by-side comparison against the fossil reference fuel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FossilComparison {
    pub reference_ci_g_per_mj: f64,
    pub biofuel_ci_g_per_mj: f64,
    pub reduction_g_per_mj: f64,
    pub reduction_percent: f64,
}

/// Complete life-cycle result for one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub biomass_id: String,
    pub profile: BiomassProfile,
    pub agricultural: PhaseSummary,
    pub industrial: PhaseSummary,
    pub distribution: PhaseSummary,
    pub combustion: PhaseSummary,
    pub total_emissions_kg_co2: f64,
    pub total_energy_mj: f64,
    pub carbon_intensity_g_per_mj: f64,
    /// Energy-environmental efficiency: reference CI minus biofuel CI.
    pub neea_g_per_mj: f64,
    pub fossil: FossilComparison,
}

impl AggregateResult {
    /// The four phase summaries in canonical order.
    pub fn phases(&self) -> [(&'static str, &PhaseSummary); 4] {
        [
            ("agricultural", &self.agricultural),
            ("industrial", &self.industrial),
            ("distribution", &self.distribution),
            ("combustion", &self.combustion),
        ]
    }
}
