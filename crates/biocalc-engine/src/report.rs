// ─────────────────────────────────────────────────────────────────────
// SCPN BioCalc — Report Rows
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Flattening of an [`AggregateResult`] into tabular rows.
//!
//! No file I/O and no layout here; the rows feed whatever tabular sink
//! the caller uses, and `to_json` serializes the full result for export.

use biocalc_types::error::BioResult;
use biocalc_types::result::AggregateResult;
use serde::Serialize;

/// One flat section/parameter/value/unit row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub section: String,
    pub parameter: String,
    pub value: f64,
    pub unit: String,
}

impl ReportRow {
    fn new(section: &str, parameter: &str, value: f64, unit: &str) -> Self {
        ReportRow {
            section: section.to_string(),
            parameter: parameter.to_string(),
            value,
            unit: unit.to_string(),
        }
    }
}

/// Headline rows: totals, per-phase emissions and shares, fossil
/// comparison.
pub fn summary_rows(result: &AggregateResult) -> Vec<ReportRow> {
    let mut rows = vec![
        ReportRow::new("totals", "total_emissions", result.total_emissions_kg_co2, "kgCO2"),
        ReportRow::new("totals", "total_energy", result.total_energy_mj, "MJ"),
        ReportRow::new(
            "totals",
            "carbon_intensity",
            result.carbon_intensity_g_per_mj,
            "gCO2/MJ",
        ),
        ReportRow::new("totals", "neea", result.neea_g_per_mj, "gCO2/MJ"),
    ];

    for (name, phase) in result.phases() {
        rows.push(ReportRow::new("phases", name, phase.emissions_kg_co2, "kgCO2"));
        rows.push(ReportRow::new(
            "phase_shares",
            name,
            phase.percent_of_total,
            "%",
        ));
    }
    if let Some(biogenic) = result.combustion.biogenic_kg_co2 {
        rows.push(ReportRow::new("phases", "combustion_biogenic", biogenic, "kgCO2"));
    }

    rows.push(ReportRow::new(
        "fossil_comparison",
        "reference_ci",
        result.fossil.reference_ci_g_per_mj,
        "gCO2/MJ",
    ));
    rows.push(ReportRow::new(
        "fossil_comparison",
        "biofuel_ci",
        result.fossil.biofuel_ci_g_per_mj,
        "gCO2/MJ",
    ));
    rows.push(ReportRow::new(
        "fossil_comparison",
        "reduction",
        result.fossil.reduction_g_per_mj,
        "gCO2/MJ",
    ));
    rows.push(ReportRow::new(
        "fossil_comparison",
        "reduction_percent",
        result.fossil.reduction_percent,
        "%",
    ));

    rows
}

/// Detailed rows: every per-component emission of every phase.
pub fn component_rows(result: &AggregateResult) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    for (name, phase) in result.phases() {
        for (component, value) in &phase.components {
            rows.push(ReportRow::new(name, component, *value, "kgCO2"));
        }
    }
    rows
}

/// Full result as pretty JSON for export.
pub fn to_json(result: &AggregateResult) -> BioResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LifecycleEngine;
    use biocalc_types::input::{AgriculturalInput, CalculationRequest, IndustrialInput};

    fn sample() -> AggregateResult {
        let engine = LifecycleEngine::reference();
        let request = CalculationRequest {
            biomass_id: "pinus".to_string(),
            agricultural: AgriculturalInput {
                biomass_kg: 1000.0,
                transport_km: 50.0,
                fertilizer_kg: 10.0,
                ..Default::default()
            },
            industrial: IndustrialInput {
                electricity_kwh: 150.0,
                ..Default::default()
            },
            ..Default::default()
        };
        engine.evaluate(&request).unwrap()
    }

    #[test]
    fn test_summary_rows_cover_all_sections() {
        let rows = summary_rows(&sample());
        for section in ["totals", "phases", "phase_shares", "fossil_comparison"] {
            assert!(rows.iter().any(|r| r.section == section), "missing {section}");
        }
        let total = rows
            .iter()
            .find(|r| r.section == "totals" && r.parameter == "total_emissions")
            .unwrap();
        assert!(total.value > 0.0);
        assert_eq!(total.unit, "kgCO2");
    }

    #[test]
    fn test_component_rows_match_breakdowns() {
        let result = sample();
        let rows = component_rows(&result);
        // 5 agricultural + 3 industrial + 1 distribution + 1 combustion.
        assert_eq!(rows.len(), 10);
        let fertilizer = rows
            .iter()
            .find(|r| r.section == "agricultural" && r.parameter == "fertilizer")
            .unwrap();
        assert!((fertilizer.value - result.agricultural.components["fertilizer"]).abs() < 1e-12);
    }

    #[test]
    fn test_to_json_roundtrips() {
        let result = sample();
        let json = to_json(&result).unwrap();
        let back: AggregateResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
