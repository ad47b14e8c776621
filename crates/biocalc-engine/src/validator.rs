// ─────────────────────────────────────────────────────────────────────
// SCPN BioCalc — Input Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Domain-range checks on a calculation request.
//!
//! Every rule is applied independently and every failure is collected;
//! nothing short-circuits, nothing panics. Upper sanity bounds flag
//! implausible (not impossible) magnitudes.

use biocalc_types::biomass::BiomassCatalog;
use biocalc_types::input::{
    AgriculturalInput, CalculationRequest, CombustionInput, CombustionType, DistributionInput,
    IndustrialInput, TransportMode,
};
use biocalc_types::validation::ValidationReport;

/// Hard upper bound on batch mass (kg).
pub const MAX_BIOMASS_KG: f64 = 1_000_000.0;

/// Field transport beyond this is implausible for the agricultural phase (km).
pub const MAX_FIELD_TRANSPORT_KM: f64 = 1000.0;

/// Sanity bound on fertilizer use (kg).
pub const MAX_FERTILIZER_KG: f64 = 100_000.0;

/// Sanity bound on pesticide use (kg).
pub const MAX_PESTICIDE_KG: f64 = 10_000.0;

/// Sanity bound on plant electricity (kWh).
pub const MAX_ELECTRICITY_KWH: f64 = 1_000_000.0;

/// Sanity bound on plant process heat (MJ).
pub const MAX_THERMAL_MJ: f64 = 10_000_000.0;

/// Sanity bound on plant water use (m3).
pub const MAX_WATER_M3: f64 = 100_000.0;

/// Sanity bound on distribution distance (km).
pub const MAX_DISTRIBUTION_KM: f64 = 50_000.0;

/// Validate the full request against the catalog and domain ranges.
pub fn validate(catalog: &BiomassCatalog, request: &CalculationRequest) -> ValidationReport {
    ValidationReport {
        biomass: validate_biomass_id(catalog, &request.biomass_id),
        agricultural: validate_agricultural(&request.agricultural),
        industrial: validate_industrial(&request.industrial),
        distribution: validate_distribution(&request.distribution),
        combustion: validate_combustion(&request.combustion),
    }
}

fn validate_biomass_id(catalog: &BiomassCatalog, id: &str) -> Vec<String> {
    if catalog.contains(id) {
        return Vec::new();
    }
    let known = catalog.ids().collect::<Vec<_>>().join(", ");
    if id.is_empty() {
        vec![format!("no biomass id supplied (options: {known})")]
    } else {
        vec![format!("unknown biomass '{id}' (options: {known})")]
    }
}

pub fn validate_agricultural(input: &AgriculturalInput) -> Vec<String> {
    let mut errors = Vec::new();

    check_finite(&mut errors, input.biomass_kg, "biomass quantity");
    if input.biomass_kg <= 0.0 {
        errors.push("biomass quantity must be greater than zero".to_string());
    } else if input.biomass_kg > MAX_BIOMASS_KG {
        errors.push(format!(
            "biomass quantity too high (maximum: {MAX_BIOMASS_KG} kg)"
        ));
    }

    check_finite(&mut errors, input.transport_km, "transport distance");
    if input.transport_km < 0.0 {
        errors.push(format!(
            "transport distance must be non-negative (value: {})",
            input.transport_km
        ));
    } else if input.transport_km > MAX_FIELD_TRANSPORT_KM {
        errors.push(format!(
            "warning: transport distance too high for the agricultural phase (>{MAX_FIELD_TRANSPORT_KM} km)"
        ));
    }

    check_finite(&mut errors, input.fertilizer_kg, "fertilizer use");
    if input.fertilizer_kg < 0.0 {
        errors.push(format!(
            "fertilizer use must be non-negative (value: {})",
            input.fertilizer_kg
        ));
    } else if input.fertilizer_kg > MAX_FERTILIZER_KG {
        errors.push(format!(
            "fertilizer use too high (plausible maximum: {MAX_FERTILIZER_KG} kg)"
        ));
    }

    check_finite(&mut errors, input.pesticide_kg, "pesticide use");
    if input.pesticide_kg < 0.0 {
        errors.push(format!(
            "pesticide use must be non-negative (value: {})",
            input.pesticide_kg
        ));
    } else if input.pesticide_kg > MAX_PESTICIDE_KG {
        errors.push(format!(
            "pesticide use too high (plausible maximum: {MAX_PESTICIDE_KG} kg)"
        ));
    }

    check_finite(&mut errors, input.luc_dluc_kg_co2, "LUC/dLUC");
    if input.luc_dluc_kg_co2 < 0.0 {
        errors.push(format!(
            "LUC/dLUC must be non-negative (value: {})",
            input.luc_dluc_kg_co2
        ));
    }

    errors
}

pub fn validate_industrial(input: &IndustrialInput) -> Vec<String> {
    let mut errors = Vec::new();

    check_finite(&mut errors, input.electricity_kwh, "electricity consumption");
    if input.electricity_kwh < 0.0 {
        errors.push(format!(
            "electricity consumption must be non-negative (value: {})",
            input.electricity_kwh
        ));
    } else if input.electricity_kwh > MAX_ELECTRICITY_KWH {
        errors.push(format!(
            "electricity consumption too high (plausible maximum: {MAX_ELECTRICITY_KWH} kWh)"
        ));
    }

    check_finite(&mut errors, input.thermal_energy_mj, "thermal energy consumption");
    if input.thermal_energy_mj < 0.0 {
        errors.push(format!(
            "thermal energy consumption must be non-negative (value: {})",
            input.thermal_energy_mj
        ));
    } else if input.thermal_energy_mj > MAX_THERMAL_MJ {
        errors.push(format!(
            "thermal energy consumption too high (plausible maximum: {MAX_THERMAL_MJ} MJ)"
        ));
    }

    check_finite(&mut errors, input.water_m3, "water consumption");
    if input.water_m3 < 0.0 {
        errors.push(format!(
            "water consumption must be non-negative (value: {})",
            input.water_m3
        ));
    } else if input.water_m3 > MAX_WATER_M3 {
        errors.push(format!(
            "water consumption too high (plausible maximum: {MAX_WATER_M3} m3)"
        ));
    }

    errors
}

pub fn validate_distribution(input: &DistributionInput) -> Vec<String> {
    let mut errors = Vec::new();

    if TransportMode::from_name(&input.mode).is_none() {
        let options = TransportMode::ALL.map(TransportMode::name).join(", ");
        errors.push(format!(
            "invalid transport mode '{}' (options: {options})",
            input.mode
        ));
    }

    check_finite(&mut errors, input.distance_km, "distribution distance");
    if input.distance_km < 0.0 {
        errors.push(format!(
            "distribution distance must be non-negative (value: {})",
            input.distance_km
        ));
    } else if input.distance_km > MAX_DISTRIBUTION_KM {
        errors.push(format!(
            "distribution distance too high (plausible maximum: {MAX_DISTRIBUTION_KM} km)"
        ));
    }

    errors
}

pub fn validate_combustion(input: &CombustionInput) -> Vec<String> {
    let mut errors = Vec::new();

    if CombustionType::from_name(&input.combustion_type).is_none() {
        let options = CombustionType::ALL.map(CombustionType::name).join(", ");
        errors.push(format!(
            "invalid combustion type '{}' (options: {options})",
            input.combustion_type
        ));
    }

    errors
}

fn check_finite(errors: &mut Vec<String>, value: f64, field: &str) {
    if !value.is_finite() {
        errors.push(format!("{field} must be a finite number (value: {value})"));
    }
}
