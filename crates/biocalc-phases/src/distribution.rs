// ─────────────────────────────────────────────────────────────────────
// SCPN BioCalc — Distribution Phase
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Processed-fuel transport emissions.
//!
//! emissions = f_mode · distance_km · biomass_kg/1000 / 1000
//!
//! The shipment mass is the agricultural biomass quantity (same-mass
//! assumption). An unrecognized mode name falls back to the road factor;
//! rejecting it is the validator's job, not this calculator's.

use biocalc_types::factors::{defaults, names, FactorTable};
use biocalc_types::input::{DistributionInput, TransportMode};
use biocalc_types::result::PhaseResult;

/// Per-tkm factor for the given mode name.
pub fn mode_factor(mode: &str, factors: &FactorTable) -> f64 {
    match TransportMode::from_name(mode) {
        Some(mode) => factors.value_or(mode.factor_name(), mode.default_factor()),
        None => factors.value_or(names::TRANSPORT_ROAD, defaults::TRANSPORT_ROAD),
    }
}

pub fn emissions(input: &DistributionInput, biomass_kg: f64, factors: &FactorTable) -> PhaseResult {
    let factor = mode_factor(&input.mode, factors);
    let transport = factor * input.distance_km * biomass_kg / 1000.0 / 1000.0;
    PhaseResult::from_components([("transport", transport)])
}
