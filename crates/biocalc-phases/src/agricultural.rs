// ─────────────────────────────────────────────────────────────────────
// SCPN BioCalc — Agricultural Phase
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cultivation and harvest emissions.
//!
//! emissions = biomass·f_biomass/1000 + fertilizer·f_fert/1000
//!           + pesticide·f_pest/1000 + f_road·km·biomass/1000/1000
//!           + luc_dluc
//!
//! Factors are gCO2 per kg (or per tkm for transport); the 1000 divisor
//! converts grams to kilograms. Field transport works in tonne-kilometres:
//! tkm = (biomass_kg/1000) · distance_km.

use biocalc_types::factors::{defaults, names, FactorTable};
use biocalc_types::input::AgriculturalInput;
use biocalc_types::result::PhaseResult;

/// Cultivation and harvest emissions for one feedstock batch.
///
/// `biomass_factor_g_per_kg` comes from the resolved biomass profile.
pub fn emissions(
    input: &AgriculturalInput,
    biomass_factor_g_per_kg: f64,
    factors: &FactorTable,
) -> PhaseResult {
    let fertilizer_factor = factors.value_or(names::FERTILIZER_N, defaults::FERTILIZER_N);
    let pesticide_factor = factors.value_or(names::PESTICIDE, defaults::PESTICIDE);
    let road_factor = factors.value_or(names::TRANSPORT_ROAD, defaults::TRANSPORT_ROAD);

    let biomass = input.biomass_kg * biomass_factor_g_per_kg / 1000.0;
    let fertilizer = input.fertilizer_kg * fertilizer_factor / 1000.0;
    let pesticide = input.pesticide_kg * pesticide_factor / 1000.0;
    let transport = road_factor * input.transport_km * input.biomass_kg / 1000.0 / 1000.0;
    let luc_dluc = input.luc_dluc_kg_co2;

    PhaseResult::from_components([
        ("biomass", biomass),
        ("fertilizer", fertilizer),
        ("pesticide", pesticide),
        ("transport", transport),
        ("luc_dluc", luc_dluc),
    ])
}
