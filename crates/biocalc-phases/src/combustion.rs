// ─────────────────────────────────────────────────────────────────────
// SCPN BioCalc — Combustion Phase
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! End-use combustion emissions.
//!
//! Biogenic CO2 from burning biomass is climate-neutral under steady-state
//! regrowth (IPCC/RenovaCalc methodology), so the counted factor is 0 by
//! default and net emissions normally vanish:
//!
//! net = biomass_kg · pci · f_combustion / 1000
//!
//! The biogenic release is still reported, as biomass_kg · 1.84 kgCO2/kg,
//! and never enters the totals. Energy produced belongs to the aggregator's
//! intensity metric, not to this phase.

use biocalc_types::factors::{defaults, names, FactorTable};
use biocalc_types::result::{CombustionResult, PhaseResult};

pub fn emissions(biomass_kg: f64, pci_mj_per_kg: f64, factors: &FactorTable) -> CombustionResult {
    let combustion_factor = factors.value_or(names::COMBUSTION, defaults::COMBUSTION);

    let net = biomass_kg * pci_mj_per_kg * combustion_factor / 1000.0;
    let biogenic_kg_co2 = biomass_kg * defaults::BIOGENIC_CO2_PER_KG;

    CombustionResult {
        result: PhaseResult::from_components([("combustion", net)]),
        biogenic_kg_co2,
    }
}
