//! Pelletizing/briquetting emissions.
//!
//! emissions = electricity·f_elec/1000 + thermal·f_thermal/1000
//!           + water·f_water/1000
//!
//! There is no tabulated gCO2/MJ factor for process heat; the thermal
//! factor is derived from diesel as f_diesel / 38.0 (gCO2/L over MJ/L).

use biocalc_types::factors::{defaults, names, FactorTable};
use biocalc_types::input::IndustrialInput;
use biocalc_types::result::PhaseResult;

pub fn emissions(input: &IndustrialInput, factors: &FactorTable) -> PhaseResult {
    let electricity_factor = factors.value_or(names::ELECTRICITY_GRID, defaults::ELECTRICITY_GRID);
    let thermal_factor = factors.value_or(names::DIESEL, defaults::DIESEL)
        / defaults::DIESEL_ENERGY_DENSITY_MJ_PER_L;
    let water_factor = factors.value_or(names::PROCESS_WATER, defaults::PROCESS_WATER);

    let electricity = input.electricity_kwh * electricity_factor / 1000.0;
    let thermal_energy = input.thermal_energy_mj * thermal_factor / 1000.0;
    let water = input.water_m3 * water_factor / 1000.0;

    PhaseResult::from_components([
        ("electricity", electricity),
        ("thermal_energy", thermal_energy),
        ("water", water),
    ])
}
