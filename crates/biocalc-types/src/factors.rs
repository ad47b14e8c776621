// ─────────────────────────────────────────────────────────────────────
// SCPN BioCalc — Emission Factors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tabulated emission factors and the immutable lookup table over them.
//!
//! Every factor the engine consults has a literature default in [`defaults`],
//! so an incomplete table degrades to the reference values instead of failing
//! a calculation.

use crate::error::BioResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known factor names consumed by the phase calculators.
pub mod names {
    pub const ELECTRICITY_GRID: &str = "electricity_grid";
    pub const DIESEL: &str = "diesel";
    pub const GASOLINE: &str = "gasoline";
    pub const NATURAL_GAS: &str = "natural_gas";
    pub const TRANSPORT_ROAD: &str = "transport_road";
    pub const TRANSPORT_MARITIME: &str = "transport_maritime";
    pub const TRANSPORT_RAIL: &str = "transport_rail";
    pub const FERTILIZER_N: &str = "fertilizer_n";
    pub const FERTILIZER_P: &str = "fertilizer_p";
    pub const FERTILIZER_K: &str = "fertilizer_k";
    pub const PESTICIDE: &str = "pesticide";
    pub const PROCESS_WATER: &str = "process_water";
    pub const COMBUSTION: &str = "combustion";
    pub const FOSSIL_REFERENCE_CI: &str = "fossil_reference_ci";
}

/// Literature fallback values, one per factor the engine consults.
pub mod defaults {
    /// Average Brazilian grid mix (gCO2/kWh).
    pub const ELECTRICITY_GRID: f64 = 95.0;

    /// Diesel combustion (gCO2/L).
    pub const DIESEL: f64 = 2680.0;

    /// Gasoline combustion (gCO2/L).
    pub const GASOLINE: f64 = 2300.0;

    /// Natural gas combustion (gCO2/m3).
    pub const NATURAL_GAS: f64 = 2020.0;

    /// Diesel lower heating value (MJ/L), used to derive the thermal
    /// energy proxy factor gCO2/MJ = DIESEL / DIESEL_ENERGY_DENSITY.
    pub const DIESEL_ENERGY_DENSITY_MJ_PER_L: f64 = 38.0;

    /// Road freight (gCO2/tkm).
    pub const TRANSPORT_ROAD: f64 = 62.0;

    /// Maritime freight (gCO2/tkm).
    pub const TRANSPORT_MARITIME: f64 = 8.5;

    /// Rail freight (gCO2/tkm).
    pub const TRANSPORT_RAIL: f64 = 22.0;

    /// Nitrogen fertilizer production (gCO2/kg).
    pub const FERTILIZER_N: f64 = 6540.0;

    /// Phosphate fertilizer production (gCO2/kg).
    pub const FERTILIZER_P: f64 = 1200.0;

    /// Potassium fertilizer production (gCO2/kg).
    pub const FERTILIZER_K: f64 = 630.0;

    /// Average pesticide production (gCO2/kg).
    pub const PESTICIDE: f64 = 10000.0;

    /// Water treatment and supply (gCO2/m3).
    pub const PROCESS_WATER: f64 = 0.36;

    /// Counted combustion factor for biomass (gCO2/MJ). Biogenic CO2 is
    /// climate-neutral under steady-state regrowth, hence 0.
    pub const COMBUSTION: f64 = 0.0;

    /// Biogenic CO2 released per kg of biomass burned (kgCO2/kg),
    /// reported separately and never summed into totals.
    pub const BIOGENIC_CO2_PER_KG: f64 = 1.84;

    /// Fossil reference carbon intensity (gCO2/MJ).
    pub const FOSSIL_REFERENCE_CI: f64 = 85.0;
}

/// One tabulated emission factor with its unit and bibliographic source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub source: String,
}

impl EmissionFactor {
    pub fn new(name: &str, value: f64, unit: &str, source: &str) -> Self {
        EmissionFactor {
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            source: source.to_string(),
        }
    }
}

/// Immutable name -> factor table, loaded once per engine instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FactorTable {
    factors: BTreeMap<String, EmissionFactor>,
}

impl FactorTable {
    /// Build from any iterable of factor rows. A later row with the same
    /// name replaces the earlier one.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = EmissionFactor>,
    {
        let mut factors = BTreeMap::new();
        for row in rows {
            factors.insert(row.name.clone(), row);
        }
        FactorTable { factors }
    }

    /// Load from a JSON array of factor rows.
    pub fn from_file(path: &str) -> BioResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let rows: Vec<EmissionFactor> = serde_json::from_str(&contents)?;
        Ok(Self::from_rows(rows))
    }

    /// The full reference table of literature values, matching
    /// `data/emission_factors.json`.
    pub fn reference() -> Self {
        Self::from_rows([
            EmissionFactor::new(
                names::ELECTRICITY_GRID,
                defaults::ELECTRICITY_GRID,
                "gCO2/kWh",
                "Average BR grid mix",
            ),
            EmissionFactor::new(names::DIESEL, defaults::DIESEL, "gCO2/L", "IPCC"),
            EmissionFactor::new(names::GASOLINE, defaults::GASOLINE, "gCO2/L", "IPCC"),
            EmissionFactor::new(names::NATURAL_GAS, defaults::NATURAL_GAS, "gCO2/m3", "IPCC"),
            EmissionFactor::new(
                names::TRANSPORT_ROAD,
                defaults::TRANSPORT_ROAD,
                "gCO2/tkm",
                "Ecoinvent",
            ),
            EmissionFactor::new(
                names::TRANSPORT_MARITIME,
                defaults::TRANSPORT_MARITIME,
                "gCO2/tkm",
                "Ecoinvent",
            ),
            EmissionFactor::new(
                names::TRANSPORT_RAIL,
                defaults::TRANSPORT_RAIL,
                "gCO2/tkm",
                "Ecoinvent",
            ),
            EmissionFactor::new(names::FERTILIZER_N, defaults::FERTILIZER_N, "gCO2/kg", "IPCC"),
            EmissionFactor::new(names::FERTILIZER_P, defaults::FERTILIZER_P, "gCO2/kg", "IPCC"),
            EmissionFactor::new(names::FERTILIZER_K, defaults::FERTILIZER_K, "gCO2/kg", "IPCC"),
            EmissionFactor::new(
                names::PESTICIDE,
                defaults::PESTICIDE,
                "gCO2/kg",
                "Ecoinvent average",
            ),
            EmissionFactor::new(
                names::PROCESS_WATER,
                defaults::PROCESS_WATER,
                "gCO2/m3",
                "Ecoinvent BR",
            ),
            EmissionFactor::new(
                names::COMBUSTION,
                defaults::COMBUSTION,
                "gCO2/MJ",
                "Biogenic (CF=0)",
            ),
            EmissionFactor::new(
                names::FOSSIL_REFERENCE_CI,
                defaults::FOSSIL_REFERENCE_CI,
                "gCO2/MJ",
                "RenovaCalc weighted average",
            ),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&EmissionFactor> {
        self.factors.get(name)
    }

    /// Factor value, or the caller-supplied literature default when the
    /// table does not carry the name. Missing factors never fail a
    /// calculation; the fallback is logged for traceability.
    pub fn value_or(&self, name: &str, default: f64) -> f64 {
        match self.factors.get(name) {
            Some(factor) => factor.value,
            None => {
                log::debug!("factor '{name}' not tabulated, using literature default {default}");
                default
            }
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/biocalc-types/ at compile time,
    /// so go up 2 levels to reach the workspace root.
    fn data_path(relative: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("data")
            .join(relative)
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_reference_table_contents() {
        let table = FactorTable::reference();
        assert_eq!(table.len(), 14);
        let road = table.get(names::TRANSPORT_ROAD).unwrap();
        assert!((road.value - 62.0).abs() < 1e-12);
        assert_eq!(road.unit, "gCO2/tkm");
    }

    #[test]
    fn test_value_or_falls_back_on_missing() {
        let table = FactorTable::from_rows([]);
        assert!((table.value_or(names::DIESEL, defaults::DIESEL) - 2680.0).abs() < 1e-12);
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_rows_last_write_wins() {
        let table = FactorTable::from_rows([
            EmissionFactor::new("x", 1.0, "g", "a"),
            EmissionFactor::new("x", 2.0, "g", "b"),
        ]);
        assert_eq!(table.len(), 1);
        assert!((table.value_or("x", 0.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_load_reference_file() {
        let table = FactorTable::from_file(&data_path("emission_factors.json")).unwrap();
        assert_eq!(table, FactorTable::reference());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let table = FactorTable::reference();
        let json = serde_json::to_string(&table).unwrap();
        let table2: FactorTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, table2);
    }
}
