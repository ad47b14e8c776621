// ─────────────────────────────────────────────────────────────────────
// SCPN BioCalc — Phase Inputs
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-phase activity data supplied by the caller.
//!
//! All numeric fields default to 0.0 when absent from the wire form, so a
//! partially filled request deserializes cleanly and is then judged by the
//! validator, not by the deserializer.

use crate::factors::{defaults, names};
use serde::{Deserialize, Serialize};

/// Raw activity data for the cultivation/harvest phase.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgriculturalInput {
    /// Harvested biomass mass (kg). The same mass is propagated to the
    /// distribution and use phases.
    pub biomass_kg: f64,
    /// Field-to-plant transport distance (km), road assumed.
    pub transport_km: f64,
    /// Nitrogen fertilizer applied (kg).
    pub fertilizer_kg: f64,
    /// Pesticide applied (kg).
    pub pesticide_kg: f64,
    /// Optional aggregated land-use-change emissions (kg CO2).
    pub luc_dluc_kg_co2: f64,
}

/// Raw activity data for the pelletizing/briquetting phase.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustrialInput {
    pub electricity_kwh: f64,
    pub thermal_energy_mj: f64,
    pub water_m3: f64,
}

/// Raw activity data for the distribution phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionInput {
    /// Transport mode name; one of "road", "maritime", "rail".
    pub mode: String,
    pub distance_km: f64,
}

impl Default for DistributionInput {
    fn default() -> Self {
        DistributionInput {
            mode: TransportMode::Road.name().to_string(),
            distance_km: 0.0,
        }
    }
}

/// Raw activity data for the combustion phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombustionInput {
    /// Appliance class; one of "boiler", "furnace", "other".
    pub combustion_type: String,
}

impl Default for CombustionInput {
    fn default() -> Self {
        CombustionInput {
            combustion_type: CombustionType::Boiler.name().to_string(),
        }
    }
}

/// Supported freight modes, ordered by emission factor: maritime < rail < road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Road,
    Maritime,
    Rail,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] =
        [TransportMode::Road, TransportMode::Maritime, TransportMode::Rail];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "road" => Some(TransportMode::Road),
            "maritime" => Some(TransportMode::Maritime),
            "rail" => Some(TransportMode::Rail),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TransportMode::Road => "road",
            TransportMode::Maritime => "maritime",
            TransportMode::Rail => "rail",
        }
    }

    /// Factor-table key for this mode.
    pub fn factor_name(self) -> &'static str {
        match self {
            TransportMode::Road => names::TRANSPORT_ROAD,
            TransportMode::Maritime => names::TRANSPORT_MARITIME,
            TransportMode::Rail => names::TRANSPORT_RAIL,
        }
    }

    /// Literature fallback factor for this mode (gCO2/tkm).
    pub fn default_factor(self) -> f64 {
        match self {
            TransportMode::Road => defaults::TRANSPORT_ROAD,
            TransportMode::Maritime => defaults::TRANSPORT_MARITIME,
            TransportMode::Rail => defaults::TRANSPORT_RAIL,
        }
    }
}

/// Supported combustion appliance classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombustionType {
    Boiler,
    Furnace,
    Other,
}

impl CombustionType {
    pub const ALL: [CombustionType; 3] =
        [CombustionType::Boiler, CombustionType::Furnace, CombustionType::Other];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "boiler" => Some(CombustionType::Boiler),
            "furnace" => Some(CombustionType::Furnace),
            "other" => Some(CombustionType::Other),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CombustionType::Boiler => "boiler",
            CombustionType::Furnace => "furnace",
            CombustionType::Other => "other",
        }
    }
}

/// The single caller-facing request: one feedstock plus the four phase
/// input blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationRequest {
    pub biomass_id: String,
    pub agricultural: AgriculturalInput,
    pub industrial: IndustrialInput,
    pub distribution: DistributionInput,
    pub combustion: CombustionInput,
}
