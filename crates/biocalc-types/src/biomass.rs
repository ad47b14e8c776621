// ─────────────────────────────────────────────────────────────────────
// SCPN BioCalc — Biomass Catalog
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Preset biomass profiles and the immutable catalog over them.

use crate::error::{BioCalcError, BioResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Broad feedstock origin, used for grouping and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomassCategory {
    AgriculturalResidue,
    ForestryResidue,
}

/// Physical and emission properties of one feedstock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomassProfile {
    pub id: String,
    pub display_name: String,
    pub description: String,
    /// Lower heating value (MJ/kg), strictly positive.
    pub pci_mj_per_kg: f64,
    /// Bulk density (kg/m3), strictly positive.
    pub density_kg_per_m3: f64,
    /// Cultivation/harvest emission factor (gCO2/kg), non-negative.
    pub agricultural_factor_g_per_kg: f64,
    pub category: BiomassCategory,
}

/// Immutable id -> profile catalog, loaded once per engine instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BiomassCatalog {
    profiles: BTreeMap<String, BiomassProfile>,
}

impl BiomassCatalog {
    /// Build from any iterable of profiles. Ids must be unique.
    pub fn from_profiles<I>(profiles: I) -> BioResult<Self>
    where
        I: IntoIterator<Item = BiomassProfile>,
    {
        let mut map = BTreeMap::new();
        for profile in profiles {
            let id = profile.id.clone();
            if map.insert(id.clone(), profile).is_some() {
                return Err(BioCalcError::DuplicateBiomass(id));
            }
        }
        Ok(BiomassCatalog { profiles: map })
    }

    /// Load from a JSON array of profiles.
    pub fn from_file(path: &str) -> BioResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let profiles: Vec<BiomassProfile> = serde_json::from_str(&contents)?;
        Self::from_profiles(profiles)
    }

    /// The three reference feedstocks, matching `data/biomass_presets.json`.
    pub fn reference() -> Self {
        Self::from_profiles([
            BiomassProfile {
                id: "amendoim".to_string(),
                display_name: "Peanut husk".to_string(),
                description: "Agricultural residue from peanut processing".to_string(),
                pci_mj_per_kg: 17.8,
                density_kg_per_m3: 600.0,
                agricultural_factor_g_per_kg: 120.0,
                category: BiomassCategory::AgriculturalResidue,
            },
            BiomassProfile {
                id: "pinus".to_string(),
                display_name: "Pine residues".to_string(),
                description: "Forestry residues from Pinus sp. management".to_string(),
                pci_mj_per_kg: 18.5,
                density_kg_per_m3: 550.0,
                agricultural_factor_g_per_kg: 80.0,
                category: BiomassCategory::ForestryResidue,
            },
            BiomassProfile {
                id: "eucalipto".to_string(),
                display_name: "Eucalyptus residues".to_string(),
                description: "Forestry residues from Eucalyptus sp. management".to_string(),
                pci_mj_per_kg: 18.2,
                density_kg_per_m3: 580.0,
                agricultural_factor_g_per_kg: 75.0,
                category: BiomassCategory::ForestryResidue,
            },
        ])
        .expect("reference ids are unique")
    }

    /// Profile for the given id, or `UnknownBiomass` listing the known ids.
    pub fn get(&self, id: &str) -> BioResult<&BiomassProfile> {
        self.profiles.get(id).ok_or_else(|| BioCalcError::UnknownBiomass {
            id: id.to_string(),
            known: self.ids().collect::<Vec<_>>().join(", "),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.profiles.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &BiomassProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
