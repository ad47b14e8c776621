//! Caller-owned bookkeeping of past results.
//!
//! The engine itself is stateless; a UI or batch driver that wants a
//! history appends results here and owns the log's lifetime. Appends must
//! be serialized externally if the caller is concurrent.

use biocalc_types::result::AggregateResult;
use std::collections::BTreeMap;

/// Append-only log of completed calculations.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    entries: Vec<AggregateResult>,
}

impl SessionLog {
    pub fn new() -> Self {
        SessionLog::default()
    }

    pub fn append(&mut self, result: AggregateResult) {
        self.entries.push(result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AggregateResult> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AggregateResult> {
        self.entries.iter()
    }

    /// Drop one entry, returning it. UI-level "delete from history".
    pub fn remove(&mut self, index: usize) -> Option<AggregateResult> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Mean carbon intensity over the logged results.
    pub fn mean_carbon_intensity(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.iter().map(|r| r.carbon_intensity_g_per_mj).sum();
        Some(sum / self.entries.len() as f64)
    }

    /// The feedstock appearing most often in the log; ties resolve to the
    /// lexicographically first id.
    pub fn most_used_biomass(&self) -> Option<&str> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.biomass_id.as_str()).or_default() += 1;
        }
        let mut best: Option<(&str, usize)> = None;
        for (id, count) in counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((id, count));
            }
        }
        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LifecycleEngine;
    use biocalc_types::input::{AgriculturalInput, CalculationRequest};

    fn result_for(id: &str) -> AggregateResult {
        let engine = LifecycleEngine::reference();
        let request = CalculationRequest {
            biomass_id: id.to_string(),
            agricultural: AgriculturalInput {
                biomass_kg: 1000.0,
                ..Default::default()
            },
            ..Default::default()
        };
        engine.calculate(&request).unwrap()
    }

    #[test]
    fn test_append_and_remove() {
        let mut log = SessionLog::new();
        assert!(log.is_empty());
        log.append(result_for("pinus"));
        log.append(result_for("eucalipto"));
        assert_eq!(log.len(), 2);
        let removed = log.remove(0).unwrap();
        assert_eq!(removed.biomass_id, "pinus");
        assert_eq!(log.len(), 1);
        assert!(log.remove(5).is_none());
    }

    #[test]
    fn test_summary_statistics() {
        let mut log = SessionLog::new();
        assert!(log.mean_carbon_intensity().is_none());
        assert!(log.most_used_biomass().is_none());
        log.append(result_for("pinus"));
        log.append(result_for("pinus"));
        log.append(result_for("amendoim"));
        assert_eq!(log.most_used_biomass(), Some("pinus"));
        let mean = log.mean_carbon_intensity().unwrap();
        assert!(mean > 0.0);
    }

    #[test]
    fn test_clear() {
        let mut log = SessionLog::new();
        log.append(result_for("pinus"));
        log.clear();
        assert!(log.is_empty());
    }
}
