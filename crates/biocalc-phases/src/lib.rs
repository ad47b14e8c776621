//! Pure per-phase emission calculators.
//!
//! Each phase maps its activity inputs plus the factor table to a
//! [`biocalc_types::result::PhaseResult`]; profile-derived values (the
//! agricultural factor, the shipment mass, the PCI) are passed in explicitly
//! by the aggregator, never read from shared state.

pub mod agricultural;
pub mod combustion;
pub mod distribution;
pub mod industrial;
