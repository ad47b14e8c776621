use crate::validation::ValidationReport;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BioCalcError {
    #[error("no biomass id supplied in the calculation request")]
    MissingBiomassId,

    #[error("biomass '{id}' not in catalog (known: {known})")]
    UnknownBiomass { id: String, known: String },

    #[error("duplicate biomass id '{0}' in catalog source")]
    DuplicateBiomass(String),

    #[error("invalid input: {0}")]
    Invalid(ValidationReport),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BioResult<T> = Result<T, BioCalcError>;
