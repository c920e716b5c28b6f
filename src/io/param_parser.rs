use std::fs;

use serde::Deserialize;
use tracing::info;

use crate::disc::basis::face::MAX_FACE_DEGREE;
use crate::disc::level_set::LevelSet;
use crate::error::{EvalError, ParamError, ParamResult};
use crate::io::write_to_csv::SampleGrid;

/// One cut-cell case: the interface geometry, the polynomial degrees used on
/// cells and faces, and the grid on which the level set is sampled for
/// inspection.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CaseParams {
    pub level_set: LevelSet,
    pub cell_degree: usize,
    pub face_degree: usize,
    #[serde(default)]
    pub samples: SampleGrid,
}

impl CaseParams {
    pub fn parse(file_path: &str) -> ParamResult<Self> {
        let file_content =
            fs::read_to_string(file_path).map_err(|e| ParamError::io(file_path, e))?;
        let params: CaseParams = serde_json::from_str(&file_content)?;
        info!(
            file_path,
            cell_degree = params.cell_degree,
            face_degree = params.face_degree,
            "loaded case parameters"
        );
        Ok(params)
    }
    /// Rejects degrees no basis family can be built with.
    pub fn validate(&self) -> ParamResult<()> {
        if self.face_degree > MAX_FACE_DEGREE {
            return Err(EvalError::unsupported_degree(
                "face basis",
                self.face_degree,
                MAX_FACE_DEGREE,
            )
            .into());
        }
        Ok(())
    }
}
