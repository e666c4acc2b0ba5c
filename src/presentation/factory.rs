//! Use Case Factory
//!
//! Creates use cases backed by a JSON snapshot file.

use std::path::Path;

use crate::application::{
    CalcUseCase, ConvertUseCase, EngineOptions, ValidateUseCase, VestingReportUseCase,
};
use crate::config::Config;
use crate::infrastructure::JsonSnapshotSource;

pub type ConcreteCalcUseCase = CalcUseCase<JsonSnapshotSource>;
pub type ConcreteVestingUseCase = VestingReportUseCase<JsonSnapshotSource>;
pub type ConcreteConvertUseCase = ConvertUseCase<JsonSnapshotSource>;
pub type ConcreteValidateUseCase = ValidateUseCase<JsonSnapshotSource>;

pub fn create_calc_use_case(snapshot: &Path, config: &Config) -> ConcreteCalcUseCase {
    CalcUseCase::new(JsonSnapshotSource::new(snapshot), EngineOptions::from(config))
}

pub fn create_vesting_use_case(snapshot: &Path, config: &Config) -> ConcreteVestingUseCase {
    VestingReportUseCase::new(JsonSnapshotSource::new(snapshot), EngineOptions::from(config))
}

pub fn create_convert_use_case(snapshot: &Path, config: &Config) -> ConcreteConvertUseCase {
    ConvertUseCase::new(JsonSnapshotSource::new(snapshot), EngineOptions::from(config))
}

pub fn create_validate_use_case(snapshot: &Path, config: &Config) -> ConcreteValidateUseCase {
    ValidateUseCase::new(JsonSnapshotSource::new(snapshot), EngineOptions::from(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CapTableError;

    #[test]
    fn missing_snapshot_file_surfaces_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = create_validate_use_case(&dir.path().join("none.json"), &Config::default());
        assert!(matches!(use_case.execute(), Err(CapTableError::Io(_))));
    }
}
