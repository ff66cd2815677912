// src/types.rs

use std::fmt;

/// Sub-path of the generic module runner.
pub const MODULE_RUNNER_PATH: &str = "moduleRunner";
/// Sub-path of the APT normalization call.
pub const NORMALIZE_APT_PATH: &str = "normalizeApt";
/// Sub-path listing or describing the modules the server exposes.
pub const MODULE_INQUIRY_PATH: &str = "moduleInquiry";

pub const FIELD_MODULE_NAME: &str = "moduleName";
pub const FIELD_MODULE_PARAMS: &str = "moduleParams";
pub const FIELD_APT: &str = "apt";
pub const QUERY_MODULE_NAME: &str = "name";

/// Analysis modules reached through the module runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleName {
    CoverabilityGraph,
    Synthesize,
    ExaminePn,
    ExamineLts,
}

impl ModuleName {
    pub const ALL: [ModuleName; 4] = [
        ModuleName::CoverabilityGraph,
        ModuleName::Synthesize,
        ModuleName::ExaminePn,
        ModuleName::ExamineLts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleName::CoverabilityGraph => "coverability_graph",
            ModuleName::Synthesize => "synthesize",
            ModuleName::ExaminePn => "examine_pn",
            ModuleName::ExamineLts => "examine_lts",
        }
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
