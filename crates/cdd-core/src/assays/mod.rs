//! Assay layouts and their reformat configuration.
//!
//! Every assay runs through the same pipeline; only the values in its
//! [`AssayConfig`] differ.
//!
//! | Assay | Header | Output prefix |
//! |-------|--------|---------------|
//! | Protein binding | one row | `UCSF_Percent_Protein_Bound_Results_CDDformat` |
//! | Kinetic solubility | fixed names, buffer from `C2` | `UCSF_KSOL_Results_CDDformat` |
//! | Liver microsome stability | two rows, `_` | `UCSF_Liver_Microsome_Stability_Results_CDDformat` |
//! | Caco-2 | two rows, space | `UCSF_Caco-2_Results_CDDformat` |
//! | MDCK | two rows from row 2, space | `UCSF_MDCK_Permeability_Results_CDDformat` |

mod caco2;
mod config;
mod hlm;
mod ksol;
mod mdck;
mod ppb;

use std::fmt;
use std::str::FromStr;

use cdd_ingest::RawGrid;

pub use config::{AssayConfig, BATCH_COLUMN};

use crate::error::Result;

/// Supported assay layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssayKind {
    ProteinBinding,
    KineticSolubility,
    MicrosomeStability,
    Caco2,
    Mdck,
}

impl AssayKind {
    pub const ALL: [AssayKind; 5] = [
        AssayKind::ProteinBinding,
        AssayKind::KineticSolubility,
        AssayKind::MicrosomeStability,
        AssayKind::Caco2,
        AssayKind::Mdck,
    ];

    /// Short identifier used on the command line and in config files.
    pub fn code(self) -> &'static str {
        match self {
            Self::ProteinBinding => "ppb",
            Self::KineticSolubility => "ksol",
            Self::MicrosomeStability => "hlm",
            Self::Caco2 => "caco2",
            Self::Mdck => "mdck",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ProteinBinding => "Percent Protein Bound",
            Self::KineticSolubility => "Kinetic Solubility",
            Self::MicrosomeStability => "Liver Microsome Stability",
            Self::Caco2 => "Caco-2 Permeability",
            Self::Mdck => "MDCK Permeability",
        }
    }

    pub fn output_prefix(self) -> &'static str {
        match self {
            Self::ProteinBinding => "UCSF_Percent_Protein_Bound_Results_CDDformat",
            Self::KineticSolubility => "UCSF_KSOL_Results_CDDformat",
            Self::MicrosomeStability => "UCSF_Liver_Microsome_Stability_Results_CDDformat",
            Self::Caco2 => "UCSF_Caco-2_Results_CDDformat",
            Self::Mdck => "UCSF_MDCK_Permeability_Results_CDDformat",
        }
    }

    /// Builds the configuration for this assay.
    ///
    /// Some layouts name columns after labelled cells, so the raw grid is
    /// consulted before the header is normalized.
    pub fn configure(self, grid: &RawGrid) -> Result<AssayConfig> {
        match self {
            Self::ProteinBinding => Ok(ppb::config()),
            Self::KineticSolubility => ksol::config(grid),
            Self::MicrosomeStability => hlm::config(grid),
            Self::Caco2 => Ok(caco2::config()),
            Self::Mdck => Ok(mdck::config()),
        }
    }
}

impl fmt::Display for AssayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an unknown assay code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown assay '{0}' (expected one of: ppb, ksol, hlm, caco2, mdck)")]
pub struct UnknownAssay(pub String);

impl FromStr for AssayKind {
    type Err = UnknownAssay;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == wanted)
            .ok_or_else(|| UnknownAssay(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for kind in AssayKind::ALL {
            assert_eq!(kind.code().parse::<AssayKind>().unwrap(), kind);
        }
        assert_eq!("  MDCK ".parse::<AssayKind>().unwrap(), AssayKind::Mdck);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "pampa".parse::<AssayKind>().unwrap_err();
        assert!(err.to_string().contains("'pampa'"));
    }

    #[test]
    fn prefixes_are_distinct() {
        let mut prefixes: Vec<_> = AssayKind::ALL.iter().map(|k| k.output_prefix()).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), AssayKind::ALL.len());
    }
}
