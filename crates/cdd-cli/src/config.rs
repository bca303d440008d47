//! TOML session file for the `run` command.
//!
//! ```toml
//! [session]
//! project = "Covalent Library"
//! chemist = "R. Kim"
//! batch = "B42"
//! output_dir = "out"
//!
//! [molecules]
//! plate_map = "plate_map.csv"
//! compounds = "compounds.xlsx"
//!
//! [assays]
//! protein_binding = "ppb.xlsx"
//! caco2 = "caco2.xlsx"
//! ```
//!
//! Relative paths resolve against the directory holding the session file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cdd_core::AssayKind;
use serde::{Deserialize, Serialize};

/// Default session file name looked up by `run`.
pub const DEFAULT_CONFIG_FILENAME: &str = "cdd-reformat.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default)]
    pub session: SessionSection,
    #[serde(default)]
    pub molecules: Option<MoleculeSection>,
    #[serde(default)]
    pub assays: AssaySection,
}

/// Values injected into every output of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSection {
    pub project: Option<String>,
    pub chemist: Option<String>,
    pub batch: Option<String>,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoleculeSection {
    pub plate_map: PathBuf,
    pub compounds: PathBuf,
}

/// One optional source file per assay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssaySection {
    pub protein_binding: Option<PathBuf>,
    pub kinetic_solubility: Option<PathBuf>,
    pub microsome_stability: Option<PathBuf>,
    pub caco2: Option<PathBuf>,
    pub mdck: Option<PathBuf>,
}

impl AssaySection {
    /// Configured assays in run order.
    pub fn entries(&self) -> Vec<(AssayKind, &Path)> {
        let slots = [
            (AssayKind::ProteinBinding, &self.protein_binding),
            (AssayKind::KineticSolubility, &self.kinetic_solubility),
            (AssayKind::MicrosomeStability, &self.microsome_stability),
            (AssayKind::Caco2, &self.caco2),
            (AssayKind::Mdck, &self.mdck),
        ];
        slots
            .into_iter()
            .filter_map(|(kind, path)| path.as_deref().map(|p| (kind, p)))
            .collect()
    }
}

impl SessionConfig {
    /// Parses a session file without touching the filesystem.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse session file")
    }

    /// Loads `path` and resolves relative paths against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let config = Self::parse(&content).with_context(|| format!("load {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        tracing::info!("Loaded session from {:?}", path);
        Ok(config.resolve_paths(base))
    }

    #[must_use]
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        if let Some(dir) = self.session.output_dir.as_mut() {
            resolve(dir);
        }
        if let Some(molecules) = self.molecules.as_mut() {
            resolve(&mut molecules.plate_map);
            resolve(&mut molecules.compounds);
        }
        for path in [
            &mut self.assays.protein_binding,
            &mut self.assays.kinetic_solubility,
            &mut self.assays.microsome_stability,
            &mut self.assays.caco2,
            &mut self.assays.mdck,
        ]
        .into_iter()
        .flatten()
        {
            resolve(path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[session]
project = "Covalent Library"
chemist = "R. Kim"
batch = "B42"

[molecules]
plate_map = "plate_map.csv"
compounds = "compounds.xlsx"

[assays]
caco2 = "caco2.xlsx"
protein_binding = "/data/ppb.xlsx"
"#;

    #[test]
    fn parses_sections() {
        let config = SessionConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.session.batch.as_deref(), Some("B42"));
        assert_eq!(config.session.output_dir, None);
        assert_eq!(
            config.molecules.unwrap().compounds,
            PathBuf::from("compounds.xlsx")
        );
    }

    #[test]
    fn entries_follow_assay_order() {
        let config = SessionConfig::parse(SAMPLE).unwrap();
        let kinds: Vec<AssayKind> = config.assays.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![AssayKind::ProteinBinding, AssayKind::Caco2]);
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let config = SessionConfig::parse(SAMPLE)
            .unwrap()
            .resolve_paths(Path::new("/runs/june"));
        assert_eq!(
            config.assays.caco2,
            Some(PathBuf::from("/runs/june/caco2.xlsx"))
        );
        assert_eq!(
            config.assays.protein_binding,
            Some(PathBuf::from("/data/ppb.xlsx"))
        );
        assert_eq!(
            config.molecules.unwrap().plate_map,
            PathBuf::from("/runs/june/plate_map.csv")
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = SessionConfig::parse("[assays]\npampa = \"x.xlsx\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("pampa"));
    }

    #[test]
    fn empty_file_is_a_valid_session() {
        assert_eq!(SessionConfig::parse("").unwrap(), SessionConfig::default());
    }
}
