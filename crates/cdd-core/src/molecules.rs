//! Plate map + compound list merge into the molecule upload file.

use std::path::{Path, PathBuf};

use cdd_ingest::{HeaderLayout, SourceFormat, load_grid_as, normalize};
use cdd_model::{RunContext, Table};
use cdd_output::write_output;
use cdd_transform::{JoinKey, OutputSpec, derive_concat, fail_closed_join, format_output};
use cdd_validate::{ValidationPolicy, check_required};
use tracing::{info, info_span};

use crate::error::{CoreError, Result};
use crate::flow::log_preview;
use crate::render::{StructurePreview, StructureRenderer};

/// Output file prefix for the molecule upload.
pub const MOLECULE_OUTPUT_PREFIX: &str = "CDDupload_input_file";

/// Columns the plate map (file 1) must carry.
pub const PLATE_MAP_COLUMNS: [&str; 6] = [
    "Container Id",
    "Orientation Barcode",
    "Row",
    "Column",
    "Barcode",
    "Scan Time",
];

/// Columns the compound list (file 2) must carry.
pub const COMPOUND_COLUMNS: [&str; 7] = [
    "VIAL_QR_CODE",
    "SYNONYMS",
    "SMILES",
    "INITIAL_VOLUME_UL",
    "CONC_mM",
    "SALT",
    "RLA_Number",
];

/// Final column order of the upload file.
pub const UPLOAD_COLUMNS: [&str; 10] = [
    "Project",
    "Chemist",
    "PLATE_BARCODE",
    "PLATE_WELL",
    "INITIAL_VOLUME_UL",
    "CONC_mM",
    "VIAL_QR_CODE",
    "CDD_SMILES",
    "SYNONYMS",
    "RLA_Number",
];

/// A successful molecule run.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeOutcome {
    pub path: PathBuf,
    pub table: Table,
    pub structures: Vec<StructurePreview>,
}

/// Merges the plate map and compound list and writes the upload file.
///
/// Every failure is reported as `An error occurred: <cause>`.
pub fn reformat_molecules(
    plate_map: &Path,
    compounds: &Path,
    ctx: &RunContext,
    renderer: &dyn StructureRenderer,
) -> anyhow::Result<MoleculeOutcome> {
    run(plate_map, compounds, ctx, renderer)
        .map_err(|err| anyhow::anyhow!("An error occurred: {err}"))
}

fn run(
    plate_map: &Path,
    compounds: &Path,
    ctx: &RunContext,
    renderer: &dyn StructureRenderer,
) -> Result<MoleculeOutcome> {
    let span = info_span!(
        "molecules",
        plate_map = %plate_map.display(),
        compounds = %compounds.display()
    );
    let _guard = span.enter();

    let project = ctx
        .project
        .as_deref()
        .ok_or(CoreError::MissingRunSetting { setting: "project" })?;
    let chemist = ctx
        .chemist
        .as_deref()
        .ok_or(CoreError::MissingRunSetting { setting: "chemist" })?;

    let left = load_input(plate_map, &[SourceFormat::Csv])?;
    let right = load_input(compounds, &SourceFormat::ALL)?;
    log_preview("Input File 1:", &left);
    log_preview("Input File 2:", &right);

    let policy = ValidationPolicy::Abort;
    policy.enforce(check_required("Input file 1", &left, &PLATE_MAP_COLUMNS))?;
    policy.enforce(check_required("Input file 2", &right, &COMPOUND_COLUMNS))?;

    let merged = fail_closed_join(&left, &right, &JoinKey::new("Barcode", "VIAL_QR_CODE"))?;
    let merged = derive_concat(merged, "PLATE_WELL", &["Row", "Column"])?;

    let spec = OutputSpec::new()
        .select(&[
            "Container Id",
            "PLATE_WELL",
            "INITIAL_VOLUME_UL",
            "CONC_mM",
            "VIAL_QR_CODE",
            "SMILES",
            "SYNONYMS",
            "RLA_Number",
        ])
        .rename("Container Id", "PLATE_BARCODE")
        .rename("SMILES", "CDD_SMILES")
        .constant("Project", project)
        .constant("Chemist", chemist)
        .order(&UPLOAD_COLUMNS);
    let table = format_output(merged.clone(), &spec)?;
    log_preview("Output preview:", &table);

    let structures = preview_structures(&merged, renderer)?;
    let path = write_output(&table, ctx, MOLECULE_OUTPUT_PREFIX)?;
    Ok(MoleculeOutcome {
        path,
        table,
        structures,
    })
}

fn load_input(path: &Path, allowed: &[SourceFormat]) -> Result<Table> {
    let grid = load_grid_as(path, allowed)?.ok_or_else(|| CoreError::MissingInput {
        path: path.to_path_buf(),
    })?;
    Ok(normalize(&grid, &HeaderLayout::single())?.table)
}

fn preview_structures(
    merged: &Table,
    renderer: &dyn StructureRenderer,
) -> Result<Vec<StructurePreview>> {
    let codes = merged.values("VIAL_QR_CODE")?;
    let synonyms = merged.values("SYNONYMS")?;
    let smiles = merged.values("SMILES")?;

    let previews = codes
        .iter()
        .zip(synonyms)
        .zip(smiles)
        .map(|((code, synonym), smiles)| {
            let smiles = smiles.to_string();
            let rendered = renderer.render(&smiles).is_some();
            let preview = StructurePreview {
                vial_qr_code: code.key_string().unwrap_or_default(),
                synonyms: synonym.to_string(),
                smiles,
                rendered,
            };
            info!(
                rendered,
                "VIAL_QR_CODE: {}, SYNONYMS: {}, SMILES: {}",
                preview.vial_qr_code,
                preview.synonyms,
                preview.smiles
            );
            preview
        })
        .collect();
    Ok(previews)
}
