//! Seam for drawing molecular structures during previews.
//!
//! Rendering is supplied from outside the toolkit; the flows only log whether
//! an image was produced. Nothing rendered is ever written to disk.

/// An encoded structure drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureImage {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

pub trait StructureRenderer {
    /// Draws `smiles`, or `None` when it cannot be parsed.
    fn render(&self, smiles: &str) -> Option<StructureImage>;
}

/// Renderer that never produces an image.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl StructureRenderer for NoopRenderer {
    fn render(&self, _smiles: &str) -> Option<StructureImage> {
        None
    }
}

/// One matched compound as shown in the structure preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructurePreview {
    pub vial_qr_code: String,
    pub synonyms: String,
    pub smiles: String,
    pub rendered: bool,
}
