//! Surface reconstruction pipeline: classification, construction, and the
//! optional refinement stages

use crate::errors::{Diagnostic, Error};
use crate::mesh::{Mesh, SmoothParams};
use crate::tagged::{TaggedArray, classify};

/// Which optional refinement stages run after construction. Both default off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconstructionOptions {
    /// Run feature-preserving Laplacian smoothing with the fixed pipeline
    /// parameters ([`SmoothParams::default`])
    pub smooth: bool,
    /// Estimate per-face and per-vertex normals with auto-orientation
    pub normals: bool,
}

/// A reconstructed mesh plus any degenerate-geometry findings recovered
/// during normal estimation (empty unless `normals` was enabled).
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    pub mesh: Mesh,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert a brain-surface description into a canonical indexed triangle
/// mesh, optionally smoothed, optionally carrying normals.
///
/// Classification and construction failures abort immediately; the caller
/// never receives a partially populated mesh. The refinement stages are
/// localized-recovery only and cannot fail the call. The pipeline holds no
/// state across invocations: identical input and options produce identical
/// output.
pub fn surface_to_mesh(
    arrays: &[TaggedArray],
    options: ReconstructionOptions,
) -> Result<Reconstruction, Error> {
    let selection = classify(arrays)?;
    let mut mesh = Mesh::from_arrays(selection.points, selection.triangles)?;

    if options.smooth {
        mesh.smooth(&SmoothParams::default());
    }

    let diagnostics = if options.normals {
        mesh.estimate_normals()
    } else {
        Vec::new()
    };

    Ok(Reconstruction { mesh, diagnostics })
}
