//! Tagged surface arrays and their classification by semantic role
//!
//! A surface file reader hands us an ordered bag of numeric arrays, each
//! carrying a NIfTI intent code describing what the numbers mean. Exactly two
//! roles matter for reconstruction: the vertex coordinates and the triangle
//! index triples. Everything else rides along untouched.

use crate::errors::Error;
use crate::float_types::Real;

/// NIfTI intent code for an N×3 array of vertex coordinates.
pub const NIFTI_INTENT_POINTSET: i32 = 1008;
/// NIfTI intent code for an M×3 array of triangle vertex indices.
pub const NIFTI_INTENT_TRIANGLE: i32 = 1009;

/// Semantic role of a [`TaggedArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Vertex coordinates, N×3 floating point
    PointSet,
    /// Triangle vertex-index triples, M×3 integer, zero-based
    TriangleSet,
    /// Any other intent code; carried through unused
    Other(i32),
}

impl Intent {
    /// Map a raw NIfTI intent code onto a role.
    pub const fn from_code(code: i32) -> Self {
        match code {
            NIFTI_INTENT_POINTSET => Intent::PointSet,
            NIFTI_INTENT_TRIANGLE => Intent::TriangleSet,
            other => Intent::Other(other),
        }
    }

    /// The raw NIfTI intent code for this role.
    pub const fn code(self) -> i32 {
        match self {
            Intent::PointSet => NIFTI_INTENT_POINTSET,
            Intent::TriangleSet => NIFTI_INTENT_TRIANGLE,
            Intent::Other(other) => other,
        }
    }
}

/// Numeric payload of a tagged array, row-major.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
    Float64(Vec<f64>),
    Int32(Vec<i32>),
}

impl ArrayData {
    /// Number of scalar elements in the payload.
    pub fn len(&self) -> usize {
        match self {
            ArrayData::Float64(values) => values.len(),
            ArrayData::Int32(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A numeric array plus the role code and shape metadata its producer
/// attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedArray {
    pub intent: Intent,
    pub data: ArrayData,
    /// Row count declared by the producer (N for points, M for triangles)
    pub rows: usize,
    /// Column count declared by the producer; 3 for both recognized roles
    pub cols: usize,
}

impl TaggedArray {
    /// Wrap an N×3 coordinate array as a `POINT_SET`.
    pub fn point_set(points: &[[Real; 3]]) -> Self {
        let data = points.iter().flatten().map(|&c| c as f64).collect();
        TaggedArray {
            intent: Intent::PointSet,
            data: ArrayData::Float64(data),
            rows: points.len(),
            cols: 3,
        }
    }

    /// Wrap an M×3 index array as a `TRIANGLE_SET`.
    pub fn triangle_set(triangles: &[[i32; 3]]) -> Self {
        let data = triangles.iter().flatten().copied().collect();
        TaggedArray {
            intent: Intent::TriangleSet,
            data: ArrayData::Int32(data),
            rows: triangles.len(),
            cols: 3,
        }
    }
}

/// The two arrays selected by [`classify`], unvalidated against each other.
/// Cross-validation (index bounds, shape) belongs to mesh construction.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub points: &'a TaggedArray,
    pub triangles: &'a TaggedArray,
}

/// Scan the input collection once and select the `POINT_SET` and
/// `TRIANGLE_SET` arrays.
///
/// When the collection carries more than one array of the same recognized
/// role, the one encountered **last** in iteration order wins and silently
/// replaces any earlier candidate; earlier candidates are discarded, not
/// merged. Unrecognized roles are skipped.
pub fn classify(arrays: &[TaggedArray]) -> Result<Selection<'_>, Error> {
    let mut points = None;
    let mut triangles = None;

    for array in arrays {
        match array.intent {
            // Last candidate of each role wins
            Intent::PointSet => points = Some(array),
            Intent::TriangleSet => triangles = Some(array),
            Intent::Other(_) => {},
        }
    }

    let points = points.ok_or(Error::MissingRole(Intent::PointSet))?;
    let triangles = triangles.ok_or(Error::MissingRole(Intent::TriangleSet))?;
    Ok(Selection { points, triangles })
}
