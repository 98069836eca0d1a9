//! Indexed triangle mesh: construction from classified surface arrays,
//! bounds, and topology analysis

use crate::errors::Error;
use crate::float_types::Real;
use crate::tagged::{ArrayData, TaggedArray};
use nalgebra::{Point3, Vector3};

pub mod connectivity;
pub mod normals;
pub mod smoothing;

pub use connectivity::TopologyAnalysis;
pub use smoothing::SmoothParams;

/// An indexed triangle mesh: an ordered vertex sequence plus an ordered face
/// sequence of index triples into it, with optional parallel normal arrays.
///
/// Invariants, established at construction and preserved by every operation:
/// - every face index lies in `[0, vertices.len())`
/// - `vertex_normals`, when present, has exactly `vertices.len()` entries
/// - `face_normals`, when present, has exactly `faces.len()` entries
///
/// Face vertex ordering defines winding, which normal estimation reads.
/// Smoothing perturbs `vertices` in place and never touches `faces`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Point3<Real>>,
    pub faces: Vec<[usize; 3]>,
    pub vertex_normals: Option<Vec<Vector3<Real>>>,
    pub face_normals: Option<Vec<Vector3<Real>>>,
}

impl Mesh {
    /// Build a mesh from a selected `POINT_SET` array and `TRIANGLE_SET` array.
    ///
    /// Vertices and faces are copied in order. Construction is all-or-nothing:
    /// a shape/payload mismatch or any vertex index outside `[0, N)` fails
    /// without returning a mesh. The result carries no normals.
    pub fn from_arrays(points: &TaggedArray, triangles: &TaggedArray) -> Result<Mesh, Error> {
        let coords = match &points.data {
            ArrayData::Float64(values) => values,
            ArrayData::Int32(_) => {
                return Err(Error::MalformedArray {
                    intent: points.intent,
                    detail: "POINT_SET payload must be floating point".into(),
                });
            },
        };
        check_shape(points, coords.len())?;

        let indices = match &triangles.data {
            ArrayData::Int32(values) => values,
            ArrayData::Float64(_) => {
                return Err(Error::MalformedArray {
                    intent: triangles.intent,
                    detail: "TRIANGLE_SET payload must be integer".into(),
                });
            },
        };
        check_shape(triangles, indices.len())?;

        let vertices: Vec<Point3<Real>> = coords
            .chunks_exact(3)
            .map(|row| Point3::new(row[0] as Real, row[1] as Real, row[2] as Real))
            .collect();

        let mut faces = Vec::with_capacity(triangles.rows);
        for (face_idx, triple) in indices.chunks_exact(3).enumerate() {
            let mut face = [0usize; 3];
            for (slot, &raw) in triple.iter().enumerate() {
                if raw < 0 || raw as usize >= vertices.len() {
                    return Err(Error::InvalidIndex {
                        face: face_idx,
                        index: raw as i64,
                        len: vertices.len(),
                    });
                }
                face[slot] = raw as usize;
            }
            faces.push(face);
        }

        log::debug!(
            "built mesh with {} vertices, {} faces",
            vertices.len(),
            faces.len()
        );

        Ok(Mesh {
            vertices,
            faces,
            vertex_normals: None,
            face_normals: None,
        })
    }

    /// Axis-aligned bounding box over the vertex positions.
    /// An empty mesh yields a degenerate box at the origin.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
        let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
        for vertex in &self.vertices {
            mins.x = mins.x.min(vertex.x);
            mins.y = mins.y.min(vertex.y);
            mins.z = mins.z.min(vertex.z);
            maxs.x = maxs.x.max(vertex.x);
            maxs.y = maxs.y.max(vertex.y);
            maxs.z = maxs.z.max(vertex.z);
        }
        if self.vertices.is_empty() {
            mins = Point3::origin();
            maxs = Point3::origin();
        }
        BoundingBox { mins, maxs }
    }

    /// Unnormalized cross product of two edge vectors of a face,
    /// `(v1 − v0) × (v2 − v0)`. Shared by smoothing (dihedral classification)
    /// and normal estimation.
    pub(crate) fn face_cross(&self, face: &[usize; 3]) -> Vector3<Real> {
        let v0 = self.vertices[face[0]];
        let v1 = self.vertices[face[1]];
        let v2 = self.vertices[face[2]];
        (v1 - v0).cross(&(v2 - v0))
    }
}

fn check_shape(array: &TaggedArray, payload_len: usize) -> Result<(), Error> {
    if array.cols != 3 {
        return Err(Error::MalformedArray {
            intent: array.intent,
            detail: format!("expected 3 columns, found {}", array.cols),
        });
    }
    if payload_len != array.rows * array.cols {
        return Err(Error::MalformedArray {
            intent: array.intent,
            detail: format!(
                "payload holds {} scalars but the declared shape is {}x{}",
                payload_len, array.rows, array.cols
            ),
        });
    }
    Ok(())
}

/// Axis-aligned bounds of a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}
