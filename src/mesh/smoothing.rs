//! Feature-preserving Laplacian smoothing for indexed triangle meshes

use crate::float_types::{Real, tolerance};
use crate::mesh::Mesh;
use crate::mesh::connectivity::Connectivity;
use nalgebra::{Point3, Vector3};

/// Relaxation parameters.
///
/// The defaults are the pipeline's fixed configuration; they are exposed as a
/// struct so tests and callers outside the pipeline can vary them.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothParams {
    pub iterations: usize,
    /// Fraction of the distance toward the neighbor centroid moved per
    /// iteration (0.0 = no smoothing, 1.0 = full neighbor averaging)
    pub relaxation_factor: Real,
    /// Dihedral angle in degrees above which an edge counts as a feature
    pub feature_angle: Real,
    /// Pin vertices with an incident feature edge, retaining sharp creases
    pub preserve_feature_edges: bool,
    /// Relax vertices on the mesh boundary too; off keeps the rim fixed
    pub smooth_boundary: bool,
}

impl Default for SmoothParams {
    /// 15 iterations, relaxation factor 0.1, feature edges preserved at a
    /// 45° dihedral threshold, boundary vertices pinned.
    fn default() -> Self {
        SmoothParams {
            iterations: 15,
            relaxation_factor: 0.1,
            feature_angle: 45.0,
            preserve_feature_edges: true,
            smooth_boundary: false,
        }
    }
}

impl Mesh {
    /// **Laplacian Mesh Smoothing with Crease and Boundary Preservation**
    ///
    /// Iterative position relaxation over the indexed connectivity graph. For
    /// each movable vertex v with neighbors N(v):
    /// ```text
    /// v_new = v + relaxation_factor · (centroid(N(v)) − v)
    /// ```
    ///
    /// Per iteration, every read comes from the previous iteration's full
    /// position snapshot, so the result does not depend on vertex visiting
    /// order. A vertex is pinned for an iteration when it lies on the mesh
    /// boundary (unless `smooth_boundary` is set) or, with
    /// `preserve_feature_edges`, when any incident edge spans a dihedral
    /// angle above `feature_angle`. Edge classification is recomputed from
    /// the snapshot each iteration as creases sharpen or flatten.
    ///
    /// Connectivity is built once and reused across iterations. Topology is
    /// never altered; with `iterations == 0` this is the identity. Only
    /// positions change: normal arrays attached earlier are left as they
    /// were, so estimate normals after smoothing, not before.
    pub fn smooth(&mut self, params: &SmoothParams) {
        if params.iterations == 0 || self.vertices.is_empty() || self.faces.is_empty() {
            return;
        }

        let connectivity = Connectivity::build(self);
        let boundary = connectivity.boundary_flags(self.vertices.len());
        let cos_threshold = params.feature_angle.to_radians().cos();

        for _iteration in 0..params.iterations {
            let snapshot = self.vertices.clone();

            let pinned = if params.preserve_feature_edges {
                feature_vertex_flags(&snapshot, &self.faces, &connectivity, cos_threshold)
            } else {
                vec![false; snapshot.len()]
            };

            for idx in 0..snapshot.len() {
                if (boundary[idx] && !params.smooth_boundary) || pinned[idx] {
                    continue;
                }
                let neighbors = &connectivity.neighbors[idx];
                if neighbors.is_empty() {
                    continue;
                }

                let mut neighbor_sum = Vector3::zeros();
                for &neighbor in neighbors {
                    neighbor_sum += snapshot[neighbor].coords;
                }
                let centroid = Point3::from(neighbor_sum / neighbors.len() as Real);
                self.vertices[idx] =
                    snapshot[idx] + (centroid - snapshot[idx]) * params.relaxation_factor;
            }
        }

        log::debug!(
            "relaxed {} vertices over {} iterations",
            self.vertices.len(),
            params.iterations
        );
    }
}

/// Flag every vertex with an incident feature edge.
///
/// An edge is a feature when the dihedral angle between its two adjacent
/// faces exceeds the threshold. Edges shared by more than two faces, and
/// edges adjacent to a degenerate face (undefined dihedral), are treated as
/// features. Boundary edges are not features; the boundary flags pin their
/// endpoints separately.
fn feature_vertex_flags(
    positions: &[Point3<Real>],
    faces: &[[usize; 3]],
    connectivity: &Connectivity,
    cos_threshold: Real,
) -> Vec<bool> {
    let face_normals: Vec<Option<Vector3<Real>>> = faces
        .iter()
        .map(|face| {
            let v0 = positions[face[0]];
            let v1 = positions[face[1]];
            let v2 = positions[face[2]];
            (v1 - v0).cross(&(v2 - v0)).try_normalize(tolerance())
        })
        .collect();

    let mut flags = vec![false; positions.len()];
    for (&(a, b), incident) in &connectivity.edge_faces {
        let feature = match incident.as_slice() {
            [_] => false,
            [(f0, _), (f1, _)] => match (face_normals[*f0], face_normals[*f1]) {
                (Some(n0), Some(n1)) => n0.dot(&n1) < cos_threshold,
                _ => true,
            },
            _ => true,
        };
        if feature {
            flags[a] = true;
            flags[b] = true;
        }
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two unit squares meeting at a right angle along the edge (0, 1)
    fn folded_plates() -> Mesh {
        Mesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(-1.0, 0.0, 0.0),
                Point3::new(-1.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 1.0),
            ],
            faces: vec![[2, 0, 1], [2, 1, 3], [0, 4, 5], [0, 5, 1]],
            vertex_normals: None,
            face_normals: None,
        }
    }

    #[test]
    fn right_angle_fold_is_a_feature_edge() {
        let mesh = folded_plates();
        let connectivity = Connectivity::build(&mesh);
        let cos_threshold = (45.0 as Real).to_radians().cos();
        let flags =
            feature_vertex_flags(&mesh.vertices, &mesh.faces, &connectivity, cos_threshold);
        // Only the fold endpoints are feature vertices
        assert_eq!(flags, vec![true, true, false, false, false, false]);
    }

    #[test]
    fn flat_plates_have_no_feature_edges() {
        let mut mesh = folded_plates();
        // Unfold the second plate into the z = 0 plane
        mesh.vertices[4] = Point3::new(1.0, 0.0, 0.0);
        mesh.vertices[5] = Point3::new(1.0, 1.0, 0.0);
        let connectivity = Connectivity::build(&mesh);
        let cos_threshold = (45.0 as Real).to_radians().cos();
        let flags =
            feature_vertex_flags(&mesh.vertices, &mesh.faces, &connectivity, cos_threshold);
        assert_eq!(flags, vec![false; 6]);
    }
}
