//! Face and vertex normal estimation with global auto-orientation

use crate::errors::{DegenerateKind, Diagnostic, Element};
use crate::float_types::{Real, tolerance};
use crate::mesh::Mesh;
use crate::mesh::connectivity::{Connectivity, canonical_edge};
use nalgebra::Vector3;
use std::collections::VecDeque;

impl Mesh {
    /// **Normal Estimation with Global Auto-Orientation**
    ///
    /// Populates both normal arrays:
    /// - **Face normal**: normalized cross product `(v1 − v0) × (v2 − v0)`
    ///   of the face's winding, multiplied by its orientation sign.
    /// - **Vertex normal**: normalized equal-weight sum of the oriented unit
    ///   normals of the vertex's incident faces.
    ///
    /// Orientation signs come from [`orientation_signs`]: one deterministic
    /// pass that makes adjacent faces agree in orientation sense and points
    /// closed surfaces away from their enclosed volume.
    ///
    /// Degenerate elements never abort the computation: a face whose cross
    /// product has near-zero magnitude, and a vertex whose incident normals
    /// cancel (or that has no incident faces), receive the zero vector and a
    /// [`Diagnostic`]. Diagnostics are returned in ascending element order,
    /// faces before vertices, and mirrored to the `log` facade as warnings.
    pub fn estimate_normals(&mut self) -> Vec<Diagnostic> {
        let tolerance_squared = tolerance() * tolerance();
        let mut diagnostics = Vec::new();

        let mut face_normals = Vec::with_capacity(self.faces.len());
        for (face_idx, face) in self.faces.iter().enumerate() {
            let cross = self.face_cross(face);
            if cross.norm_squared() <= tolerance_squared {
                let diagnostic = Diagnostic {
                    element: Element::Face(face_idx),
                    kind: DegenerateKind::CollapsedFace,
                };
                log::warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
                face_normals.push(Vector3::zeros());
            } else {
                face_normals.push(cross.normalize());
            }
        }

        let connectivity = Connectivity::build(self);
        let signs = orientation_signs(self, &connectivity);
        for (normal, &sign) in face_normals.iter_mut().zip(&signs) {
            *normal *= sign;
        }

        let mut vertex_normals = vec![Vector3::zeros(); self.vertices.len()];
        for (face, normal) in self.faces.iter().zip(&face_normals) {
            for &vertex_idx in face {
                vertex_normals[vertex_idx] += normal;
            }
        }
        for (vertex_idx, normal) in vertex_normals.iter_mut().enumerate() {
            if normal.norm_squared() <= tolerance_squared {
                *normal = Vector3::zeros();
                let diagnostic = Diagnostic {
                    element: Element::Vertex(vertex_idx),
                    kind: DegenerateKind::ZeroNormalSum,
                };
                log::warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
            } else {
                *normal = normal.normalize();
            }
        }

        log::debug!(
            "estimated normals for {} faces and {} vertices, {} degenerate elements recovered",
            self.faces.len(),
            self.vertices.len(),
            diagnostics.len()
        );

        self.face_normals = Some(face_normals);
        self.vertex_normals = Some(vertex_normals);
        diagnostics
    }
}

/// Compute an orientation sign (±1) per face.
///
/// Deterministic by construction: every connected component is seeded from
/// its lowest face index with sign +1 and traversed breadth-first in face and
/// edge order. Crossing a manifold edge flips the sign when both faces
/// traverse the shared edge in the same direction (consistent winding
/// traverses it in opposite directions). Edges shared by one face or more
/// than two faces do not propagate orientation.
///
/// A component that is closed (every edge shared by exactly two faces) is
/// then tested against its sign-adjusted enclosed volume; a negative volume
/// means the normals point into the surface, and the whole component flips so
/// they point away from it. Open components keep the propagated, mutually
/// consistent signs.
fn orientation_signs(mesh: &Mesh, connectivity: &Connectivity) -> Vec<Real> {
    let mut signs: Vec<Real> = vec![1.0; mesh.faces.len()];
    let mut visited = vec![false; mesh.faces.len()];

    for seed in 0..mesh.faces.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        let mut component = vec![seed];
        let mut queue = VecDeque::from([seed]);

        while let Some(face_idx) = queue.pop_front() {
            let face = &mesh.faces[face_idx];
            for i in 0..3 {
                let a = face[i];
                let b = face[(i + 1) % 3];
                if a == b {
                    continue;
                }
                let Some(incident) = connectivity.edge_faces.get(&canonical_edge(a, b)) else {
                    continue;
                };
                if incident.len() != 2 {
                    continue;
                }
                let Some(&(other, other_direction)) =
                    incident.iter().find(|&&(other, _)| other != face_idx)
                else {
                    continue;
                };
                if visited[other] {
                    continue;
                }
                visited[other] = true;
                let consistent = (a < b) != other_direction;
                signs[other] = if consistent {
                    signs[face_idx]
                } else {
                    -signs[face_idx]
                };
                component.push(other);
                queue.push_back(other);
            }
        }

        if component_is_closed(mesh, connectivity, &component) {
            let volume: Real = component
                .iter()
                .map(|&face_idx| {
                    let [a, b, c] = mesh.faces[face_idx];
                    signs[face_idx]
                        * mesh.vertices[a]
                            .coords
                            .dot(&mesh.vertices[b].coords.cross(&mesh.vertices[c].coords))
                })
                .sum::<Real>()
                / 6.0;
            if volume < 0.0 {
                for &face_idx in &component {
                    signs[face_idx] = -signs[face_idx];
                }
            }
        }
    }
    signs
}

/// A component is closed when every edge of every face is shared by exactly
/// two faces. Faces with a repeated vertex index disqualify their component.
fn component_is_closed(mesh: &Mesh, connectivity: &Connectivity, component: &[usize]) -> bool {
    component.iter().all(|&face_idx| {
        let face = mesh.faces[face_idx];
        (0..3).all(|i| {
            let a = face[i];
            let b = face[(i + 1) % 3];
            a != b
                && connectivity
                    .edge_faces
                    .get(&canonical_edge(a, b))
                    .is_some_and(|incident| incident.len() == 2)
        })
    })
}
