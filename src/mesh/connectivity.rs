//! Indexed connectivity and topology analysis
//!
//! Adjacency is derived once from the face list and shared by smoothing,
//! normal orientation, and topology analysis. All derived orderings are
//! index-driven so identical input yields identical traversal order.

use crate::mesh::Mesh;
use std::collections::{HashMap, VecDeque};

/// Canonical undirected edge representation (smaller index first)
pub(crate) const fn canonical_edge(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

/// Pre-computed connectivity of an indexed triangle mesh.
#[derive(Debug, Clone)]
pub struct Connectivity {
    /// Vertex index -> sorted, deduplicated indices of vertices sharing a
    /// face edge with it
    pub neighbors: Vec<Vec<usize>>,
    /// Canonical edge -> incident faces, each with a flag telling whether the
    /// face's directed edge runs in canonical (low-to-high) order. Two faces
    /// with consistent winding carry opposite flags on a shared edge.
    pub edge_faces: HashMap<(usize, usize), Vec<(usize, bool)>>,
}

impl Connectivity {
    /// Extract edges and vertex adjacency from the face list in one pass.
    pub fn build(mesh: &Mesh) -> Self {
        let mut neighbors = vec![Vec::new(); mesh.vertices.len()];
        let mut edge_faces: HashMap<(usize, usize), Vec<(usize, bool)>> = HashMap::new();

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            for i in 0..3 {
                let a = face[i];
                let b = face[(i + 1) % 3];
                if a == b {
                    // Repeated index inside a face spans no edge
                    continue;
                }
                neighbors[a].push(b);
                neighbors[b].push(a);
                edge_faces
                    .entry(canonical_edge(a, b))
                    .or_default()
                    .push((face_idx, a < b));
            }
        }

        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Connectivity {
            neighbors,
            edge_faces,
        }
    }

    /// Flags every vertex incident to a boundary edge (an edge with exactly
    /// one adjacent face).
    pub fn boundary_flags(&self, vertex_count: usize) -> Vec<bool> {
        let mut flags = vec![false; vertex_count];
        for (&(a, b), faces) in &self.edge_faces {
            if faces.len() == 1 {
                flags[a] = true;
                flags[b] = true;
            }
        }
        flags
    }

    /// Connected components of the face adjacency graph (faces joined by a
    /// shared edge). Components are seeded from the lowest unvisited face
    /// index and traversed breadth-first, so the result is deterministic:
    /// components ordered by seed, faces in discovery order.
    pub fn face_components(&self, mesh: &Mesh) -> Vec<Vec<usize>> {
        let mut visited = vec![false; mesh.faces.len()];
        let mut components = Vec::new();

        for seed in 0..mesh.faces.len() {
            if visited[seed] {
                continue;
            }
            visited[seed] = true;
            let mut component = Vec::new();
            let mut queue = VecDeque::from([seed]);

            while let Some(face_idx) = queue.pop_front() {
                component.push(face_idx);
                let face = &mesh.faces[face_idx];
                for i in 0..3 {
                    let a = face[i];
                    let b = face[(i + 1) % 3];
                    if a == b {
                        continue;
                    }
                    let Some(incident) = self.edge_faces.get(&canonical_edge(a, b)) else {
                        continue;
                    };
                    for &(other, _) in incident {
                        if !visited[other] {
                            visited[other] = true;
                            queue.push_back(other);
                        }
                    }
                }
            }
            components.push(component);
        }
        components
    }
}

/// Topological summary of a mesh, computed from its edge incidence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyAnalysis {
    /// Edges with exactly one adjacent face (0 for closed surfaces)
    pub boundary_edges: usize,
    /// Edges shared by more than two faces
    pub non_manifold_edges: usize,
    /// Connected components of the face adjacency graph
    pub connected_components: usize,
    /// Euler characteristic V - E + F
    pub euler_characteristic: i32,
    /// True when the mesh has faces and every edge is shared by exactly two
    pub is_closed: bool,
}

impl Mesh {
    /// Summarize edge incidence, connectivity, and the Euler characteristic.
    pub fn analyze_topology(&self) -> TopologyAnalysis {
        let connectivity = Connectivity::build(self);

        let mut boundary_edges = 0;
        let mut non_manifold_edges = 0;
        for faces in connectivity.edge_faces.values() {
            match faces.len() {
                1 => boundary_edges += 1,
                2 => {},
                _ => non_manifold_edges += 1,
            }
        }

        let connected_components = connectivity.face_components(self).len();

        let num_vertices = self.vertices.len() as i32;
        let num_edges = connectivity.edge_faces.len() as i32;
        let num_faces = self.faces.len() as i32;

        TopologyAnalysis {
            boundary_edges,
            non_manifold_edges,
            connected_components,
            euler_characteristic: num_vertices - num_edges + num_faces,
            is_closed: !self.faces.is_empty() && boundary_edges == 0 && non_manifold_edges == 0,
        }
    }
}
