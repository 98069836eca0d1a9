//! Reconstruction errors and recovered-geometry diagnostics

use crate::tagged::Intent;
use std::fmt::Display;

/// Fatal reconstruction failures; the caller never sees a partially built mesh
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// (MissingRole) A required semantic array is absent after classification
    MissingRole(Intent),
    /// (InvalidIndex) A triangle references a vertex index outside `[0, len)`
    InvalidIndex { face: usize, index: i64, len: usize },
    /// (MalformedArray) A selected array's shape or payload type does not match its role
    MalformedArray { intent: Intent, detail: String },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingRole(intent) => {
                let role = match intent {
                    Intent::PointSet => "POINT_SET",
                    Intent::TriangleSet => "TRIANGLE_SET",
                    Intent::Other(code) => return write!(f, "(MissingRole) No array with intent code {} present", code),
                };
                write!(f, "(MissingRole) No {} array present after classification", role)
            },
            Error::InvalidIndex { face, index, len } => write!(
                f,
                "(InvalidIndex) Face {} references vertex index {} outside [0, {})",
                face, index, len
            ),
            Error::MalformedArray { intent, detail } => write!(
                f,
                "(MalformedArray) Array with intent code {} is malformed: {}",
                intent.code(),
                detail
            ),
        }
    }
}

/// The mesh element a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Face(usize),
    Vertex(usize),
}

/// What was degenerate about the element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateKind {
    /// Face edge vectors are collinear or an edge has zero length; the cross
    /// product has near-zero magnitude
    CollapsedFace,
    /// Incident face normals sum to near-zero, or the vertex has no incident
    /// faces at all
    ZeroNormalSum,
}

/// One recovered degenerate-geometry finding from normal estimation.
///
/// Diagnostics are non-fatal: the affected element receives a zero-vector
/// normal and computation continues. They are reported in ascending element
/// order, faces before vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub element: Element,
    pub kind: DegenerateKind,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (element, idx) = match self.element {
            Element::Face(idx) => ("face", idx),
            Element::Vertex(idx) => ("vertex", idx),
        };
        match self.kind {
            DegenerateKind::CollapsedFace => {
                write!(f, "(DegenerateGeometry) {} {} is degenerate; normal set to zero", element, idx)
            },
            DegenerateKind::ZeroNormalSum => {
                write!(
                    f,
                    "(DegenerateGeometry) {} {} has no usable incident face normals; normal set to zero",
                    element, idx
                )
            },
        }
    }
}
