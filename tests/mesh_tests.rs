//! Construction tests: verbatim copies, all-or-nothing validation

use brainmesh::errors::Error;
use brainmesh::float_types::Real;
use brainmesh::mesh::Mesh;
use brainmesh::tagged::{ArrayData, Intent, TaggedArray};
use nalgebra::Point3;

fn quad_points() -> TaggedArray {
    TaggedArray::point_set(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])
}

#[test]
fn test_builder_copies_arrays_verbatim() {
    let points = quad_points();
    let triangles = TaggedArray::triangle_set(&[[0, 1, 2], [0, 2, 3]]);

    let mesh = Mesh::from_arrays(&points, &triangles).unwrap();
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.faces.len(), 2);

    let expected = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    for (vertex, expected) in mesh.vertices.iter().zip(&expected) {
        assert_eq!(vertex, expected, "vertex values must be copied verbatim");
    }
    assert_eq!(mesh.faces, vec![[0, 1, 2], [0, 2, 3]]);

    // Construction never attaches normals
    assert!(mesh.vertex_normals.is_none());
    assert!(mesh.face_normals.is_none());
}

#[test]
fn test_index_one_past_the_end_names_the_face() {
    let points = quad_points();
    let triangles = TaggedArray::triangle_set(&[[0, 1, 2], [1, 2, 4]]);

    let err = Mesh::from_arrays(&points, &triangles).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidIndex {
            face: 1,
            index: 4,
            len: 4,
        }
    );
}

#[test]
fn test_negative_index_is_rejected() {
    let points = quad_points();
    let triangles = TaggedArray::triangle_set(&[[-1, 1, 2]]);

    let err = Mesh::from_arrays(&points, &triangles).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidIndex {
            face: 0,
            index: -1,
            len: 4,
        }
    );
}

#[test]
fn test_four_column_point_array_is_malformed() {
    let points = TaggedArray {
        intent: Intent::PointSet,
        data: ArrayData::Float64(vec![0.0; 8]),
        rows: 2,
        cols: 4,
    };
    let triangles = TaggedArray::triangle_set(&[[0, 1, 1]]);

    let err = Mesh::from_arrays(&points, &triangles).unwrap_err();
    assert!(matches!(err, Error::MalformedArray { intent: Intent::PointSet, .. }));
}

#[test]
fn test_integer_point_payload_is_malformed() {
    let points = TaggedArray {
        intent: Intent::PointSet,
        data: ArrayData::Int32(vec![0; 9]),
        rows: 3,
        cols: 3,
    };
    let triangles = TaggedArray::triangle_set(&[[0, 1, 2]]);

    let err = Mesh::from_arrays(&points, &triangles).unwrap_err();
    assert!(matches!(err, Error::MalformedArray { intent: Intent::PointSet, .. }));
}

#[test]
fn test_shape_payload_length_mismatch_is_malformed() {
    let triangles = TaggedArray {
        intent: Intent::TriangleSet,
        data: ArrayData::Int32(vec![0, 1, 2, 0]),
        rows: 2,
        cols: 3,
    };

    let err = Mesh::from_arrays(&quad_points(), &triangles).unwrap_err();
    assert!(matches!(err, Error::MalformedArray { intent: Intent::TriangleSet, .. }));
}

#[test]
fn test_bounding_box_spans_the_vertices() {
    let points = TaggedArray::point_set(&[
        [-1.0, 0.0, 2.0],
        [3.0, -5.0, 0.0],
        [0.5, 2.5, -0.5],
    ]);
    let triangles = TaggedArray::triangle_set(&[[0, 1, 2]]);

    let mesh = Mesh::from_arrays(&points, &triangles).unwrap();
    let bbox = mesh.bounding_box();
    assert_eq!(bbox.mins, Point3::new(-1.0, -5.0, -0.5));
    assert_eq!(bbox.maxs, Point3::new(3.0, 2.5, 2.0));
}

#[test]
fn test_topology_of_built_tetrahedron() {
    let points = TaggedArray::point_set(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);
    let triangles = TaggedArray::triangle_set(&[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]]);

    let mesh = Mesh::from_arrays(&points, &triangles).unwrap();
    let analysis = mesh.analyze_topology();
    assert!(analysis.is_closed);
    assert_eq!(analysis.boundary_edges, 0);
    assert_eq!(analysis.euler_characteristic, 2);
    assert_eq!(analysis.connected_components, 1);
}

#[test]
fn test_vertices_convert_to_the_active_scalar() {
    let points = TaggedArray::point_set(&[
        [0.25, 0.5, 0.75],
        [1.25, 1.5, 1.75],
        [2.25, 2.5, 2.75],
    ]);
    let triangles = TaggedArray::triangle_set(&[[0, 1, 2]]);

    let mesh = Mesh::from_arrays(&points, &triangles).unwrap();
    assert_eq!(mesh.vertices[1], Point3::new(1.25 as Real, 1.5 as Real, 1.75 as Real));
}
