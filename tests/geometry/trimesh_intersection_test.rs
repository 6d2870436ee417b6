use meshtrace::na::Point3;
use meshtrace::shape::{Sphere, TriMesh};

fn floor() -> (Vec<Point3<f32>>, Vec<u32>) {
    (
        vec![
            Point3::new(-10.0, -10.0, 0.0),
            Point3::new(10.0, -10.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
            Point3::new(-10.0, 10.0, 0.0),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
}

fn unit_box() -> (Vec<Point3<f32>>, Vec<u32>) {
    let vertices = vec![
        Point3::new(-1.0, -1.0, -1.0),
        Point3::new(1.0, -1.0, -1.0),
        Point3::new(1.0, 1.0, -1.0),
        Point3::new(-1.0, 1.0, -1.0),
        Point3::new(-1.0, -1.0, 1.0),
        Point3::new(1.0, -1.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(-1.0, 1.0, 1.0),
    ];
    let indices = vec![
        0, 3, 7, 0, 7, 4, 1, 5, 6, 1, 6, 2, 0, 4, 5, 0, 5, 1, 3, 2, 6, 3, 6, 7, 0, 1, 2, 0, 2, 3,
        4, 7, 6, 4, 6, 5,
    ];
    (vertices, indices)
}

#[test]
fn sphere_against_floor() {
    let (vertices, indices) = floor();
    let mesh = TriMesh::new(&vertices, &indices).unwrap();

    assert!(mesh.intersects_sphere(&Sphere::new(Point3::new(0.0, 0.0, 0.5), 1.0)));
    assert!(mesh.intersects_sphere(&Sphere::new(Point3::new(7.0, -7.0, -0.3), 0.5)));
    assert!(!mesh.intersects_sphere(&Sphere::new(Point3::new(0.0, 0.0, 2.0), 1.0)));
    // Off the edge of the floor quad: closest feature is the rim.
    assert!(mesh.intersects_sphere(&Sphere::new(Point3::new(10.8, 0.0, 0.0), 1.0)));
    assert!(!mesh.intersects_sphere(&Sphere::new(Point3::new(11.5, 0.0, 0.0), 1.0)));
}

#[test]
fn sphere_inside_hollow_box() {
    let (vertices, indices) = unit_box();
    let mesh = TriMesh::new(&vertices, &indices).unwrap();

    // The mesh is a surface, not a solid: a small sphere floating in the
    // middle touches no triangle.
    assert!(!mesh.intersects_sphere(&Sphere::new(Point3::new(0.0, 0.0, 0.0), 0.5)));
    assert!(mesh.intersects_sphere(&Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.05)));
    assert!(mesh.intersects_sphere(&Sphere::new(Point3::new(0.9, 0.0, 0.0), 0.2)));
}

#[test]
fn sphere_against_empty_mesh() {
    let vertices: Vec<Point3<f32>> = Vec::new();
    let indices: Vec<u32> = Vec::new();
    let mesh = TriMesh::new(&vertices, &indices).unwrap();

    assert!(!mesh.intersects_sphere(&Sphere::new(Point3::new(0.0, 0.0, 0.0), 100.0)));
}

#[test]
fn mesh_mesh_reports_no_contact() {
    // The leaf triangle/triangle kernel is a placeholder, so even two
    // interpenetrating boxes answer false.
    let (vertices1, indices1) = unit_box();
    let mesh1 = TriMesh::new(&vertices1, &indices1).unwrap();

    let vertices2: Vec<_> = vertices1
        .iter()
        .map(|pt| Point3::new(pt.x + 0.5, pt.y, pt.z))
        .collect();
    let mesh2 = TriMesh::new(&vertices2, &indices1).unwrap();

    assert!(!mesh1.intersects_trimesh(&mesh2));
    assert!(!mesh2.intersects_trimesh(&mesh1));

    let empty_vertices: Vec<Point3<f32>> = Vec::new();
    let empty_indices: Vec<u32> = Vec::new();
    let empty = TriMesh::new(&empty_vertices, &empty_indices).unwrap();
    assert!(!mesh1.intersects_trimesh(&empty));
    assert!(!empty.intersects_trimesh(&mesh1));
}
