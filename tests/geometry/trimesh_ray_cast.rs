use approx::assert_relative_eq;
use meshtrace::na::Point3;
use meshtrace::query::details::cast_ray_triangle;
use meshtrace::query::{RayAabb, TraceHit};
use meshtrace::shape::TriMesh;

fn single_triangle() -> (Vec<Point3<f32>>, Vec<u32>) {
    (
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        vec![0, 1, 2],
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
        0, 3, 7, 0, 7, 4, // -x
        1, 5, 6, 1, 6, 2, // +x
        0, 4, 5, 0, 5, 1, // -y
        3, 2, 6, 3, 6, 7, // +y
        0, 1, 2, 0, 2, 3, // -z
        4, 7, 6, 4, 6, 5, // +z
    ];
    (vertices, indices)
}

// A bumpy heightfield large enough that long rays get chunked by the
// segmented first-hit driver.
fn terrain(rng: &mut oorandom::Rand32) -> (Vec<Point3<f32>>, Vec<u32>) {
    const N: usize = 9;
    const STEP: f32 = 30.0;

    let mut vertices = Vec::new();
    for iy in 0..N {
        for ix in 0..N {
            vertices.push(Point3::new(
                ix as f32 * STEP,
                iy as f32 * STEP,
                rng.rand_float() * 12.0,
            ));
        }
    }

    let mut indices = Vec::new();
    for iy in 0..N - 1 {
        for ix in 0..N - 1 {
            let i00 = (iy * N + ix) as u32;
            let i10 = i00 + 1;
            let i01 = i00 + N as u32;
            let i11 = i01 + 1;
            indices.extend_from_slice(&[i00, i10, i11, i00, i11, i01]);
        }
    }

    (vertices, indices)
}

fn brute_force_first_hit(mesh: &TriMesh, start: &Point3<f32>, end: &Point3<f32>) -> TraceHit {
    let ray = RayAabb::new(*start, *end);
    let mut hit = TraceHit::default();
    for i in 0..mesh.num_triangles() {
        if let Some(tri_hit) = cast_ray_triangle(&ray, &mesh.triangle(i as u32)) {
            if tri_hit.toi < hit.fraction {
                hit.fraction = tri_hit.toi;
                hit.triangle = i as i32;
                hit.b = tri_hit.b;
                hit.c = tri_hit.c;
            }
        }
    }
    hit
}

#[test]
fn single_triangle_front_hit() {
    let (vertices, indices) = single_triangle();
    let mesh = TriMesh::new(&vertices, &indices).unwrap();

    let hit = mesh.cast_ray(&Point3::new(0.25, 0.25, 1.0), &Point3::new(0.25, 0.25, -1.0));
    assert!(hit.is_hit());
    assert_eq!(hit.triangle, 0);
    assert_relative_eq!(hit.fraction, 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(hit.b, 0.25, epsilon = 1.0e-4);
    assert_relative_eq!(hit.c, 0.25, epsilon = 1.0e-4);

    let a = 1.0 - hit.b - hit.c;
    assert_relative_eq!(a + hit.b + hit.c, 1.0, epsilon = 1.0e-4);
}

#[test]
fn single_triangle_miss() {
    let (vertices, indices) = single_triangle();
    let mesh = TriMesh::new(&vertices, &indices).unwrap();

    let hit = mesh.cast_ray(&Point3::new(2.0, 2.0, 1.0), &Point3::new(2.0, 2.0, -1.0));
    assert!(!hit.is_hit());
    assert_eq!(hit.fraction, 1.0);
    assert_eq!(hit.triangle, -1);
}

#[test]
fn box_hit_on_near_face() {
    let (vertices, indices) = unit_box();
    let mesh = TriMesh::new(&vertices, &indices).unwrap();

    // Enters through the -x face at x = -1, halfway along the segment.
    let hit = mesh.cast_ray(&Point3::new(-2.0, 0.0, 0.0), &Point3::new(0.0, 0.0, 0.0));
    assert!(hit.is_hit());
    assert_relative_eq!(hit.fraction, 0.5, epsilon = 1.0e-4);

    let tri = mesh.triangle(hit.triangle as u32);
    for pt in tri.vertices() {
        assert_relative_eq!(pt.x, -1.0);
    }
}

#[test]
fn barycentrics_locate_the_hit_point() {
    let (vertices, indices) = unit_box();
    let mesh = TriMesh::new(&vertices, &indices).unwrap();

    let start = Point3::new(0.3, -0.2, 3.0);
    let end = Point3::new(0.3, -0.2, 0.0);
    let hit = mesh.cast_ray(&start, &end);
    assert!(hit.is_hit());

    let tri = mesh.triangle(hit.triangle as u32);
    let a = 1.0 - hit.b - hit.c;
    let from_bary = tri.a.coords * a + tri.b.coords * hit.b + tri.c.coords * hit.c;
    let from_ray = start.coords + (end - start) * hit.fraction;
    assert_relative_eq!(from_bary, from_ray, epsilon = 1.0e-3);
}

#[test]
fn any_hit_matches_first_hit() {
    let (vertices, indices) = unit_box();
    let mesh = TriMesh::new(&vertices, &indices).unwrap();

    let rays = [
        (Point3::new(-5.0, 0.0, 0.0), Point3::new(5.0, 0.0, 0.0)),
        (Point3::new(-5.0, 0.0, 0.0), Point3::new(-2.0, 0.0, 0.0)),
        (Point3::new(-5.0, 3.0, 0.0), Point3::new(5.0, 3.0, 0.0)),
        (Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 5.0)),
        (Point3::new(2.0, 2.0, 2.0), Point3::new(5.0, 5.0, 5.0)),
    ];

    for (start, end) in &rays {
        assert_eq!(
            mesh.intersects_ray(start, end),
            mesh.cast_ray(start, end).is_hit()
        );
    }
}

#[test]
fn segmented_cast_matches_brute_force() {
    let mut rng = oorandom::Rand32::new(7);
    let (vertices, indices) = terrain(&mut rng);
    let mesh = TriMesh::new(&vertices, &indices).unwrap();

    let mut hits = 0;
    for _ in 0..200 {
        // Rays from well above the terrain, long enough to span several
        // segments, at shallow random slants.
        let start = Point3::new(
            rng.rand_float() * 240.0,
            rng.rand_float() * 240.0,
            150.0 + rng.rand_float() * 100.0,
        );
        let end = Point3::new(
            rng.rand_float() * 240.0,
            rng.rand_float() * 240.0,
            -20.0 - rng.rand_float() * 100.0,
        );

        let expected = brute_force_first_hit(&mesh, &start, &end);
        let hit = mesh.cast_ray(&start, &end);

        assert_eq!(hit.is_hit(), expected.is_hit());
        assert_eq!(mesh.intersects_ray(&start, &end), expected.is_hit());
        if expected.is_hit() {
            hits += 1;
            assert_relative_eq!(hit.fraction, expected.fraction, epsilon = 1.0e-4);
            assert_eq!(hit.triangle, expected.triangle);
        }
    }

    // The setup should produce a healthy mix of hits and misses.
    assert!(hits > 20, "only {hits} of 200 rays hit the terrain");
}

#[test]
fn empty_mesh_misses_everything() {
    let vertices: Vec<Point3<f32>> = Vec::new();
    let indices: Vec<u32> = Vec::new();
    let mesh = TriMesh::new(&vertices, &indices).unwrap();

    assert!(!mesh.intersects_ray(&Point3::new(0.0, 0.0, 1.0), &Point3::new(0.0, 0.0, -1.0)));
    let hit = mesh.cast_ray(&Point3::new(0.0, 0.0, 1.0), &Point3::new(0.0, 0.0, -1.0));
    assert_eq!(hit.fraction, 1.0);
    assert_eq!(hit.triangle, -1);
}

#[test]
fn degenerate_triangle_is_unhittable() {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    ];
    let indices = vec![0, 1, 2];
    let mesh = TriMesh::new(&vertices, &indices).unwrap();

    let hit = mesh.cast_ray(&Point3::new(1.0, 0.0, 1.0), &Point3::new(1.0, 0.0, -1.0));
    assert!(!hit.is_hit());
    assert!(!mesh.intersects_ray(&Point3::new(1.0, 0.0, 1.0), &Point3::new(1.0, 0.0, -1.0)));
}
