use super::*;
use crate::geometry::{superellipse, Point3, Polygon};

fn square(half: f64, z: f64) -> Polygon {
    Polygon::from_arrays(&[
        [half, -half, z],
        [half, half, z],
        [-half, half, z],
        [-half, -half, z],
    ])
}

#[test]
fn test_truck_loft_square_sections() {
    let kernel = TruckKernel::new();
    let wires = vec![square(2.0, 0.0), square(1.0, 5.0), square(2.0, 10.0)];

    let solid = kernel.loft(&wires).expect("loft should succeed");
    let faces: usize = solid.boundaries().iter().map(|s| s.face_iter().count()).sum();
    // 4 side faces per band, plus two caps
    assert_eq!(faces, 2 * 4 + 2);
}

#[test]
fn test_truck_loft_tessellates_within_bounds() {
    let kernel = TruckKernel::new();
    let wires = vec![square(2.0, 0.0), square(1.0, 5.0)];
    let solid = kernel.loft(&wires).unwrap();

    let mesh = kernel.tessellate(&solid).unwrap();
    assert!(!mesh.triangles.is_empty());
    assert_eq!(mesh.face_ids.len(), mesh.triangles.len());
    assert_eq!(mesh.face_count(), 4 + 2);

    let (lo, hi) = mesh.bounds().unwrap();
    assert!((lo.z - 0.0).abs() < 1e-6);
    assert!((hi.z - 5.0).abs() < 1e-6);
    assert!((hi.x - 2.0).abs() < 1e-6);
    assert!((lo.y + 2.0).abs() < 1e-6);
}

#[test]
fn test_truck_loft_superellipse_sections() {
    let kernel = TruckKernel::new();
    let wires: Vec<Polygon> = (0..3)
        .map(|i| superellipse(Point3::new(0.0, 0.0, i as f64 * 4.0), 16.5, 10.0, 18, 2.6).unwrap())
        .collect();
    assert!(kernel.loft(&wires).is_ok());
}

#[test]
fn test_truck_step_export() {
    let kernel = TruckKernel::new();
    let solid = kernel.loft(&[square(1.0, 0.0), square(1.0, 1.0)]).unwrap();
    let step = kernel.export_step(&solid).unwrap();
    assert!(step.contains("ISO-10303-21"));
    assert!(step.contains("handle.step"));
    // Same solid, same bytes.
    assert_eq!(step, kernel.export_step(&solid).unwrap());
}

#[test]
fn test_truck_loft_rejects_bad_input() {
    let kernel = TruckKernel::new();

    let single = kernel.loft(&[square(1.0, 0.0)]);
    assert!(matches!(single, Err(KernelOpError::InvalidGeometry(_))));

    let triangle = Polygon::from_arrays(&[[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]]);
    let mismatched = kernel.loft(&[square(1.0, 0.0), triangle]);
    assert!(matches!(mismatched, Err(KernelOpError::InvalidGeometry(_))));

    let degenerate = Polygon::from_arrays(&[[0.0, 0.0, 1.0], [1.0, 0.0, 1.0]]);
    let too_small = kernel.loft(&[degenerate.clone(), degenerate]);
    assert!(matches!(too_small, Err(KernelOpError::InvalidGeometry(_))));

    let nan = Polygon::from_arrays(&[
        [f64::NAN, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ]);
    let not_finite = kernel.loft(&[square(1.0, 0.0), nan]);
    assert!(matches!(not_finite, Err(KernelOpError::InvalidGeometry(_))));
}

#[test]
fn test_cache_reuses_identical_lofts() {
    let kernel = MockKernel::new();
    let mut cache = LoftCache::new();
    let wires = vec![square(1.0, 0.0), square(2.0, 1.0)];

    let first = cache.get_or_loft(&kernel, &wires).unwrap();
    let second = cache.get_or_loft(&kernel, &wires).unwrap();
    assert_eq!(first, second);
    assert_eq!(kernel.loft_calls(), 1);
    assert_eq!((cache.hits(), cache.misses()), (1, 1));
    assert!(cache.contains(&wires));

    let other = vec![square(1.0, 0.0), square(2.5, 1.0)];
    cache.get_or_loft(&kernel, &other).unwrap();
    assert_eq!(kernel.loft_calls(), 2);
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!((cache.hits(), cache.misses()), (0, 0));
    assert!(!cache.contains(&wires));
}

#[test]
fn test_cache_does_not_store_failures() {
    let kernel = MockKernel::new();
    let mut cache: LoftCache<MockSolid> = LoftCache::new();
    let wires = vec![square(1.0, 0.0)];

    assert!(cache.get_or_loft(&kernel, &wires).is_err());
    assert!(cache.get_or_loft(&kernel, &wires).is_err());
    assert_eq!(kernel.loft_calls(), 2);
    assert!(cache.is_empty());
}

#[test]
fn test_loft_key_is_order_sensitive() {
    let a = square(1.0, 0.0);
    let b = square(2.0, 1.0);
    assert_eq!(loft_key(&[a.clone(), b.clone()]), loft_key(&[a.clone(), b.clone()]));
    assert_ne!(loft_key(&[a.clone(), b.clone()]), loft_key(&[b, a]));
}

#[test]
fn test_mock_tessellation_covers_side_walls() {
    let kernel = MockKernel::new();
    let solid = kernel.loft(&[square(1.0, 0.0), square(1.0, 1.0), square(1.0, 2.0)]).unwrap();
    let mesh = kernel.tessellate(&solid).unwrap();
    assert_eq!(mesh.positions.len(), 12);
    assert_eq!(mesh.triangles.len(), 2 * 4 * 2);
    assert_eq!(mesh.face_count(), 2);
    assert!(kernel.export_step(&solid).is_err());
}
