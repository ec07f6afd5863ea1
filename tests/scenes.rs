use glamx::Vec3;
use kiss3d_scenes::bounding::Ray;
use kiss3d_scenes::camera::{CameraMode, CameraRig};
use kiss3d_scenes::picking::PickPolicy;
use kiss3d_scenes::scenes::{CubeGrid, CubeGridConfig, ShapeViewer, ShapeViewerConfig, PALETTE};
use kiss3d_scenes::shape::Shape;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn grid(policy: PickPolicy) -> CubeGrid {
    let config = CubeGridConfig::default().with_pick_policy(policy);
    CubeGrid::new(config, &mut StdRng::seed_from_u64(42))
}

#[test]
fn default_grid_layout() {
    let grid = grid(PickPolicy::LastHit);
    let cubes = grid.cubes();

    assert_eq!(cubes.len(), 125);
    assert_eq!(cubes[0].position(), Vec3::ZERO);
    // z varies fastest, then x, then y.
    assert_eq!(cubes[1].position(), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(cubes[5].position(), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(cubes[25].position(), Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(cubes[124].position(), Vec3::new(4.0, 4.0, 4.0));

    for cube in cubes {
        assert_eq!(cube.size(), Vec3::ONE);
        assert!(PALETTE.contains(&cube.color()));
    }
}

#[test]
fn huge_grids_do_not_overflow_the_cube_count() {
    let config = CubeGridConfig::default().with_grid(70_000, 0);
    assert_eq!(config.cube_count(), 0);
    let grid = CubeGrid::new(config, &mut StdRng::seed_from_u64(7));
    assert!(grid.cubes().is_empty());

    #[cfg(target_pointer_width = "64")]
    assert_eq!(
        CubeGridConfig::default().with_grid(70_000, 1).cube_count(),
        4_900_000_000
    );

    let config = CubeGridConfig::default().with_grid(u32::MAX, u32::MAX);
    assert_eq!(config.cube_count(), usize::MAX);

    let config = CubeGridConfig::default().with_grid(3, 2);
    assert_eq!(config.cube_count(), 18);
    assert_eq!(CubeGrid::new(config, &mut StdRng::seed_from_u64(7)).cubes().len(), 18);
}

#[test]
fn grid_colors_depend_only_on_the_seed() {
    let a = grid(PickPolicy::LastHit);
    let b = grid(PickPolicy::Nearest);

    let colors_a: Vec<_> = a.cubes().iter().map(|c| c.color()).collect();
    let colors_b: Vec<_> = b.cubes().iter().map(|c| c.color()).collect();
    assert_eq!(colors_a, colors_b);
}

#[test]
fn grid_camera_looks_at_the_grid_center() {
    let config = CubeGridConfig::default().with_grid(6, 4);
    let rig = config.camera();

    assert_eq!(rig.position, Vec3::new(-10.0, 15.0, -10.0));
    assert_eq!(rig.target, Vec3::new(3.0, 2.0, 3.0));
    assert_eq!(rig.up, Vec3::Y);
    assert_eq!(rig.fovy, 45.0);
    assert_eq!(rig.mode, CameraMode::Orbital);
}

/// A ray going down the column of cubes at x = 2, z = 2.
fn column_ray() -> (Ray, Vec3) {
    let eye = Vec3::new(2.0, 20.0, 2.0);
    (Ray::new(eye, -Vec3::Y), eye)
}

#[test]
fn nearest_click_removes_the_top_of_the_column() {
    let mut grid = grid(PickPolicy::Nearest);
    let (ray, eye) = column_ray();

    let removed = grid.click(&ray, eye).unwrap();
    assert_eq!(removed.position(), Vec3::new(2.0, 4.0, 2.0));
    assert_eq!(grid.cubes().len(), 124);

    let removed = grid.click(&ray, eye).unwrap();
    assert_eq!(removed.position(), Vec3::new(2.0, 3.0, 2.0));
    assert_eq!(grid.cubes().len(), 123);
}

#[test]
fn last_hit_click_removes_the_last_cube_in_grid_order() {
    let mut grid = grid(PickPolicy::LastHit);
    let (ray, eye) = column_ray();

    // Layers are stored bottom-up, so the top cube comes last.
    let removed = grid.click(&ray, eye).unwrap();
    assert_eq!(removed.position(), Vec3::new(2.0, 4.0, 2.0));

    // Seen from below, the same policy removes the far top cube first.
    let below = Vec3::new(2.0, -20.0, 2.0);
    let removed = grid.click(&Ray::new(below, Vec3::Y), below).unwrap();
    assert_eq!(removed.position(), Vec3::new(2.0, 3.0, 2.0));
    assert_eq!(grid.cubes().len(), 123);
}

#[test]
fn missed_click_removes_nothing() {
    let mut grid = grid(PickPolicy::Nearest);
    let eye = Vec3::new(20.0, 20.0, 20.0);

    assert!(grid.click(&Ray::new(eye, Vec3::ONE), eye).is_none());
    assert_eq!(grid.cubes().len(), 125);
}

#[test]
fn viewer_highlights_exactly_the_hit_shapes() {
    let config = ShapeViewerConfig {
        shapes: vec![
            (
                Vec3::new(-2.0, 0.0, 0.0),
                Shape::Cuboid {
                    extents: Vec3::ONE,
                },
                kiss3d::color::BLUE,
            ),
            (
                Vec3::new(2.0, 0.0, 0.0),
                Shape::Cylinder {
                    radius: 0.5,
                    height: 1.0,
                },
                kiss3d::color::GREEN,
            ),
        ],
        ..ShapeViewerConfig::default()
    };
    let highlight = config.highlight;
    let mut viewer = ShapeViewer::new(config);

    let at_cylinder = Ray::new(Vec3::new(2.0, 0.0, 10.0), -Vec3::Z);
    assert_eq!(viewer.highlight(Some(&at_cylinder)), vec![1]);
    assert!(!viewer.is_highlighted(0));
    assert!(viewer.is_highlighted(1));
    assert_eq!(viewer.entities()[1].color(), highlight);

    let along_x = Ray::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::X);
    assert_eq!(viewer.highlight(Some(&along_x)), vec![0, 1]);

    assert!(viewer.highlight(None).is_empty());
    assert!(!viewer.is_highlighted(1));
    assert_eq!(viewer.entities()[0].color(), kiss3d::color::BLUE);
    assert_eq!(viewer.entities()[1].color(), kiss3d::color::GREEN);
}

#[test]
fn camera_rig_keeps_the_requested_target() {
    let rig = CameraRig::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0))
        .with_fovy(60.0)
        .with_mode(CameraMode::FirstPerson);

    assert_eq!(rig.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(rig.target, Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(rig.fovy, 60.0);
    assert_eq!(rig.mode, CameraMode::FirstPerson);
}
