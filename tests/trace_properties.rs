use approx::assert_relative_eq;
use glam::IVec2;

use grid_tracer::{GridExtent, GridTracer, Vector2, trace};

/// Small xorshift generator so the sweep is reproducible without extra crates.
struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }

    fn below(&mut self, n: u32) -> u32 {
        (self.next_u64() % n as u64) as u32
    }
}

fn on_grid_line(p: Vector2) -> bool {
    (p.x - p.x.round()).abs() < 1e-9 || (p.y - p.y.round()).abs() < 1e-9
}

fn random_point(rng: &mut Rng, extent: &GridExtent) -> Vector2 {
    let p = Vector2::new(
        rng.range(-3.0, extent.columns() as f64 + 3.0),
        rng.range(-3.0, extent.rows() as f64 + 3.0),
    );
    // Bias some samples onto lines and corners, where snapping matters most.
    match rng.below(4) {
        0 => Vector2::new(p.x.round(), p.y.round()),
        1 => Vector2::new((p.x * 2.0).round() / 2.0, p.y),
        _ => p,
    }
}

#[test]
fn random_rays_satisfy_traversal_invariants() {
    let mut rng = Rng(0x9e37_79b9_7f4a_7c15);

    for _ in 0..20_000 {
        let extent = GridExtent::new(1 + rng.below(24), 1 + rng.below(24)).unwrap();
        let origin = random_point(&mut rng, &extent);
        let mut aim = random_point(&mut rng, &extent);
        match rng.below(8) {
            0 => aim.x = origin.x,
            1 => aim.y = origin.y,
            _ => {}
        }
        if aim == origin {
            continue;
        }

        let trace = trace(origin, aim, extent)
            .unwrap_or_else(|err| panic!("{origin:?} -> {aim:?} on {extent:?}: {err}"));
        let steps = trace.steps();

        assert!(steps.len() <= extent.max_steps() + 1);
        assert_eq!(steps[0].point, aim);

        for step in &steps[1..] {
            assert!(on_grid_line(step.point), "{:?} is off the grid lines", step.point);
        }

        for pair in steps.windows(2) {
            assert!(
                pair[1].distance > pair[0].distance,
                "{origin:?} -> {aim:?}: distance did not increase at {:?}",
                pair[1].point
            );
        }

        let (exit, inside) = steps.split_last().unwrap();
        assert!(!extent.contains(exit.cell));
        for step in inside {
            assert!(extent.contains(step.cell));
        }
    }
}

#[test]
fn reference_diagonal_leaves_through_right_edge() {
    let extent = GridExtent::square(10).unwrap();
    let trace = trace(Vector2::new(4.4, 3.3), Vector2::new(5.0, 4.0), extent).unwrap();
    let points: Vec<_> = trace.points().collect();

    // The aim point is a corner; the next crossing is the horizontal line y = 5.
    assert_eq!(points[0], Vector2::new(5.0, 4.0));
    assert_eq!(points[1].y, 5.0);
    assert!(points[1].x > 5.0 && points[1].x < 6.0);

    let exit = trace.last().unwrap();
    assert_eq!(exit.cell.x, 10);
    assert_relative_eq!(exit.point.y, 3.3 + 0.7 * (5.6 / 0.6), epsilon = 1e-9);

    let cells: Vec<_> = trace.cells().collect();
    assert_eq!(cells.first(), Some(&IVec2::new(5, 4)));
    for pair in cells.windows(2) {
        let delta = pair[1] - pair[0];
        assert!(delta.x >= 0 && delta.y >= 0 && delta != IVec2::ZERO);
    }
}

#[test]
fn horizontal_ray_advances_one_column_per_step() {
    let extent = GridExtent::square(10).unwrap();
    let points = trace(Vector2::new(2.0, 5.0), Vector2::new(3.0, 5.0), extent)
        .unwrap()
        .into_points();

    assert_eq!(points.len(), 8);
    for (i, p) in points.iter().enumerate() {
        assert_eq!(*p, Vector2::new(3.0 + i as f64, 5.0));
    }
    assert_eq!(points.last(), Some(&Vector2::new(10.0, 5.0)));
}

#[test]
fn vertical_ray_advances_one_row_per_step() {
    let extent = GridExtent::square(10).unwrap();
    let points = trace(Vector2::new(2.5, 1.0), Vector2::new(2.5, 2.0), extent)
        .unwrap()
        .into_points();

    assert_eq!(points.len(), 9);
    for (i, p) in points.iter().enumerate() {
        assert_eq!(*p, Vector2::new(2.5, 2.0 + i as f64));
    }
}

#[test]
fn aim_outside_grid_stops_immediately() {
    let extent = GridExtent::square(10).unwrap();
    let trace = trace(Vector2::new(1.0, 1.0), Vector2::new(-5.0, -5.0), extent).unwrap();
    assert_eq!(trace.into_points(), vec![Vector2::new(-5.0, -5.0)]);
}

#[test]
fn origin_outside_grid_still_traces_from_aim() {
    let extent = GridExtent::new(4, 4).unwrap();
    let points = trace(Vector2::new(-2.0, 0.5), Vector2::new(0.5, 0.5), extent)
        .unwrap()
        .into_points();
    assert_eq!(
        points,
        vec![
            Vector2::new(0.5, 0.5),
            Vector2::new(1.0, 0.5),
            Vector2::new(2.0, 0.5),
            Vector2::new(3.0, 0.5),
            Vector2::new(4.0, 0.5),
        ]
    );
}

#[test]
fn smaller_epsilon_gives_same_walk_on_clean_input() {
    let extent = GridExtent::square(10).unwrap();
    let origin = Vector2::new(0.25, 0.75);
    let aim = Vector2::new(1.0, 2.0);

    let coarse = GridTracer::new(extent).trace(origin, aim).unwrap();
    let fine = GridTracer::new(extent)
        .with_epsilon(1e-6)
        .unwrap()
        .trace(origin, aim)
        .unwrap();

    assert_eq!(coarse.len(), fine.len());
    for (a, b) in coarse.points().zip(fine.points()) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    }
}
