//! Unit tests for city-traffic.

use city_core::{Cell, Direction, SimRng, SimSpeed, TickContext, TrafficConfig};
use city_grid::{CellType, Grid};

use crate::vehicle::round_half_up;
use crate::{Edge, TrafficSimulator, Vehicle};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 40×40 grid with a major road along z = 20.
fn road_row_grid() -> Grid {
    let mut g = Grid::new(40, 40);
    for x in 0..40 {
        g.set(x, 20, CellType::RoadMajor);
    }
    g
}

/// Minor road around the whole border.
fn ring_road_grid(size: usize) -> Grid {
    let mut g = Grid::new(size, size);
    let last = size as i32 - 1;
    for i in 0..size as i32 {
        g.set(i, 0, CellType::RoadMinor);
        g.set(i, last, CellType::RoadMinor);
        g.set(0, i, CellType::RoadMinor);
        g.set(last, i, CellType::RoadMinor);
    }
    g
}

fn normal(delta_ms: f64) -> TickContext {
    TickContext::new(delta_ms, SimSpeed::Normal)
}

/// Simulator whose spawn timer never fires during a test.
fn quiet() -> TrafficSimulator {
    TrafficSimulator::new(TrafficConfig { spawn_interval_ms: f64::MAX, ..TrafficConfig::default() })
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vehicle {
    use super::*;
    use city_core::VehicleId;

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.51), -1);
    }

    #[test]
    fn new_vehicle_sits_on_cell_centre() {
        let v = Vehicle::new(VehicleId(3), Cell::new(4, 7), Direction::North);
        assert_eq!(v.cell(), Cell::new(4, 7));
        assert_eq!(v.rounded_cell(), v.cell());
        assert_eq!((v.exact_x, v.exact_z), (4.0, 7.0));
        assert_eq!(v.spawn, Cell::new(4, 7));
    }

    #[test]
    fn advance_follows_heading() {
        let mut v = Vehicle::new(VehicleId(0), Cell::new(5, 5), Direction::West);
        v.advance(0.25);
        assert_eq!((v.exact_x, v.exact_z), (4.75, 5.0));
        assert_eq!(v.rounded_cell(), Cell::new(5, 5));
    }

    #[test]
    fn lane_offset_is_right_of_heading() {
        let v = Vehicle::new(VehicleId(0), Cell::new(0, 0), Direction::East);
        assert_eq!(v.lane_position(0.2), (0.0, 0.2));
        let v = Vehicle::new(VehicleId(0), Cell::new(0, 0), Direction::South);
        assert_eq!(v.lane_position(0.2), (-0.2, 0.0));
        assert_eq!(v.heading_radians(), 0.0);
    }
}

// ── Edges ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod edges {
    use super::*;

    #[test]
    fn edges_face_inward() {
        let g = Grid::new(10, 6);
        for edge in Edge::ALL {
            let cell = edge.cell(&g, 2);
            let inside = cell.step(edge.inward());
            assert!(g.contains(cell.x, cell.z), "{edge:?} cell off-grid");
            assert!(g.contains(inside.x, inside.z), "{edge:?} heads outward");
        }
        assert_eq!(Edge::Bottom.cell(&g, 3), Cell::new(3, 5));
        assert_eq!(Edge::Right.cell(&g, 3), Cell::new(9, 3));
        assert_eq!(Edge::Top.span(&g), 10);
        assert_eq!(Edge::Left.span(&g), 6);
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use super::*;

    #[test]
    fn straight_road_despawns_after_twenty_seconds() {
        let g = road_row_grid();
        let mut sim = TrafficSimulator::default();
        let mut rng = SimRng::new(1);
        let id = sim.spawn_at(Cell::new(0, 20), Direction::East).unwrap();

        for step in 1..40 {
            sim.tick(&g, &normal(500.0), &mut rng);
            let v = sim.get(id).expect("still on the road");
            assert_eq!(v.cell(), Cell::new(step, 20));
            assert_eq!(v.dir, Direction::East);
        }
        sim.tick(&g, &normal(500.0), &mut rng);
        assert!(sim.get(id).is_none(), "should exit at x = 40");
    }

    #[test]
    fn leaving_the_road_despawns() {
        let mut g = Grid::new(10, 10);
        for x in 0..3 {
            g.set(x, 5, CellType::RoadMajor);
        }
        let mut sim = quiet();
        let mut rng = SimRng::new(2);
        let id = sim.spawn_at(Cell::new(2, 5), Direction::East).unwrap();

        let report = sim.tick(&g, &normal(500.0), &mut rng);
        assert_eq!(report.despawned, 1);
        assert!(sim.get(id).is_none());
        assert!(sim.is_empty());
    }

    #[test]
    fn dead_end_reverses() {
        let mut g = Grid::new(20, 20);
        for x in 5..=7 {
            g.set(x, 5, CellType::RoadMinor);
        }
        let mut sim = quiet();
        let mut rng = SimRng::new(3);
        let id = sim.spawn_at(Cell::new(5, 5), Direction::East).unwrap();

        sim.tick(&g, &normal(500.0), &mut rng);
        sim.tick(&g, &normal(500.0), &mut rng);
        let v = sim.get(id).unwrap();
        assert_eq!(v.cell(), Cell::new(7, 5));
        assert_eq!(v.dir, Direction::West);

        for _ in 0..50 {
            sim.tick(&g, &normal(500.0), &mut rng);
            let v = sim.get(id).expect("bouncing vehicle never leaves");
            assert!((5..=7).contains(&v.grid_x));
            assert_eq!(v.grid_z, 5);
        }
    }

    #[test]
    fn turns_only_onto_roads() {
        // Plus-shaped junction at (5, 5).
        let mut g = Grid::new(11, 11);
        for i in 0..11 {
            g.set(i, 5, CellType::RoadMajor);
            g.set(5, i, CellType::RoadMajor);
        }
        let mut rng = SimRng::new(4);
        let mut seen = Vec::new();
        for _ in 0..40 {
            let mut sim = quiet();
            let id = sim.spawn_at(Cell::new(4, 5), Direction::East).unwrap();
            sim.tick(&g, &normal(500.0), &mut rng);
            let v = sim.get(id).unwrap();
            assert_eq!(v.cell(), Cell::new(5, 5));
            assert_ne!(v.dir, Direction::West, "never turns back with options");
            assert_eq!((v.exact_x, v.exact_z), (5.0, 5.0));
            if !seen.contains(&v.dir) {
                seen.push(v.dir);
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn speed_multiplier_scales_distance() {
        let g = road_row_grid();
        let mut sim = quiet();
        let mut rng = SimRng::new(5);
        let id = sim.spawn_at(Cell::new(0, 20), Direction::East).unwrap();

        sim.tick(&g, &TickContext::new(250.0, SimSpeed::Fast), &mut rng);
        assert_eq!(sim.get(id).unwrap().cell(), Cell::new(1, 20));

        // Two cells in one frame: the crossing check sees only the landing cell.
        sim.tick(&g, &TickContext::new(100.0, SimSpeed::Hyper), &mut rng);
        assert_eq!(sim.get(id).unwrap().cell(), Cell::new(3, 20));
    }

    #[test]
    fn paused_is_fully_inert() {
        let g = ring_road_grid(10);
        let mut sim = TrafficSimulator::default();
        let mut rng = SimRng::new(6);
        let id = sim.spawn_at(Cell::new(0, 3), Direction::South).unwrap();
        let before = sim.get(id).cloned();

        for _ in 0..20 {
            let report = sim.tick(&g, &TickContext::new(5_000.0, SimSpeed::Paused), &mut rng);
            assert_eq!(report.spawned + report.despawned, 0);
        }
        assert_eq!(sim.get(id).cloned(), before);
        assert_eq!(sim.len(), 1);
        assert_eq!(sim.spawn_timer_ms(), 0.0);
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawning {
    use super::*;

    #[test]
    fn spawn_fires_once_per_interval() {
        let g = ring_road_grid(10);
        let mut sim = TrafficSimulator::default();
        let mut rng = SimRng::new(8);

        assert_eq!(sim.tick(&g, &normal(999.0), &mut rng).spawned, 0);
        // Landing exactly on the interval is not enough.
        assert_eq!(sim.tick(&g, &normal(1.0), &mut rng).spawned, 0);
        assert_eq!(sim.spawn_timer_ms(), 1_000.0);
        assert_eq!(sim.tick(&g, &normal(1.0), &mut rng).spawned, 1);
        assert_eq!(sim.spawn_timer_ms(), 0.0);

        let v = &sim.vehicles()[0];
        let on_edge = v.grid_x == 0 || v.grid_z == 0 || v.grid_x == 9 || v.grid_z == 9;
        assert!(on_edge);
        assert!(g.is_road(v.grid_x, v.grid_z));
    }

    #[test]
    fn no_edge_roads_means_no_spawns() {
        let mut g = Grid::new(10, 10);
        g.set(5, 5, CellType::RoadMajor);
        let mut sim = TrafficSimulator::default();
        let mut rng = SimRng::new(9);
        for _ in 0..100 {
            assert!(sim.try_spawn_from_edge(&g, &mut rng).is_none());
        }
        assert!(sim.is_empty());
    }

    #[test]
    fn cap_is_enforced() {
        let g = ring_road_grid(10);
        let mut sim = TrafficSimulator::new(TrafficConfig { max_vehicles: 3, ..TrafficConfig::default() });
        let mut rng = SimRng::new(10);

        for _ in 0..3 {
            assert!(sim.spawn_at(Cell::new(0, 0), Direction::East).is_some());
        }
        assert!(sim.is_full());
        assert!(sim.spawn_at(Cell::new(0, 0), Direction::East).is_none());
        assert!(sim.try_spawn_from_edge(&g, &mut rng).is_none());
    }

    #[test]
    fn pool_stays_bounded_over_long_runs() {
        let g = ring_road_grid(20);
        let mut sim = TrafficSimulator::default();
        let mut rng = SimRng::new(11);
        for _ in 0..2_000 {
            sim.tick(&g, &TickContext::new(100.0, SimSpeed::Hyper), &mut rng);
            assert!(sim.len() <= 50);
        }
    }

    #[test]
    fn ids_are_never_reused() {
        let mut sim = quiet();
        let a = sim.spawn_at(Cell::new(0, 0), Direction::East).unwrap();
        sim.clear();
        let b = sim.spawn_at(Cell::new(0, 0), Direction::East).unwrap();
        assert_ne!(a, b);
    }
}
