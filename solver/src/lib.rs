extern crate gasviz_core;
extern crate nalgebra as na;
pub mod initializer;
pub mod macro_parameters;
pub mod solver;

#[cfg(test)]
mod tests {
    use crate::initializer::{derive_run, molecule_count, DerivedRun};
    use crate::macro_parameters::{get_average_energy_proxy, get_reference_speed};
    use crate::solver::{PairEnumeration, Simulation};
    use gasviz_core::{Error, Molecule, Rgb, RunParameters, SimulationConfig, World};
    use itertools::Itertools;
    use na::Vector2;

    fn derive(volume: f64, temperature: f64, pressure: f64) -> DerivedRun {
        derive_run(&RunParameters::new(volume, temperature, pressure), 30)
            .expect("Can't derive run")
    }

    fn running_simulation(molecules: Vec<Molecule>) -> Simulation {
        let mut simulation = Simulation::new(SimulationConfig::default())
            .expect("Can't create simulation");
        simulation.world.populate(molecules);
        simulation
    }

    #[test]
    fn ideal_gas_derivation() {
        let run = derive(5.0, 300.0, 1.0);
        assert_eq!(format!("{:.4}", run.moles), "0.2030");
        assert_eq!(run.count, 20);
        assert_eq!(format!("{:.2}", run.initial_speed), "8.66");

        let run = derive(50.0, 300.0, 1.0);
        assert_eq!(format!("{:.4}", run.moles), "2.0300");
        assert_eq!(run.count, 30);

        let run = derive(10.0, 1000.0, 1.0);
        assert_eq!(format!("{:.2}", run.initial_speed), "15.81");
    }

    #[test]
    fn population_cap() {
        assert_eq!(derive(100.0, 100.0, 5.0).count, 30);
        assert_eq!(molecule_count(1e12, 30), 30);
        assert_eq!(molecule_count(f64::INFINITY, 30), 30);
        assert_eq!(molecule_count(0.295, 30), 29);
    }

    #[test]
    fn negative_count_is_clamped() {
        assert_eq!(derive(50.0, 300.0, -1.0).count, 0);
        assert_eq!(derive(-50.0, 300.0, 1.0).count, 0);
        assert_eq!(molecule_count(f64::NAN, 30), 0);
    }

    #[test]
    fn zero_temperature_is_rejected() {
        let res = derive_run(&RunParameters::new(50.0, 0.0, 1.0), 30);
        assert!(matches!(res, Err(Error::InvalidInput { field: "temperature", .. })));
    }

    #[test]
    fn head_on_collision() {
        let v = 2.0;
        let mut simulation = running_simulation(vec![
            Molecule::new(Vector2::new(100.0, 100.0), Vector2::new(v, 0.0), 3.0),
            Molecule::new(Vector2::new(105.99, 100.0), Vector2::new(-v, 0.0), 3.0),
        ]);
        assert_eq!(simulation.resolve_collisions(), 1);
        let a = &simulation.world.molecules[0];
        let b = &simulation.world.molecules[1];
        assert_eq!(a.velocity, Vector2::new(-v, 0.0));
        assert_eq!(b.velocity, Vector2::new(v, 0.0));
        assert!((a.position.x - 99.995).abs() < 1e-9);
        assert!((b.position.x - 105.995).abs() < 1e-9);
        assert_eq!(a.position.y, 100.0);
    }

    #[test]
    fn collisions_conserve_momentum() {
        let mut simulation = Simulation::new(SimulationConfig {
            arena_width: 40.0,
            arena_height: 40.0,
            ..Default::default()
        })
        .expect("Can't create simulation");
        simulation
            .start(&RunParameters::new(100.0, 100.0, 5.0), Some(11))
            .expect("Can't start");
        let momentum = |world: &World| -> Vector2<f64> {
            world.molecules.iter().map(|m| m.velocity).sum()
        };
        for _ in 0..50 {
            let before = momentum(&simulation.world);
            simulation.resolve_collisions();
            let after = momentum(&simulation.world);
            assert!((before - after).norm() < 1e-9);
            simulation.step();
        }
    }

    #[test]
    fn pairs_resolved_in_order() {
        // 0 hits 1 first and hands over its velocity before being checked against 2
        let mut simulation = running_simulation(vec![
            Molecule::new(Vector2::new(100.0, 100.0), Vector2::new(1.0, 0.0), 3.0),
            Molecule::new(Vector2::new(105.0, 100.0), Vector2::new(0.0, 0.0), 3.0),
            Molecule::new(Vector2::new(100.0, 105.0), Vector2::new(0.0, 0.0), 3.0),
        ]);
        simulation.resolve_collisions();
        let velocities: Vec<Vector2<f64>> =
            simulation.world.molecules.iter().map(|m| m.velocity).collect();
        assert_eq!(velocities[1], Vector2::new(1.0, 0.0));
        assert_eq!(velocities[0], Vector2::new(0.0, 0.0));
        // 0 stopped before it was checked against 2, which therefore stays at rest
        assert_eq!(velocities[2], Vector2::new(0.0, 0.0));
    }

    #[test]
    fn wall_bounce_is_periodic() {
        let mut simulation = Simulation::new(SimulationConfig {
            arena_width: 20.0,
            arena_height: 20.0,
            ..Default::default()
        })
        .expect("Can't create simulation");
        simulation.world.populate(vec![
            Molecule::new(Vector2::new(0.0, 7.0), Vector2::new(5.0, 0.0), 3.0),
        ]);
        let mut signs = vec![];
        let mut bounces = 0;
        for _ in 0..8 {
            let stats = simulation.step();
            bounces += stats.wall_bounces;
            signs.push(simulation.world.molecules[0].velocity.x > 0.0);
        }
        assert_eq!(signs, vec![true, true, false, false, true, true, false, false]);
        assert_eq!(bounces, 3);
        assert_eq!(simulation.world.molecules[0].position, Vector2::new(0.0, 7.0));
    }

    #[test]
    fn empty_run_is_safe() {
        let mut simulation = Simulation::new(SimulationConfig::default())
            .expect("Can't create simulation");
        let run = simulation
            .start(&RunParameters::new(50.0, 300.0, 0.0), Some(1))
            .expect("Can't start");
        assert_eq!(run.count, 0);
        assert!(simulation.is_running());
        let stats = simulation.step();
        assert_eq!(stats.molecules, 0);
        assert_eq!(stats.max_speed, 1.0);
        assert_eq!(stats.avg_energy_proxy, 0.0);
        assert_eq!(stats.to_string(), "0.00");
        assert_eq!(get_reference_speed(&simulation.world), 1.0);
        assert_eq!(get_average_energy_proxy(&simulation.world), 0.0);
    }

    #[test]
    fn step_recolors_against_fastest() {
        let mut simulation = running_simulation(vec![
            Molecule::new(Vector2::new(10.0, 10.0), Vector2::new(4.0, 3.0), 3.0),
            Molecule::new(Vector2::new(200.0, 200.0), Vector2::new(0.0, 0.0), 3.0),
        ]);
        let stats = simulation.step();
        assert_eq!(stats.max_speed, 5.0);
        assert_eq!(stats.avg_energy_proxy, 12.5);
        assert_eq!(simulation.world.molecules[0].color, Rgb::RED);
        assert_eq!(simulation.world.molecules[1].color, Rgb::BLUE);
    }

    #[test]
    fn energy_proxy_is_kept_by_frames() {
        for pairs in [PairEnumeration::AllPairs, PairEnumeration::UniformGrid] {
            let mut simulation = Simulation::with_pairs(SimulationConfig::default(), pairs)
                .expect("Can't create simulation");
            let run = simulation
                .start(&RunParameters::new(50.0, 300.0, 1.0), Some(2024))
                .expect("Can't start");
            let expected = run.initial_speed * run.initial_speed;
            let mut last = None;
            for _ in 0..500 {
                last = Some(simulation.step());
            }
            let stats = last.expect("no frames");
            assert_eq!(stats.molecules, 30);
            assert!((stats.avg_energy_proxy - expected).abs() < 1e-6 * expected);
            assert_eq!(stats.to_string(), "75.00");
        }
    }

    #[test]
    fn molecules_stay_near_arena() {
        let mut simulation = Simulation::new(SimulationConfig::default())
            .expect("Can't create simulation");
        simulation
            .start(&RunParameters::new(5.0, 300.0, 1.0), Some(5))
            .expect("Can't start");
        let radius = simulation.config().molecule_radius;
        let (width, height) = (simulation.world.width, simulation.world.height);
        let mut fastest = 0.0f64;
        for _ in 0..1000 {
            fastest = fastest.max(simulation.step().max_speed);
            // a wall never lets a molecule go further than one frame of movement
            // beyond the half-overlap push of a collision
            let slack = fastest + radius;
            for m in &simulation.world.molecules {
                assert!(m.position.x >= -slack && m.position.x <= width - 2.0 * radius + slack);
                assert!(m.position.y >= -slack && m.position.y <= height - 2.0 * radius + slack);
            }
        }
    }

    fn overlapping(a: &Molecule, b: &Molecule) -> bool {
        let distance = (b.position - a.position).norm();
        distance > 0.0 && distance < a.radius + b.radius
    }

    /// Overlapping pairs with no third molecule close enough to be pushed into them.
    fn isolated_contacts(molecules: &[Molecule]) -> Vec<(usize, usize)> {
        let near = |a: &Molecule, b: &Molecule| {
            (b.position - a.position).norm() < 2.0 * (a.radius + b.radius)
        };
        (0..molecules.len())
            .tuple_combinations()
            .filter(|&(i, j)| overlapping(&molecules[i], &molecules[j]))
            .filter(|&(i, j)| {
                (0..molecules.len()).filter(|&k| k != i && k != j).all(|k| {
                    !near(&molecules[i], &molecules[k]) && !near(&molecules[j], &molecules[k])
                })
            })
            .collect()
    }

    #[test]
    fn overlaps_do_not_outlive_a_frame() {
        for pairs in [PairEnumeration::AllPairs, PairEnumeration::UniformGrid] {
            let mut simulation = Simulation::with_pairs(SimulationConfig::default(), pairs)
                .expect("Can't create simulation");
            simulation
                .start(&RunParameters::new(50.0, 300.0, 1.0), Some(17))
                .expect("Can't start");
            let mut checked = 0;
            for _ in 0..500 {
                let contacts = isolated_contacts(&simulation.world.molecules);
                simulation.resolve_collisions();
                for (i, j) in contacts {
                    let a = &simulation.world.molecules[i];
                    let b = &simulation.world.molecules[j];
                    let distance = (b.position - a.position).norm();
                    assert!(distance >= a.radius + b.radius - 1e-9,
                            "pair ({}, {}) still overlaps at {}", i, j, distance);
                    checked += 1;
                }
                simulation.step();
            }
            assert!(checked > 0);
        }
    }

    #[test]
    fn grid_matches_all_pairs_on_chained_contacts() {
        // 0 and 2 only touch after 0 is pushed out of its overlap with 1
        let layout = || vec![
            Molecule::new(Vector2::new(107.9, 100.0), Vector2::new(0.0, 0.0), 3.0),
            Molecule::new(Vector2::new(103.9, 100.0), Vector2::new(1.0, 0.0), 3.0),
            Molecule::new(Vector2::new(114.0, 100.0), Vector2::new(-1.0, 0.0), 3.0),
        ];
        let mut results = vec![];
        for pairs in [PairEnumeration::AllPairs, PairEnumeration::UniformGrid] {
            let mut simulation = Simulation::with_pairs(SimulationConfig::default(), pairs)
                .expect("Can't create simulation");
            simulation.world.populate(layout());
            assert_eq!(simulation.resolve_collisions(), 2);
            results.push(simulation.world.molecules);
        }
        assert_eq!(results[0], results[1]);
        let molecules = &results[1];
        assert_eq!(molecules[0].velocity, Vector2::new(-1.0, 0.0));
        assert_eq!(molecules[1].velocity, Vector2::new(0.0, 0.0));
        assert_eq!(molecules[2].velocity, Vector2::new(1.0, 0.0));
        assert!((molecules[0].position.x - 108.2).abs() < 1e-9);
        assert!((molecules[1].position.x - 103.4).abs() < 1e-9);
        assert!((molecules[2].position.x - 114.2).abs() < 1e-9);
        assert!(!overlapping(&molecules[0], &molecules[2]));
    }

    #[test]
    fn invalid_start_keeps_previous_run() {
        let mut simulation = Simulation::new(SimulationConfig::default())
            .expect("Can't create simulation");
        simulation
            .start(&RunParameters::new(50.0, 300.0, 1.0), Some(3))
            .expect("Can't start");
        simulation.step();
        let before = simulation.world.molecules.clone();
        let res = simulation.start(&RunParameters::new(50.0, 0.0, 1.0), Some(3));
        assert!(res.is_err());
        assert_eq!(simulation.world.molecules, before);
        assert_eq!(simulation.frame(), 1);
    }

    #[test]
    fn restart_replaces_population() {
        let mut simulation = Simulation::new(SimulationConfig::default())
            .expect("Can't create simulation");
        simulation
            .start(&RunParameters::new(50.0, 300.0, 1.0), Some(3))
            .expect("Can't start");
        for _ in 0..10 {
            simulation.step();
        }
        let run = simulation
            .start(&RunParameters::new(5.0, 1000.0, 1.0), Some(4))
            .expect("Can't restart");
        assert_eq!(simulation.frame(), 0);
        assert_eq!(simulation.world.len(), run.count);
        for m in &simulation.world.molecules {
            assert!((m.speed() - run.initial_speed).abs() < 1e-9);
            assert!(m.is_inside(400.0, 400.0));
            assert_eq!(m.position.x.fract(), 0.0);
            assert_eq!(m.color, Rgb::BLUE);
        }
    }

    #[test]
    fn seeded_runs_repeat() {
        let run = || {
            let mut simulation = Simulation::new(SimulationConfig::default())
                .expect("Can't create simulation");
            simulation
                .start(&RunParameters::new(80.0, 700.0, 2.0), Some(99))
                .expect("Can't start");
            for _ in 0..100 {
                simulation.step();
            }
            simulation.world.molecules
        };
        assert_eq!(run(), run());
    }
}
