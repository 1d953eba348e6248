use std::collections::HashSet;
use itertools::Itertools;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use gasviz_core::{Contact, FrameStats, Result, RunParameters, SimulationConfig, World};
use crate::initializer::{derive_run, initialize_molecules, DerivedRun};
use crate::macro_parameters::{average_energy_proxy, get_reference_speed, get_total_energy_proxy};
use crate::solver::PairEnumeration;

/// Owns the world of a run and advances it one frame at a time.
pub struct Simulation {
    pub world: World,
    config: SimulationConfig,
    pairs: PairEnumeration,
    frame: u64,
}

impl Simulation {
    /// Idle simulation with an empty arena sized by `config`.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Simulation::with_pairs(config, PairEnumeration::AllPairs)
    }

    pub fn with_pairs(config: SimulationConfig, pairs: PairEnumeration) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            world: World::from_config(&config),
            config,
            pairs,
            frame: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.world.is_running()
    }

    /// Number of frames stepped since the last start.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Start a new run, seeded for reproducibility or from OS entropy.
    pub fn start(&mut self, params: &RunParameters, seed: Option<u64>) -> Result<DerivedRun> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.start_with_rng(params, &mut rng)
    }

    /// Derive the population from `params` and replace the current one with it.
    ///
    /// Invalid parameters leave the simulation exactly as it was. A derived count of
    /// zero still starts a run, just with nobody in it.
    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, params: &RunParameters,
                                           rng: &mut R) -> Result<DerivedRun> {
        let run = derive_run(params, self.config.max_molecules)?;
        let molecules = initialize_molecules(rng, run.count, run.initial_speed, &self.config);
        self.world.populate(molecules);
        self.frame = 0;
        if run.count == 0 {
            warn!("Derived molecule count is zero (moles = {:.4}), running empty", run.moles);
        }
        info!("Started run: {} molecules, initial speed {:.2}, moles {:.4}",
              run.count, run.initial_speed, run.moles);
        Ok(run)
    }

    /// Resolve overlapping pairs in `(0,1), (0,2), .., (n-2,n-1)` order. Each pair sees
    /// the positions and velocities left by the pairs before it.
    ///
    /// With [PairEnumeration::UniformGrid] the candidates come from positions at the
    /// start of the frame, so a molecule displaced by an earlier correction is checked
    /// against every later partner. The outcome is the same as with all pairs.
    ///
    /// Returns number of pairs that exchanged momentum.
    pub fn resolve_collisions(&mut self) -> usize {
        let count = self.world.len();
        let candidates: Option<HashSet<(usize, usize)>> = match self.pairs {
            PairEnumeration::AllPairs => None,
            PairEnumeration::UniformGrid => {
                Some(self.pairs.candidate_pairs(&self.world.molecules).into_iter().collect())
            }
        };
        let mut displaced = vec![false; count];
        let mut resolved = 0;
        for (i, j) in (0..count).tuple_combinations() {
            if let Some(candidates) = candidates.as_ref() {
                if !displaced[i] && !displaced[j] && !candidates.contains(&(i, j)) {
                    continue;
                }
            }
            let (head, tail) = self.world.molecules.split_at_mut(j);
            match head[i].check_collision(&mut tail[0]) {
                Contact::Apart => {}
                contact => {
                    displaced[i] = true;
                    displaced[j] = true;
                    if contact == Contact::Resolved {
                        resolved += 1;
                    }
                }
            }
        }
        resolved
    }

    /// Advance one frame: collisions, then movement and recoloring, then statistics.
    pub fn step(&mut self) -> FrameStats {
        let collisions = self.resolve_collisions();
        let max_speed = get_reference_speed(&self.world);
        let (width, height) = (self.world.width, self.world.height);
        let mut wall_bounces = 0;
        for molecule in &mut self.world.molecules {
            wall_bounces += molecule.move_within(width, height);
            molecule.recolor(max_speed);
        }
        let total_energy_proxy = get_total_energy_proxy(&self.world);
        self.frame += 1;
        let stats = FrameStats {
            frame: self.frame,
            molecules: self.world.len(),
            max_speed,
            total_energy_proxy,
            avg_energy_proxy: average_energy_proxy(total_energy_proxy, self.world.len()),
            collisions,
            wall_bounces,
        };
        debug!("frame {}: avg energy {}, {} collisions, {} wall bounces",
               stats.frame, stats, stats.collisions, stats.wall_bounces);
        stats
    }
}
