//! Behavior Simulator
//!
//! One simulator instance owns all run state: the drive vector, the value
//! table, the behavior tally, the bounded clock, the seeded RNG, and the
//! append-only snapshot log. Each tick it selects a behavior epsilon-
//! greedily, computes a reward, applies the single-step value update,
//! drifts and relieves the drives, and records a normalized snapshot.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use ethogram_events::{
    generate_run_id, ParamsSnapshot, RunReport, RunSummary, SimClock, SimTimestamp, TickSnapshot,
};

use crate::behavior::{Behavior, Drive};
use crate::config::{ConfigError, RewardMode, SimConfig};
use crate::drives::{BehaviorTally, DriveVector};
use crate::reward::{self, RewardStrategy};
use crate::values::{BehaviorValues, DriveValues, ValueModel};

/// A single-organism behavior simulation over a bounded horizon.
pub struct Simulator {
    config: SimConfig,
    seed: u64,
    rng: SmallRng,
    drives: DriveVector,
    values: ValueModel,
    reward: Box<dyn RewardStrategy>,
    tally: BehaviorTally,
    clock: SimClock,
    log: Vec<TickSnapshot>,
    ticks_run: u64,
}

impl Simulator {
    /// Builds a simulator from a validated configuration and a seed.
    ///
    /// Drive levels are initialized uniformly at random; the value table is
    /// zeroed for the drive-linked variant and randomized for the
    /// ranged-random variant. Fails fast on any out-of-range tunable.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(seed);
        let drives = DriveVector::random(&mut rng);
        let values = match config.reward.mode {
            RewardMode::DriveLinked => ValueModel::Behavior(BehaviorValues::zeroed()),
            RewardMode::RangedRandom => ValueModel::Drive(DriveValues::random(
                &mut rng,
                (config.reward.range_min, config.reward.range_max),
            )),
        };
        let reward = reward::for_mode(config.reward.mode);
        let clock = SimClock::new(config.schedule.horizon_hours, config.schedule.tick_hours);

        Ok(Self {
            config,
            seed,
            rng,
            drives,
            values,
            reward,
            tally: BehaviorTally::new(),
            clock,
            log: Vec::new(),
            ticks_run: 0,
        })
    }

    /// Replaces the drive levels, for runs from fixed initial conditions.
    pub fn set_drive_levels(&mut self, levels: [f32; Drive::COUNT]) {
        self.drives = DriveVector::new(levels);
    }

    /// Selects the next behavior epsilon-greedily.
    ///
    /// One uniform roll is drawn unconditionally, so the RNG consumption per
    /// tick is fixed regardless of epsilon.
    pub fn select_behavior(&mut self) -> Behavior {
        let roll: f32 = self.rng.gen();
        if roll < self.config.params.epsilon {
            let index = self.rng.gen_range(0..Behavior::ALL.len());
            Behavior::ALL[index]
        } else {
            self.values.greedy()
        }
    }

    /// Drifts every drive upward, relieves the chosen behavior's drive, and
    /// clamps everything back into [0,1], in that order.
    fn advance_drives(&mut self, chosen: Behavior) {
        let ranges = self.config.drives;
        self.drives
            .drift(&mut self.rng, ranges.drift_min, ranges.drift_max);
        self.drives.relieve(
            chosen.drive(),
            &mut self.rng,
            ranges.relief_min,
            ranges.relief_max,
        );
        self.drives.clamp_unit();
    }

    /// Runs one simulation step and appends its snapshot to the log.
    ///
    /// Order: select, reward, value update, drive update, tally, snapshot.
    /// The clock is not advanced here; the loop does that between ticks.
    pub fn tick(&mut self) -> TickSnapshot {
        let behavior = self.select_behavior();
        let reward = self
            .reward
            .reward(behavior, &self.drives, &self.values, &mut self.rng);
        self.values.update(
            behavior,
            reward,
            self.config.params.alpha,
            self.config.params.gamma,
        );
        self.advance_drives(behavior);
        self.tally.record(behavior);

        let snapshot = TickSnapshot {
            timestamp: SimTimestamp::new(self.ticks_run, self.clock.current),
            drives: self.drives.normalized(),
            behaviors: self.tally.normalized(),
        };
        self.log.push(snapshot);
        self.ticks_run += 1;

        debug!(
            tick = snapshot.timestamp.tick,
            time = %snapshot.timestamp.time,
            behavior = %behavior,
            reward,
            "tick complete"
        );
        snapshot
    }

    /// Advances the clock by one increment.
    pub fn advance_clock(&mut self) {
        self.clock.advance();
    }

    /// Runs ticks until the clock passes its inclusive end, then reports.
    pub fn run(&mut self) -> RunReport {
        while self.clock.in_horizon() {
            self.tick();
            self.clock.advance();
            if self.ticks_run % 100 == 0 {
                debug!(ticks = self.ticks_run, "progress");
            }
        }
        info!(
            ticks = self.ticks_run,
            mode = self.config.reward.mode.as_str(),
            "run complete"
        );
        self.report()
    }

    /// Builds the report for the run so far: summary plus the full series.
    pub fn report(&self) -> RunReport {
        RunReport {
            summary: RunSummary {
                run_id: generate_run_id(self.seed),
                seed: self.seed,
                reward_mode: self.config.reward.mode.as_str().to_string(),
                params: self.params(),
                ticks_run: self.ticks_run,
                final_drives: ethogram_events::DriveLevels {
                    hunger: self.drives.get(Drive::Hunger),
                    boredom: self.drives.get(Drive::Boredom),
                    loneliness: self.drives.get(Drive::Loneliness),
                    tiredness: self.drives.get(Drive::Tiredness),
                },
                final_estimates: self.values.estimates(),
            },
            series: self.log.clone(),
        }
    }

    /// The run's tunable parameters, for annotation downstream.
    pub fn params(&self) -> ParamsSnapshot {
        ParamsSnapshot {
            alpha: self.config.params.alpha,
            gamma: self.config.params.gamma,
            epsilon: self.config.params.epsilon,
        }
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn drive_levels(&self) -> [f32; Drive::COUNT] {
        self.drives.levels()
    }

    pub fn values(&self) -> &ValueModel {
        &self.values
    }

    pub fn tally(&self) -> &BehaviorTally {
        &self.tally
    }

    pub fn snapshots(&self) -> &[TickSnapshot] {
        &self.log
    }

    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }
}
