//! Fluent builder for constructing a [`Simulation`].

use lift_core::SimConfig;
use lift_fleet::{Dispatcher, NearestIdle};
use lift_schedule::{Pacer, VirtualPacer};

use crate::{LiftHooks, NoopHooks, SimResult, Simulation};

/// Fluent builder for [`Simulation<D>`].
///
/// # Required inputs
///
/// - number of floors and number of lifts (both at least 1)
///
/// # Optional inputs (have defaults)
///
/// | Method                          | Default             |
/// |---------------------------------|---------------------|
/// | `.lift_speed_per_floor_ms(ms)`  | 2000                |
/// | `.door_open_ms(ms)`             | 2500                |
/// | `.door_close_ms(ms)`            | 2500                |
/// | `.loop_interval_ms(ms)`         | 100                 |
/// | `.hooks(h)`                     | `NoopHooks`         |
/// | `.pacer(p)`                     | `VirtualPacer`      |
/// | `.dispatcher(d)`                | `NearestIdle`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(10, 3)
///     .lift_speed_per_floor_ms(1_000)
///     .hooks(renderer)
///     .build()?;
/// sim.call_lift(7)?;
/// sim.run_until_settled();
/// ```
pub struct SimBuilder<D: Dispatcher = NearestIdle> {
    config:     SimConfig,
    hooks:      Option<Box<dyn LiftHooks>>,
    pacer:      Option<Box<dyn Pacer>>,
    dispatcher: D,
}

impl SimBuilder<NearestIdle> {
    /// Start from a building shape and default timings.
    pub fn new(number_of_floors: u32, number_of_lifts: u32) -> Self {
        Self::from_config(SimConfig::new(number_of_floors, number_of_lifts))
    }

    /// Start from a complete configuration (e.g. loaded from a file).
    pub fn from_config(config: SimConfig) -> Self {
        Self {
            config,
            hooks:      None,
            pacer:      None,
            dispatcher: NearestIdle,
        }
    }
}

impl<D: Dispatcher> SimBuilder<D> {
    pub fn lift_speed_per_floor_ms(mut self, ms: u64) -> Self {
        self.config.lift_speed_per_floor_ms = ms;
        self
    }

    pub fn door_open_ms(mut self, ms: u64) -> Self {
        self.config.door_open_ms = ms;
        self
    }

    pub fn door_close_ms(mut self, ms: u64) -> Self {
        self.config.door_close_ms = ms;
        self
    }

    pub fn loop_interval_ms(mut self, ms: u64) -> Self {
        self.config.loop_interval_ms = ms;
        self
    }

    /// Simulation-wide hooks, fired for every call after the call's own.
    ///
    /// Combine several with [`LiftHooksExt::then`][crate::LiftHooksExt::then].
    pub fn hooks(mut self, hooks: impl LiftHooks + 'static) -> Self {
        self.hooks = Some(Box::new(hooks));
        self
    }

    /// How simulated waits map onto wall-clock time.
    pub fn pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Some(Box::new(pacer));
        self
    }

    /// Replace the lift selection policy.
    pub fn dispatcher<D2: Dispatcher>(self, dispatcher: D2) -> SimBuilder<D2> {
        SimBuilder {
            config: self.config,
            hooks:  self.hooks,
            pacer:  self.pacer,
            dispatcher,
        }
    }

    /// Validate the configuration and return an idle simulation with every
    /// lift parked on floor 1.
    pub fn build(self) -> SimResult<Simulation<D>> {
        self.config.validate()?;
        Ok(Simulation::assemble(
            self.config,
            self.hooks.unwrap_or_else(|| Box::new(NoopHooks)),
            self.pacer.unwrap_or_else(|| Box::new(VirtualPacer)),
            self.dispatcher,
        ))
    }
}
