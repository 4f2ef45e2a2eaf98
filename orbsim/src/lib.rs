pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, Snapshot, Trajectory, NVec3};
pub use simulation::params::{Interactions, Parameters, G};
pub use simulation::forces::{ForceLaw, NewtonianGravity};
pub use simulation::integrator::Method;
pub use simulation::engine::{simulate, time_grid_len, Engine, MAX_GRID_POINTS};
pub use simulation::error::SimError;
pub use simulation::diagnostics::{energy_drift, total_angular_momentum, total_energy, EnergyReport};
pub use simulation::scenario::{validate_bodies, Scenario};

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig, SystemConfig};

pub use benchmark::benchmark::{bench_convergence_curve, bench_methods};
