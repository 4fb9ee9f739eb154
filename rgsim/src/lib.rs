pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body3, BodyHandle, BodyKind, NVec3, Photon, PhotonHandle};
pub use simulation::error::{SimError, SimResult};
pub use simulation::params::{FieldParameters, Parameters};
pub use simulation::trail::TrailBuffer;
pub use simulation::registry::Registry;
pub use simulation::forces::{AccelSet3, Acceleration3, PhotonDeflection, RelativisticGravity};
pub use simulation::integrator::{advance_photons, semi_implicit_euler};
pub use simulation::curvature::CurvatureField;
pub use simulation::engine::Simulator;
pub use simulation::scenario::{build_simulator, default_scene, reset_to_default, Spawner};

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, PhotonConfig, ScenarioConfig};

pub use visualization::rgsim_vis3d::run_3d;

pub use benchmark::benchmark::{bench_field_curve, bench_step};
