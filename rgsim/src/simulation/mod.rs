pub mod states;
pub mod params;
pub mod error;
pub mod trail;
pub mod registry;
pub mod forces;
pub mod integrator;
pub mod curvature;
pub mod engine;
pub mod scenario;
