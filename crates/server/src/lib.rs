pub mod errors;
pub mod routes;
pub mod startup;

pub use startup::{app, build_services, load_config, run};
