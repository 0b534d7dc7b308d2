#[cfg(feature = "cli")]
pub mod cli;
pub mod environments;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use environments::{DbTarget, EnvironmentMap};
