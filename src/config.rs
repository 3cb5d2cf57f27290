mod loader;
mod paths;
mod types;

pub use types::{Config, DEFAULT_REFRESH_INTERVAL, DEFAULT_TICK_PERIOD};
