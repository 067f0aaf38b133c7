#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod domain;
pub mod generator;
pub mod http;
pub mod metrics;

pub use config::{Cli, Settings};
pub use domain::{draw_step, next_value, AppState, CounterTable};
pub use generator::Generator;
pub use http::{scrape_metrics, serve};
pub use metrics::{Metrics, TeamSample};
