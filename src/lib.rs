mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod registry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories};
pub use infrastructure::logging;
pub use registry::Registry;
