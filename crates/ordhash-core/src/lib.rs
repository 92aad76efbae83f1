pub mod config;
pub mod logging;

pub mod digest;
pub mod fetch;
pub mod gateway;
pub mod resolver;
