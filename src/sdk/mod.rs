pub mod config;
pub mod input;
pub mod routing;
pub mod util;
