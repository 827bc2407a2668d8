//! The two endpoints this server exposes.

mod echo;
mod health;

pub use echo::EchoHandler;
pub use health::HealthHandler;
