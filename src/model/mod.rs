pub mod config;
pub mod error;
pub mod member;
pub mod seed;
pub mod task;
pub mod view;

pub use config::*;
pub use error::DashboardError;
pub use member::*;
pub use seed::*;
pub use task::*;
pub use view::*;
