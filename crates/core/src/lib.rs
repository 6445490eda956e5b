pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod traits;

pub use config::*;
pub use error::*;
pub use models::*;
pub use pipeline::*;
pub use traits::*;
