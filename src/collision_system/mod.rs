pub mod collision;
pub mod config;
pub mod error;
pub mod resolve;
pub mod space;
pub mod tags;
pub mod world;

pub use collision::*;
pub use config::*;
pub use error::*;
pub use resolve::*;
pub use space::*;
pub use tags::*;
pub use world::*;
