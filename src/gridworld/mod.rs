pub mod motion;
pub use motion::*;

pub mod wormhole;
pub use wormhole::*;

pub mod world;
pub use world::*;
