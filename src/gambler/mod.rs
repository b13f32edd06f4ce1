pub mod ruin;
pub use ruin::*;
