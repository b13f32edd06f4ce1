pub mod exchange;
pub use exchange::*;

pub mod rates;
pub use rates::*;
