pub mod board;
pub mod time;

pub use board::*;
pub use time::*;
