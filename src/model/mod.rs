pub mod alien;
pub mod board;
pub mod city;
pub mod event;

pub use alien::Alien;
pub use board::Board;
pub use city::{City, Direction};
pub use event::{Destruction, EventLog};
