pub mod demo;
pub mod locate;
pub mod map;
