pub mod input;
pub mod locomotion;
pub mod spawn;
