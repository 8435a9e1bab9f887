pub mod crew;
pub mod roster;
