// simulation_engine/mod.rs
pub mod intersections;
pub mod movement;
pub mod network;
pub mod simulation;
pub mod vehicles;
