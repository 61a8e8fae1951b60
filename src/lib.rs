// Platformer character controller
//
// - `core`: small math helpers shared by the input and game layers
// - `engine`: fixed-timestep loop, keyboard input, rapier2d physics
// - `game`: the character controller itself (state rules, contacts, animation)

pub mod core;
pub mod engine;
pub mod game;
