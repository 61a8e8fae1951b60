// Game-side logic

pub mod characters;
