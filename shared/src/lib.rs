pub mod constants;
pub mod species;
pub mod selection;
pub mod shared_spin_game;
pub mod sharing;
pub mod confetti;
