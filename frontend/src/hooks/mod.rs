pub mod use_spin_game;
pub mod use_prefers_reduced_motion;

pub use use_spin_game::*;
pub use use_prefers_reduced_motion::*;
