pub mod dna_background;
pub mod dna_button;
pub mod spin_progress;
pub mod result_card;
pub mod share_buttons;
pub mod dataset_error;

pub use dna_background::DnaBackground;
pub use dna_button::DnaButton;
pub use spin_progress::SpinProgress;
pub use result_card::ResultCard;
pub use share_buttons::ShareButtons;
pub use dataset_error::DatasetError;
