/// Offsets from the spin trigger, in milliseconds.
pub const STEP_TWO_AT_MS: u32 = 2000;
pub const STEP_THREE_AT_MS: u32 = 4000;
pub const RESULT_AT_MS: u32 = 6000;

/// How many of the last results are excluded from the next draw.
pub const RECENT_EXCLUSION_COUNT: usize = 5;

/// How long the copy-link button shows its confirmation.
pub const COPY_TIMEOUT_MS: u32 = 2000;

pub const DNA_PAIRS: usize = 12;
pub const CONFETTI_COUNT: usize = 20;

pub const DNA_EMOJIS: [&str; 3] = ["🧬", "✨", "🔬"];
pub const CONFETTI_EMOJIS: [&str; 5] = ["🎉", "✨", "🧬", "🎊", "💫"];

pub const SITE_URL: &str = "https://dna-roulette.vercel.app";
pub const SITE_TITLE: &str = "ADN Roulette";
pub const SHARE_TITLE: &str = "Résultat DNA Roulette";
pub const SHARE_HASHTAG: &str = "#DNARoulette";
