use crate::constants::CONFETTI_EMOJIS;

/// Half-width of the square the burst spreads over, in pixels.
const SPREAD: f64 = 150.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiParticle {
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
    pub emoji: &'static str,
}

// Stable pseudo-random value in [0, 1) so the burst looks the same on every render.
fn seeded_random(seed: u32) -> f64 {
    let x = (f64::from(seed) * 9999.0).sin() * 10000.0;
    x - x.floor()
}

pub fn confetti_layout(count: usize) -> Vec<ConfettiParticle> {
    (0..count)
        .map(|i| {
            let seed = i as u32;
            ConfettiParticle {
                x: (seeded_random(seed * 7) - 0.5) * SPREAD * 2.0,
                y: (seeded_random(seed * 13) - 0.5) * SPREAD * 2.0,
                rotate: seeded_random(seed * 17) * 360.0,
                emoji: CONFETTI_EMOJIS[i % CONFETTI_EMOJIS.len()],
            }
        })
        .collect()
}
