//! Index randomness used by wish and envelope picks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[cfg(any(feature = "rng", not(target_arch = "wasm32")))]
use crate::logging::log_warn;

/// Source of uniformly distributed indices.
pub trait IndexSource {
    /// Returns an index in `[0, len)`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniform pick in `[0, len)` that never returns `previous` when there is
/// another index to choose from. Draws from the `len - 1` remaining indices so
/// it always terminates.
pub fn draw_avoiding<R: IndexSource + ?Sized>(
    rng: &mut R,
    len: usize,
    previous: Option<usize>,
) -> usize {
    match previous {
        Some(prev) if len > 1 && prev < len => {
            let idx = rng.next_index(len - 1);
            if idx >= prev { idx + 1 } else { idx }
        }
        _ => rng.next_index(len),
    }
}

// --- Entropy-backed source ----------------------------------------------------

/// Browser / OS entropy through `getrandom` (feature `rng`). Falls back to a
/// clock-seeded LCG when the feature is off or entropy is unavailable.
pub struct EntropySource {
    lcg_state: u64,
}

impl EntropySource {
    pub fn new() -> Self {
        Self {
            lcg_state: clock_seed(),
        }
    }

    fn next_lcg(&mut self) -> u64 {
        // Knuth MMIX constants; high bits are the useful ones.
        self.lcg_state = self
            .lcg_state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.lcg_state >> 33
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for EntropySource {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        #[cfg(feature = "rng")]
        {
            let mut buf = [0u8; 8];
            match getrandom::getrandom(&mut buf) {
                Ok(()) => return (u64::from_le_bytes(buf) % len as u64) as usize,
                Err(err) => log_warn!("entropy unavailable ({err}), using clock LCG"),
            }
        }
        (self.next_lcg() % len as u64) as usize
    }
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    (now * 1000.0) as u64 ^ 0x9E37_79B9_7F4A_7C15
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    if nanos == 0 {
        log_warn!("system clock before epoch, seeding LCG with a constant");
    }
    nanos ^ 0x9E37_79B9_7F4A_7C15
}

// --- Deterministic source -------------------------------------------------------

/// Seeded `SmallRng` for replays and tests: the same seed yields the same picks.
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: SmallRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for SeededSource {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}
