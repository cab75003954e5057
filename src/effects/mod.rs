/// Rotating 3D card gallery.
pub mod gallery;
/// Scroll-linked zoom/parallax.
pub mod parallax;
/// Pointer-trail splatter.
pub mod splatter;
/// Twinkling starfield with nebula clouds.
pub mod starfield;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for an effect instance.
pub(crate) fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
