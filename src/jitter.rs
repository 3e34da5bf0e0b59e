//! Per-word perturbations that make typeset text look handwritten.

use crate::units::Px;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Largest vertical offset applied to a word, in either direction
pub const MAX_OFFSET: Px = Px(1.0);
/// Largest change to a word's glyph size, in either direction
pub const MAX_SIZE_DELTA: Px = Px(1.0);
/// Largest rotation applied to a word, in radians, in either direction
pub const MAX_ROTATION: f32 = 0.025;

/// The perturbation applied to a single word
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Jitter {
    /// Added to the word's vertical position
    pub y_offset: Px,
    /// Added to the font size the word's glyphs are drawn with. It does not
    /// affect how far the pen advances after the word.
    pub size_delta: Px,
    /// Rotation about the word's top-left origin, in radians
    pub rotation: f32,
}

/// A supply of per-word jitter. The renderer asks for a fresh [Jitter] for every
/// word it draws.
pub trait JitterSource {
    fn next_jitter(&mut self) -> Jitter;
}

/// Uniformly random jitter within [MAX_OFFSET], [MAX_SIZE_DELTA] and
/// [MAX_ROTATION]. Uses the thread-local generator by default, so every render
/// looks slightly different.
pub struct RandomJitter<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomJitter<ThreadRng> {
    pub fn new() -> Self {
        RandomJitter { rng: rand::rng() }
    }
}

impl Default for RandomJitter<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomJitter<StdRng> {
    /// Reproducible jitter: the same seed yields the same sequence of jitters
    pub fn seeded(seed: u64) -> Self {
        RandomJitter {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn next_jitter(&mut self) -> Jitter {
        Jitter {
            y_offset: Px(self.rng.random_range(-*MAX_OFFSET..=*MAX_OFFSET)),
            size_delta: Px(self.rng.random_range(-*MAX_SIZE_DELTA..=*MAX_SIZE_DELTA)),
            rotation: self.rng.random_range(-MAX_ROTATION..=MAX_ROTATION),
        }
    }
}

/// No jitter at all: words are drawn exactly where the layout puts them
#[derive(Debug, Default, Copy, Clone)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn next_jitter(&mut self) -> Jitter {
        Jitter::default()
    }
}

/// The same jitter for every word
#[derive(Debug, Default, Copy, Clone)]
pub struct FixedJitter(pub Jitter);

impl JitterSource for FixedJitter {
    fn next_jitter(&mut self) -> Jitter {
        self.0
    }
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn next_jitter(&mut self) -> Jitter {
        (**self).next_jitter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_jitter_stays_within_bounds() {
        let mut jitter = RandomJitter::new();
        for _ in 0..1000 {
            let j = jitter.next_jitter();
            assert!(j.y_offset.0.abs() <= MAX_OFFSET.0);
            assert!(j.size_delta.0.abs() <= MAX_SIZE_DELTA.0);
            assert!(j.rotation.abs() <= MAX_ROTATION);
        }
    }

    #[test]
    fn random_jitter_varies_between_words() {
        let mut jitter = RandomJitter::seeded(7);
        let first = jitter.next_jitter();
        assert!((0..10).any(|_| jitter.next_jitter() != first));
    }

    #[test]
    fn seeded_jitter_is_reproducible() {
        let mut a = RandomJitter::seeded(42);
        let mut b = RandomJitter::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.next_jitter(), b.next_jitter());
        }
    }

    #[test]
    fn deterministic_sources() {
        assert_eq!(NoJitter.next_jitter(), Jitter::default());
        let fixed = Jitter {
            y_offset: Px(0.5),
            size_delta: Px(-1.0),
            rotation: 0.01,
        };
        fn draw<J: JitterSource>(mut source: J) -> Jitter {
            source.next_jitter()
        }
        let mut source = FixedJitter(fixed);
        assert_eq!(draw(&mut source), fixed);
    }
}
