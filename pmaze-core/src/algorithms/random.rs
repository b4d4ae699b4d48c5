use rand::Rng as _;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// The only two kinds of random draws maze generation needs.
///
/// Kept as a trait so generation can be driven by a seeded generator in normal use and by a
/// scripted sequence in tests.
pub trait RandomSource {
    /// Uniform index in `0..len`, `len` must not be zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform integer in `lo..=hi`, `lo` must not exceed `hi`.
    fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize;
}

impl RandomSource for Random {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        self.gen_range(lo..=hi)
    }
}

/// Replays a fixed sequence of raw values, cycling when it runs out.
///
/// Each raw value is reduced into the requested range, so `ScriptedRandom::zeros()` always
/// picks the first item and the low end of every range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    pub fn zeros() -> Self {
        Self::new(vec![0])
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.next
    }

    fn raw(&mut self) -> usize {
        let value = match self.values.len() {
            0 => 0,
            n => self.values[self.next % n],
        };
        self.next += 1;
        value
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.raw() % len
    }

    fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        lo + self.raw() % (hi - lo + 1)
    }
}
