use rand::Rng;

use crate::Sampler;

/// A drawable table: a [`Sampler`] paired with a **static slice** of items.
///
/// - No per-table `Vec<T>` allocation; the catalog lives in statics.
/// - Draws hand out `&'static T`, so results never need cloning.
#[derive(Debug, Clone, Copy)]
pub struct DrawTable<S: Sampler, T: 'static> {
    sampler: S,
    items: &'static [T],
}

impl<S: Sampler, T> DrawTable<S, T> {
    pub const fn new(sampler: S, items: &'static [T]) -> Self {
        Self { sampler, items }
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.sampler.len()
    }

    /// Draw one item.
    #[inline]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static T {
        let i = self.sampler.pick(rng);
        &self.items[i]
    }

    /// Access the backing slice.
    #[inline]
    pub const fn items(&self) -> &'static [T] {
        self.items
    }
}
