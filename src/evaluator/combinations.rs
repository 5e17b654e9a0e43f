/// Iterator over all `K`-element index subsets of `0..N`, in lexicographic order.
///
/// Each item is a sorted index array, so picking `cards[i]` for every index keeps the
/// original relative order of the cards.
#[derive(Debug, Clone)]
pub struct Combinations<const N: usize, const K: usize> {
    indices: [usize; K],
    remaining: usize,
}

/// C(7,5) = 21 five-card subsets of a seven-card hand.
pub type Combinations7Choose5 = Combinations<7, 5>;

/// Binomial coefficient n choose k.
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut acc = 1;
    let mut i = 0;
    while i < k {
        acc = acc * (n - i) / (i + 1);
        i += 1;
    }
    acc
}

impl<const N: usize, const K: usize> Combinations<N, K> {
    pub fn new() -> Self {
        Self { indices: core::array::from_fn(|i| i), remaining: binomial(N, K) }
    }
}

impl<const N: usize, const K: usize> Default for Combinations<N, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const K: usize> Iterator for Combinations<N, K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let result = self.indices;

        // Find the rightmost index that can still move right, bump it and
        // pack everything after it.
        if let Some(i) = (0..K).rev().find(|&i| self.indices[i] < N - K + i) {
            self.indices[i] += 1;
            for j in (i + 1)..K {
                self.indices[j] = self.indices[j - 1] + 1;
            }
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize, const K: usize> ExactSizeIterator for Combinations<N, K> {}
