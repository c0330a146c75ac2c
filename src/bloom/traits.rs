pub trait BloomFilterStats {
    /// Number of bits in the filter.
    fn size(&self) -> usize;
    /// Number of hash functions applied per element.
    fn hash_count(&self) -> usize;
    /// Number of `add` calls so far, duplicates included.
    fn insert_count(&self) -> usize;
    /// Number of bits currently set.
    fn bits_set(&self) -> usize;

    fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.size() as f64
    }

    /// `(1 - e^(-k·n/m))^k` for the current insert count.
    fn estimated_false_positive_rate(&self) -> f64 {
        let k = self.hash_count() as f64;
        let n = self.insert_count() as f64;
        let m = self.size() as f64;
        (1.0 - (-k * n / m).exp()).powf(k)
    }
}
