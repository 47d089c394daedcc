use crate::models::FoodRecord;

/// One contiguous slice of the input, tagged with its absolute position.
#[derive(Debug)]
pub struct Batch<'a> {
    pub index: usize,
    pub start: usize,
    pub records: &'a [FoodRecord],
}

impl Batch<'_> {
    /// Last dataset row covered by this batch, inclusive. Batches are
    /// never empty.
    pub fn end(&self) -> usize {
        self.start + self.records.len() - 1
    }
}

/// Partition `records` into contiguous batches of at most `size` rows, in
/// order, covering every row exactly once. The last batch may be shorter.
/// `size` must be at least 1 (enforced by config validation).
pub fn batches(records: &[FoodRecord], size: usize) -> impl Iterator<Item = Batch<'_>> {
    records.chunks(size).enumerate().map(move |(index, chunk)| Batch {
        index,
        start: index * size,
        records: chunk,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<FoodRecord> {
        (0..n)
            .map(|i| FoodRecord {
                name: format!("food-{}", i),
                calories: "100".to_string(),
                protein: "NA".to_string(),
                carbs: "NA".to_string(),
                fat: "NA".to_string(),
            })
            .collect()
    }

    #[test]
    fn partitions_exactly_once_in_order() {
        for (n, size) in [
            (0usize, 25usize),
            (1, 25),
            (24, 25),
            (25, 25),
            (26, 25),
            (30, 25),
            (50, 25),
            (7, 3),
            (10, 1),
        ] {
            let input = records(n);
            let parts: Vec<_> = batches(&input, size).collect();
            assert_eq!(parts.len(), n.div_ceil(size), "n={} size={}", n, size);

            let mut seen = Vec::new();
            for (i, batch) in parts.iter().enumerate() {
                assert_eq!(batch.index, i);
                assert_eq!(batch.start, i * size);
                assert!(!batch.records.is_empty());
                assert!(batch.records.len() <= size);
                seen.extend(batch.records.iter().map(|r| r.name.clone()));
            }

            let expected: Vec<_> = input.iter().map(|r| r.name.clone()).collect();
            assert_eq!(seen, expected, "n={} size={}", n, size);
        }
    }

    #[test]
    fn last_batch_may_be_short() {
        let input = records(30);
        let parts: Vec<_> = batches(&input, 25).collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].records.len(), 25);
        assert_eq!(parts[1].records.len(), 5);
        assert_eq!(parts[1].start, 25);
        assert_eq!(parts[1].end(), 29);
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let input = records(50);
        let parts: Vec<_> = batches(&input, 25).collect();
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|b| b.records.len() == 25));
    }

    #[test]
    fn empty_input_yields_no_batches() {
        let parts: Vec<_> = batches(&[], 25).collect();
        assert!(parts.is_empty());
    }
}
