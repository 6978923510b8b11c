//! Chunker — splits an ordered candidate list into fixed-size slices so wide
//! and tall tables stay printable.
#![allow(dead_code)]

/// Candidates per skill-matrix table (one column per candidate).
pub const SKILL_MATRIX_CHUNK_SIZE: usize = 15;

/// Candidates per score table (one row per candidate).
pub const SCORE_TABLE_CHUNK_SIZE: usize = 30;

/// A contiguous slice of the candidate list plus its position in the split.
/// Lives for one table-rendering pass.
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a, T> {
    pub items: &'a [T],
    /// 1-based index of this chunk.
    pub index: usize,
    /// Total number of chunks in the split.
    pub count: usize,
}

impl<T> Chunk<'_, T> {
    pub fn is_first(&self) -> bool {
        self.index == 1
    }

    pub fn is_last(&self) -> bool {
        self.index == self.count
    }
}

/// Splits `items` into `ceil(len / max_per_chunk)` ordered chunks. Every
/// chunk except possibly the last holds exactly `max_per_chunk` items; the
/// last is never empty. Empty input produces zero chunks; callers skip
/// table rendering entirely rather than draw an empty table.
pub fn chunk<T>(items: &[T], max_per_chunk: usize) -> Vec<Chunk<'_, T>> {
    assert!(max_per_chunk > 0, "max_per_chunk must be positive");
    if items.is_empty() {
        return Vec::new();
    }
    let count = items.len().div_ceil(max_per_chunk);
    items
        .chunks(max_per_chunk)
        .enumerate()
        .map(|(i, slice)| Chunk {
            items: slice,
            index: i + 1,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_produces_no_chunks() {
        let items: Vec<u32> = vec![];
        assert!(chunk(&items, 15).is_empty());
    }

    #[test]
    fn test_exact_multiple_splits_evenly() {
        let items: Vec<u32> = (0..30).collect();
        let chunks = chunk(&items, 15);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].items.len(), 15);
        assert_eq!(chunks[1].items.len(), 15);
    }

    #[test]
    fn test_32_candidates_at_15_gives_15_15_2() {
        let items: Vec<u32> = (0..32).collect();
        let chunks = chunk(&items, 15);
        let sizes: Vec<usize> = chunks.iter().map(|c| c.items.len()).collect();
        assert_eq!(sizes, vec![15, 15, 2]);
        assert_eq!(chunks[0].count, 3);
        assert!(chunks[0].is_first());
        assert!(chunks[2].is_last());
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let items: Vec<u32> = (0..47).collect();
        let chunks = chunk(&items, 30);
        let rebuilt: Vec<u32> = chunks.iter().flat_map(|c| c.items.iter().copied()).collect();
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_chunk_count_is_ceiling() {
        for n in 1..=61usize {
            let items: Vec<usize> = (0..n).collect();
            let chunks = chunk(&items, 30);
            assert_eq!(chunks.len(), n.div_ceil(30), "n = {n}");
            assert!(chunks.iter().all(|c| !c.items.is_empty()));
        }
    }

    #[test]
    fn test_indices_are_one_based_and_sequential() {
        let items: Vec<u32> = (0..40).collect();
        let chunks = chunk(&items, 15);
        let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }
}
