//! Batch planning for multi-id Wikidata requests
//!
//! wbgetentities accepts at most 50 ids per call. Larger inputs are split into
//! `ceil(n / 50)` contiguous batches of near-equal size rather than fixed-size
//! chunks: index `i` lands in batch `floor(i / (n / batch_count))`.

/// Maximum ids per wbgetentities request
pub const WIKI_ID_BATCH_SIZE: usize = 50;

/// Split `ids` into contiguous, evenly sized batches of at most `batch_size`
///
/// Empty input yields no batches; input that fits in one batch is returned whole.
pub fn batch_wiki_ids<T>(ids: &[T], batch_size: usize) -> Vec<&[T]> {
    let count = ids.len();
    if count == 0 {
        return vec![];
    }
    if count <= batch_size.max(1) {
        return vec![ids];
    }

    let batch_count = count.div_ceil(batch_size.max(1));
    let width = count as f64 / batch_count as f64;
    let batch_of = |index: usize| (index as f64 / width).floor() as usize;

    let mut batches = Vec::with_capacity(batch_count);
    let mut start = 0;
    for index in 1..count {
        if batch_of(index) != batch_of(index - 1) {
            batches.push(&ids[start..index]);
            start = index;
        }
    }
    batches.push(&ids[start..]);
    batches
}
