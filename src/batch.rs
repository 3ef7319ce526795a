//! Chunked iteration helpers for batching work over ordered sequences.

use crate::error::BatchError;

/// Iterator over consecutive groups of at most `size` elements.
///
/// Produced by [`chunks`]. Each call to `chunks` restarts from the beginning
/// of the slice; the final group may be shorter than `size`.
#[derive(Debug, Clone)]
pub struct Chunks<'a, T> {
    rest: &'a [T],
    size: usize,
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let split = self.size.min(self.rest.len());
        let (head, tail) = self.rest.split_at(split);
        self.rest = tail;
        Some(head)
    }
}

/// Split `seq` into consecutive groups of at most `size` elements.
///
/// A zero `size` is rejected when the call is made, not when the iterator is
/// first advanced.
pub fn chunks<T>(seq: &[T], size: usize) -> Result<Chunks<'_, T>, BatchError> {
    if size == 0 {
        return Err(BatchError::NonPositiveChunkSize);
    }
    Ok(Chunks { rest: seq, size })
}

/// Left-fold `f` over the chunks of `seq`, starting from `initial`.
///
/// The fold runs over whole chunks, not individual elements.
pub fn reduce_in_chunks<T, Acc>(
    mut f: impl FnMut(Acc, &[T]) -> Acc,
    seq: &[T],
    initial: Acc,
    size: usize,
) -> Result<Acc, BatchError> {
    let mut acc = initial;
    for chunk in chunks(seq, size)? {
        acc = f(acc, chunk);
    }
    Ok(acc)
}
