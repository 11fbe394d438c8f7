use std::cmp::Ordering;
use std::fmt;

/// Error returned by [`OrderedCollection::remove_highest`] on an empty
/// collection. Recoverable: a drain loop treats it as its natural
/// termination condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl fmt::Display for EmptyCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot remove from an empty collection")
    }
}

impl std::error::Error for EmptyCollection {}

/// A container that keeps its elements sorted by a caller-supplied scoring
/// function, using binary search for insertion and rank lookup.
///
/// The scoring function must be total and deterministic. The sort direction
/// is fixed at construction: with `ascending = true` the sequence is
/// non-decreasing in score and the highest score sits at the end; with
/// `ascending = false` the order is reversed and the lowest score sits at
/// the end. "Highest priority" always means the last element under the
/// fixed direction.
///
/// Ties break by insertion order: a new element is inserted after all
/// existing elements of equal score, so [`rank_of`](Self::rank_of) returns
/// a stable, reproducible boundary for equal-score probes.
///
/// The only mutators are [`insert`](Self::insert) and
/// [`remove_highest`](Self::remove_highest); there is no index assignment.
/// Ordered iteration is a destructive drain - see
/// [`drain_sorted`](Self::drain_sorted).
pub struct OrderedCollection<T, F>
where
    F: Fn(&T) -> u64,
{
    items: Vec<T>,
    score_of: F,
    ascending: bool,
}

impl<T, F> OrderedCollection<T, F>
where
    F: Fn(&T) -> u64,
{
    /// Create an empty collection with a fixed scoring function and
    /// sort direction.
    pub fn new(score_of: F, ascending: bool) -> Self {
        OrderedCollection {
            items: Vec::new(),
            score_of,
            ascending,
        }
    }

    /// Compare two scores under the fixed direction.
    fn priority_cmp(&self, a: u64, b: u64) -> Ordering {
        if self.ascending {
            a.cmp(&b)
        } else {
            b.cmp(&a)
        }
    }

    /// Return the index at which `value` would be inserted to keep the
    /// collection sorted: the first index whose element has strictly
    /// greater priority than the probe. Equal-score elements all sit
    /// before that index, so new values land after existing equals.
    ///
    /// On an empty collection this is 0. The probe is not inserted; the
    /// same lookup works for synthetic values such as tier thresholds.
    pub fn rank_of(&self, value: &T) -> usize {
        let probe = (self.score_of)(value);
        self.items.partition_point(|item| {
            self.priority_cmp((self.score_of)(item), probe) != Ordering::Greater
        })
    }

    /// Insert `value` at its rank, preserving the sort invariant.
    /// O(log n) comparisons plus an O(n) shift.
    pub fn insert(&mut self, value: T) {
        let at = self.rank_of(&value);
        self.items.insert(at, value);
    }

    /// Remove and return the element with the greatest priority under the
    /// fixed direction (the last element of the sorted sequence).
    pub fn remove_highest(&mut self) -> Result<T, EmptyCollection> {
        self.items.pop().ok_or(EmptyCollection)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an element equal to `value` is present. Located via
    /// [`rank_of`](Self::rank_of) plus equality checks over the run of
    /// equal-score elements ending at that rank, not a full scan.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let rank = self.rank_of(value);
        let score = (self.score_of)(value);
        self.items[..rank]
            .iter()
            .rev()
            .take_while(|item| (self.score_of)(*item) == score)
            .any(|item| *item == *value)
    }

    /// Drain the collection in priority order, highest first.
    ///
    /// This is the ordered iteration of the collection and it is
    /// destructive: it consumes `self`, yields each element exactly once,
    /// and the collection cannot be used afterwards. Callers that need a
    /// non-destructive traversal must clone the collection's contents
    /// before draining.
    pub fn drain_sorted(self) -> DrainSorted<T> {
        DrainSorted { items: self.items }
    }
}

/// Destructive, single-pass iterator over an [`OrderedCollection`],
/// yielding elements from highest priority to lowest.
pub struct DrainSorted<T> {
    items: Vec<T>,
}

impl<T> Iterator for DrainSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> ExactSizeIterator for DrainSorted<T> {}
