//! Column storage strategies
//!
//! A [`Representation`] stores the non-zero row indices of every column of a
//! GF(2) matrix. The reduction algorithm only talks to this trait, so any
//! store can be swapped in; the choice changes the cost of
//! [`Representation::add_columns`] and [`Representation::max_index`], never
//! the result.
//!
//! | Store | `max_index` | `add_columns` |
//! |---|---|---|
//! | [`VectorColumns`] | O(1) | O(\|s\| + \|t\|) merge |
//! | [`SetColumns`] | O(log \|t\|) | O(\|s\| log \|t\|) |
//! | [`HeapColumns`] | O(1) amortized | O(\|s\| log \|t\|), lazy cancellation |
//! | [`BitColumns`] | O(n / 64) | O(n / 64) word XOR |
//!
//! All methods assume their column arguments are in range; bounds are
//! checked one level up, in [`BoundaryMatrix`](super::BoundaryMatrix).

use std::collections::{BTreeSet, BinaryHeap};

/// Row/column index type
pub type Index = usize;

/// Column store contract used by the reduction engine
pub trait Representation: Default + Clone {
    /// Resize to `n` empty columns.
    fn set_num_columns(&mut self, n: usize);

    fn num_columns(&self) -> usize;

    /// Replace a column. `entries` is sorted ascending without duplicates.
    fn set_column(&mut self, column: Index, entries: &[Index]);

    /// Non-zero rows of a column, sorted ascending
    fn column(&self, column: Index) -> Vec<Index>;

    fn clear_column(&mut self, column: Index);

    /// Largest non-zero row (the pivot), `None` for a zero column
    fn max_index(&self, column: Index) -> Option<Index>;

    /// `target += source` over GF(2), i.e. symmetric difference.
    fn add_columns(&mut self, source: Index, target: Index);

    fn is_zero(&self, column: Index) -> bool {
        self.max_index(column).is_none()
    }
}

/// Shared reference to `items[source]` next to a mutable one to
/// `items[target]`. Requires `source != target`.
fn split_pair<T>(items: &mut [T], source: usize, target: usize) -> (&T, &mut T) {
    debug_assert_ne!(source, target);
    if source < target {
        let (head, tail) = items.split_at_mut(target);
        (&head[source], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(source);
        (&tail[0], &mut head[target])
    }
}

/// Sorted vectors; the default store
#[derive(Debug, Clone, Default)]
pub struct VectorColumns {
    columns: Vec<Vec<Index>>,
    scratch: Vec<Index>,
}

impl Representation for VectorColumns {
    fn set_num_columns(&mut self, n: usize) {
        self.columns = vec![Vec::new(); n];
    }

    fn num_columns(&self) -> usize {
        self.columns.len()
    }

    fn set_column(&mut self, column: Index, entries: &[Index]) {
        self.columns[column] = entries.to_vec();
    }

    fn column(&self, column: Index) -> Vec<Index> {
        self.columns[column].clone()
    }

    fn clear_column(&mut self, column: Index) {
        self.columns[column].clear();
    }

    fn max_index(&self, column: Index) -> Option<Index> {
        self.columns[column].last().copied()
    }

    fn add_columns(&mut self, source: Index, target: Index) {
        if source == target {
            self.columns[target].clear();
            return;
        }

        let (src, dst) = split_pair(&mut self.columns, source, target);
        let merged = &mut self.scratch;
        merged.clear();
        merged.reserve(src.len() + dst.len());

        let (mut i, mut j) = (0, 0);
        while i < src.len() && j < dst.len() {
            match src[i].cmp(&dst[j]) {
                std::cmp::Ordering::Less => {
                    merged.push(src[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    merged.push(dst[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&src[i..]);
        merged.extend_from_slice(&dst[j..]);

        std::mem::swap(dst, merged);
    }
}

/// Balanced-tree sets
#[derive(Debug, Clone, Default)]
pub struct SetColumns {
    columns: Vec<BTreeSet<Index>>,
}

impl Representation for SetColumns {
    fn set_num_columns(&mut self, n: usize) {
        self.columns = vec![BTreeSet::new(); n];
    }

    fn num_columns(&self) -> usize {
        self.columns.len()
    }

    fn set_column(&mut self, column: Index, entries: &[Index]) {
        self.columns[column] = entries.iter().copied().collect();
    }

    fn column(&self, column: Index) -> Vec<Index> {
        self.columns[column].iter().copied().collect()
    }

    fn clear_column(&mut self, column: Index) {
        self.columns[column].clear();
    }

    fn max_index(&self, column: Index) -> Option<Index> {
        self.columns[column].iter().next_back().copied()
    }

    fn add_columns(&mut self, source: Index, target: Index) {
        if source == target {
            self.columns[target].clear();
            return;
        }

        let (src, dst) = split_pair(&mut self.columns, source, target);
        for &row in src {
            if !dst.remove(&row) {
                dst.insert(row);
            }
        }
    }
}

/// Smallest size at which a heap is rebuilt from its canonical content
const COMPACT_MIN: usize = 64;

/// Max-heaps with lazy cancellation.
///
/// A heap may hold a row several times; the row is present in the column
/// iff it occurs an odd number of times. The top of every heap is kept
/// pruned, so it is always the true pivot.
///
/// A heap is compacted once it grows past its limit, which is then reset
/// to twice the compacted size. Each rebuild is paid for by the pushes
/// that preceded it.
#[derive(Debug, Clone, Default)]
pub struct HeapColumns {
    columns: Vec<BinaryHeap<Index>>,
    limits: Vec<usize>,
}

impl HeapColumns {
    fn prune_top(heap: &mut BinaryHeap<Index>) {
        while let Some(top) = heap.pop() {
            if heap.peek() == Some(&top) {
                heap.pop();
            } else {
                heap.push(top);
                break;
            }
        }
    }

    /// Rebuild a heap from its canonical content and return its new limit.
    fn compact(heap: &mut BinaryHeap<Index>) -> usize {
        *heap = Self::canonical(heap).into();
        Self::limit_for(heap.len())
    }

    fn limit_for(len: usize) -> usize {
        (2 * len).max(COMPACT_MIN)
    }

    fn canonical(heap: &BinaryHeap<Index>) -> Vec<Index> {
        let rows = heap.clone().into_sorted_vec();
        let mut out = Vec::with_capacity(rows.len());
        let mut i = 0;
        while i < rows.len() {
            let mut j = i;
            while j < rows.len() && rows[j] == rows[i] {
                j += 1;
            }
            if (j - i) % 2 == 1 {
                out.push(rows[i]);
            }
            i = j;
        }
        out
    }
}

impl Representation for HeapColumns {
    fn set_num_columns(&mut self, n: usize) {
        self.columns = vec![BinaryHeap::new(); n];
        self.limits = vec![COMPACT_MIN; n];
    }

    fn num_columns(&self) -> usize {
        self.columns.len()
    }

    fn set_column(&mut self, column: Index, entries: &[Index]) {
        self.columns[column] = entries.iter().copied().collect();
        self.limits[column] = Self::limit_for(entries.len());
    }

    fn column(&self, column: Index) -> Vec<Index> {
        Self::canonical(&self.columns[column])
    }

    fn clear_column(&mut self, column: Index) {
        self.columns[column].clear();
        self.limits[column] = COMPACT_MIN;
    }

    fn max_index(&self, column: Index) -> Option<Index> {
        self.columns[column].peek().copied()
    }

    fn add_columns(&mut self, source: Index, target: Index) {
        if source == target {
            self.clear_column(target);
            return;
        }

        let (src, dst) = split_pair(&mut self.columns, source, target);
        dst.extend(src.iter().copied());
        let limit = &mut self.limits[target];
        if dst.len() > *limit {
            *limit = Self::compact(dst);
        }
        Self::prune_top(dst);
    }
}

/// Dense bit vectors, one word per 64 rows
#[derive(Debug, Clone, Default)]
pub struct BitColumns {
    columns: Vec<Vec<u64>>,
    words: usize,
}

impl Representation for BitColumns {
    fn set_num_columns(&mut self, n: usize) {
        self.words = n.div_ceil(64);
        self.columns = vec![vec![0; self.words]; n];
    }

    fn num_columns(&self) -> usize {
        self.columns.len()
    }

    fn set_column(&mut self, column: Index, entries: &[Index]) {
        let bits = &mut self.columns[column];
        bits.iter_mut().for_each(|w| *w = 0);
        for &row in entries {
            bits[row / 64] |= 1u64 << (row % 64);
        }
    }

    fn column(&self, column: Index) -> Vec<Index> {
        let mut rows = Vec::new();
        for (w, &word) in self.columns[column].iter().enumerate() {
            let mut bits = word;
            while bits != 0 {
                let b = bits.trailing_zeros() as usize;
                rows.push(w * 64 + b);
                bits &= bits - 1;
            }
        }
        rows
    }

    fn clear_column(&mut self, column: Index) {
        self.columns[column].iter_mut().for_each(|w| *w = 0);
    }

    fn max_index(&self, column: Index) -> Option<Index> {
        self.columns[column]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, word)| **word != 0)
            .map(|(w, word)| w * 64 + 63 - word.leading_zeros() as usize)
    }

    fn add_columns(&mut self, source: Index, target: Index) {
        if source == target {
            self.clear_column(target);
            return;
        }

        let (src, dst) = split_pair(&mut self.columns, source, target);
        for (d, s) in dst.iter_mut().zip(src) {
            *d ^= s;
        }
    }
}
