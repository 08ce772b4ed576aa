//! The space of candidate visiting orders.
//!
//! An [`OrderSpace`] is a list of groups. A candidate order picks a
//! permutation of the groups and, for every group, a permutation of its
//! fronts, then concatenates the groups. With path grouping the groups are
//! the paths; without it there is one group holding every front.
//!
//! Candidates are addressed by a rank in a mixed-radix number whose first
//! digit is the lexicographic rank of the group permutation and whose
//! remaining digits are the lexicographic ranks of the per-group
//! permutations, the last group varying fastest. Any rank range can be
//! enumerated on its own, which lets the exhaustive search split the space
//! into independent branches that still respect a single global order.

use crate::estimate::{estimate, SizeEstimate};

/// Rearranges `items` into the next lexicographic permutation.
///
/// Returns `false` and resets `items` to ascending order when `items` was
/// the last permutation.
///
/// ```
/// use wagonplan_solver::next_permutation;
///
/// let mut items = vec![0, 2, 1];
/// assert!(next_permutation(&mut items));
/// assert_eq!(items, vec![1, 0, 2]);
///
/// let mut items = vec![2, 1, 0];
/// assert!(!next_permutation(&mut items));
/// assert_eq!(items, vec![0, 1, 2]);
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        items.reverse();
        return false;
    }
    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot - 1] {
        successor -= 1;
    }
    items.swap(pivot - 1, successor);
    items[pivot..].reverse();
    true
}

/// The `rank`-th lexicographic permutation of `0..n`. `rank` must be below `n!`.
fn nth_permutation(n: usize, mut rank: u64) -> Vec<usize> {
    let mut available: Vec<usize> = (0..n).collect();
    let mut result = Vec::with_capacity(n);
    for remaining in (0..n).rev() {
        let block = small_factorial(remaining);
        let pick = (rank / block) as usize;
        rank %= block;
        result.push(available.remove(pick));
    }
    result
}

// Only called for n whose factorial divides a u64 space size.
fn small_factorial(n: usize) -> u64 {
    (2..=n as u64).product()
}

/// Candidate orders over a grouping of fronts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpace {
    groups: Vec<Vec<usize>>,
}

impl OrderSpace {
    /// A space that keeps each group contiguous. Empty groups are dropped.
    pub fn grouped(groups: Vec<Vec<usize>>) -> Self {
        let groups = groups.into_iter().filter(|g| !g.is_empty()).collect();
        Self { groups }
    }

    /// A space of all permutations of `indices`, enumerated
    /// lexicographically by front index.
    pub fn flat(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        Self::grouped(vec![indices])
    }

    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// Number of fronts in every candidate.
    pub fn front_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Size estimate of this space.
    pub fn estimate(&self, calibration_constant: f64) -> SizeEstimate {
        estimate(&self.groups, calibration_constant)
    }

    /// Number of candidates, if it fits in `u64`.
    pub fn size(&self) -> Option<u64> {
        self.radices()?.into_iter().try_fold(1u64, u64::checked_mul)
    }

    fn radices(&self) -> Option<Vec<u64>> {
        std::iter::once(self.groups.len())
            .chain(self.groups.iter().map(Vec::len))
            .map(|n| crate::estimate::factorial(n).and_then(|f| u64::try_from(f).ok()))
            .collect()
    }

    /// A cursor positioned on the first candidate.
    pub fn first(&self) -> Cursor {
        Cursor {
            group_order: (0..self.groups.len()).collect(),
            locals: self.groups.iter().map(|g| (0..g.len()).collect()).collect(),
        }
    }

    /// A cursor positioned on the candidate with the given rank.
    ///
    /// # Panics
    ///
    /// Panics if the space size does not fit in `u64` or `rank` is out of range.
    pub fn cursor_at(&self, rank: u64) -> Cursor {
        let radices = self
            .radices()
            .filter(|_| self.size().is_some_and(|size| rank < size))
            .unwrap_or_else(|| panic!("rank {rank} is outside the order space"));

        let mut digits = vec![0u64; radices.len()];
        let mut rest = rank;
        for (digit, radix) in digits.iter_mut().zip(&radices).rev() {
            *digit = rest % radix;
            rest /= radix;
        }

        Cursor {
            group_order: nth_permutation(self.groups.len(), digits[0]),
            locals: self
                .groups
                .iter()
                .zip(&digits[1..])
                .map(|(group, &digit)| nth_permutation(group.len(), digit))
                .collect(),
        }
    }

    /// Writes the candidate under `cursor` into `out`.
    pub fn write(&self, cursor: &Cursor, out: &mut Vec<usize>) {
        out.clear();
        for &group in &cursor.group_order {
            let fronts = &self.groups[group];
            out.extend(cursor.locals[group].iter().map(|&pos| fronts[pos]));
        }
    }

    /// Iterates every candidate in rank order.
    pub fn iter(&self) -> Candidates<'_> {
        Candidates {
            space: self,
            cursor: Some(self.first()),
        }
    }
}

/// Position inside an [`OrderSpace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    group_order: Vec<usize>,
    locals: Vec<Vec<usize>>,
}

impl Cursor {
    /// Moves to the next candidate. Returns `false` past the last one.
    pub fn advance(&mut self) -> bool {
        for local in self.locals.iter_mut().rev() {
            if next_permutation(local) {
                return true;
            }
        }
        next_permutation(&mut self.group_order)
    }
}

/// Iterator over all candidates of an [`OrderSpace`].
pub struct Candidates<'a> {
    space: &'a OrderSpace,
    cursor: Option<Cursor>,
}

impl Iterator for Candidates<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        let mut order = Vec::with_capacity(self.space.front_count());
        self.space.write(cursor, &mut order);
        if !cursor.advance() {
            self.cursor = None;
        }
        Some(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_permutation_walks_lexicographically() {
        let mut items = vec![0, 1, 2];
        let mut seen = vec![items.clone()];
        while next_permutation(&mut items) {
            seen.push(items.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
        assert_eq!(items, vec![0, 1, 2]);
    }

    #[test]
    fn test_next_permutation_short_slices() {
        let mut empty: Vec<usize> = Vec::new();
        assert!(!next_permutation(&mut empty));
        let mut one = vec![7];
        assert!(!next_permutation(&mut one));
    }

    #[test]
    fn test_nth_permutation_matches_walk() {
        let mut items = vec![0, 1, 2, 3];
        let mut rank = 0;
        loop {
            assert_eq!(nth_permutation(4, rank), items);
            rank += 1;
            if !next_permutation(&mut items) {
                break;
            }
        }
        assert_eq!(rank, 24);
    }

    #[test]
    fn test_flat_space_is_lexicographic_by_index() {
        let space = OrderSpace::flat(vec![7, 3, 5]);
        let all: Vec<_> = space.iter().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec![3, 5, 7]);
        assert_eq!(all[1], vec![3, 7, 5]);
        assert_eq!(all[5], vec![7, 5, 3]);
    }

    #[test]
    fn test_grouped_space_keeps_groups_contiguous() {
        let space = OrderSpace::grouped(vec![vec![0, 1], vec![2, 3, 4]]);
        assert_eq!(space.size(), Some(24));

        let all: Vec<_> = space.iter().collect();
        assert_eq!(all.len(), 24);
        assert_eq!(all[0], vec![0, 1, 2, 3, 4]);
        assert_eq!(all[1], vec![0, 1, 2, 4, 3]);
        assert_eq!(all[12], vec![2, 3, 4, 0, 1]);

        for order in &all {
            let first_two: Vec<_> = order.iter().take(2).copied().collect();
            let starts_with_path_one = first_two.iter().all(|&i| i < 2);
            let ends_with_path_one = order[3..].iter().all(|&i| i < 2);
            assert!(starts_with_path_one || ends_with_path_one, "{order:?}");
        }

        let mut distinct = all.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), 24);
    }

    #[test]
    fn test_cursor_at_matches_iteration() {
        let space = OrderSpace::grouped(vec![vec![4], vec![0, 2], vec![1, 3]]);
        let size = space.size().unwrap();
        assert_eq!(size, 6 * 2 * 2);

        let mut out = Vec::new();
        for (rank, expected) in space.iter().enumerate() {
            space.write(&space.cursor_at(rank as u64), &mut out);
            assert_eq!(out, expected, "rank {rank}");
        }
    }

    #[test]
    fn test_empty_groups_dropped() {
        let space = OrderSpace::grouped(vec![vec![], vec![1], vec![]]);
        assert_eq!(space.groups(), &[vec![1]]);
        assert_eq!(space.iter().collect::<Vec<_>>(), vec![vec![1]]);
    }

    #[test]
    fn test_estimate_matches_size() {
        let space = OrderSpace::grouped(vec![vec![0, 1, 2], vec![3]]);
        assert_eq!(space.estimate(1.0).combinations, Some(12));
        assert_eq!(space.size(), Some(12));
        assert_eq!(space.front_count(), 4);
    }

    #[test]
    #[should_panic]
    fn test_cursor_out_of_range() {
        OrderSpace::flat(vec![0, 1]).cursor_at(2);
    }
}
