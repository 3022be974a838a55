//! Reduction of shard-local containers into one.
//!
//! Because `plus` is associative and never mutates its operands, partial
//! results can be combined in any grouping. All helpers return `Ok(None)`
//! when given nothing to merge and stop at the first incompatible pair.

use crate::core::{Container, ContainerError};

/// Left fold: `((a + b) + c) + ...`.
pub fn merge_all<C, I>(parts: I) -> Result<Option<C>, ContainerError>
where
    C: Container,
    I: IntoIterator<Item = C>,
{
    let mut parts = parts.into_iter();
    let Some(mut acc) = parts.next() else {
        return Ok(None);
    };
    let mut merged = 1usize;
    for part in parts {
        acc = acc.plus(&part)?;
        merged += 1;
    }
    log::trace!("merged {merged} partial {} containers", acc.name());
    Ok(Some(acc))
}

/// Balanced pairwise reduction: `(a + b) + (c + d) + ...`.
///
/// Keeps the depth of the summation tree logarithmic in the number of
/// parts, which bounds floating-point error growth better than a fold.
pub fn merge_tree<C: Container>(parts: Vec<C>) -> Result<Option<C>, ContainerError> {
    let total = parts.len();
    let mut level = parts;
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut iter = level.into_iter();
        while let Some(a) = iter.next() {
            match iter.next() {
                Some(b) => next.push(a.plus(&b)?),
                None => next.push(a),
            }
        }
        level = next;
    }
    let result = level.pop();
    if let Some(c) = &result {
        log::trace!("tree-merged {total} partial {} containers", c.name());
    }
    Ok(result)
}

/// Parallel reduction across the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn par_merge<C>(parts: Vec<C>) -> Result<Option<C>, ContainerError>
where
    C: Container + Send,
{
    use rayon::prelude::*;

    let total = parts.len();
    let result = parts
        .into_par_iter()
        .map(Ok::<C, ContainerError>)
        .try_reduce_with(|a, b| a.plus(&b))
        .transpose()?;
    if let Some(c) = &result {
        log::trace!("par-merged {total} partial {} containers", c.name());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Aggregation, UserFcn};
    use crate::primitives::{Bin, Count, Sum};
    use crate::testing::shards::{random_shards, random_values};

    #[test]
    fn empty_input_gives_none() {
        assert!(merge_all(Vec::<crate::primitives::Counted>::new()).unwrap().is_none());
        assert!(merge_tree(Vec::<crate::primitives::Counted>::new()).unwrap().is_none());
    }

    #[test]
    fn fold_and_tree_agree_on_counts() {
        let parts: Vec<_> = (1..=9).map(|i| Count::ed(i as f64).unwrap()).collect();
        let folded = merge_all(parts.clone()).unwrap().unwrap();
        let tree = merge_tree(parts).unwrap().unwrap();
        assert_eq!(folded.entries(), 45.0);
        assert_eq!(tree.entries(), 45.0);
    }

    #[test]
    fn single_part_is_returned_as_is() {
        let only = Sum::ed(2.0, 3.0).unwrap();
        assert_eq!(merge_tree(vec![only]).unwrap(), Some(only));
        assert_eq!(merge_all([only]).unwrap(), Some(only));
    }

    #[test]
    fn incompatible_parts_fail() {
        let q = || UserFcn::new(|x: &f64| *x);
        let mut a = Bin::histogram(2, 0.0, 1.0, q()).unwrap();
        a.fill(&0.5, 1.0);
        let b = Bin::histogram(3, 0.0, 1.0, q()).unwrap();
        assert!(merge_all(vec![a.clone(), b.clone()]).is_err());
        assert!(merge_tree(vec![a, b]).is_err());
    }

    #[test]
    fn sharded_histogram_matches_single_pass() {
        let data = random_values(1_000, -1.0, 11.0, 7);
        let q = UserFcn::named("x", |x: &f64| *x);
        let mut whole = Bin::histogram(10, 0.0, 10.0, q).unwrap();
        whole.fill_all(&data);

        let partials: Vec<_> = random_shards(&data, 6, 8)
            .iter()
            .map(|shard| {
                let mut h = whole.zero();
                h.fill_all(shard);
                h
            })
            .collect();

        let tree = merge_tree(partials.clone()).unwrap().unwrap();
        let folded = merge_all(partials).unwrap().unwrap();
        // unit weights keep every partial sum exact
        assert_eq!(tree, whole);
        assert_eq!(folded, whole);
        assert!(whole.nanflow().entries() > 0.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_fold() {
        let parts: Vec<_> = (0..64).map(|i| Count::ed(i as f64).unwrap()).collect();
        let par = par_merge(parts.clone()).unwrap().unwrap();
        let seq = merge_all(parts).unwrap().unwrap();
        assert_eq!(par, seq);
    }
}
