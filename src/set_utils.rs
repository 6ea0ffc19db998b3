//! Ordered-set primitives shared by the policy algebra and the preimage operators.
//!
//! Every "set" in this crate is represented as a sorted, deduplicated `Vec<T>`. Keeping sets in
//! canonical order lets fixed-point iteration (§4.6) test for convergence with a plain
//! `Vec::eq`, and lets `union`/`intersection`/`difference` run in a single linear merge pass
//! instead of going through a hash set.

/// Sort and deduplicate `items` in place, producing the canonical form of a set.
pub fn canonicalize<T: Ord>(items: &mut Vec<T>) {
    items.sort_unstable();
    items.dedup();
}

/// Build the canonical set of `T` from an arbitrary source, applying `canonicalize`.
pub fn from_iter<T: Ord, I: IntoIterator<Item = T>>(items: I) -> Vec<T> {
    let mut out: Vec<T> = items.into_iter().collect();
    canonicalize(&mut out);
    out
}

/// Comprehension: build the canonical sorted set of elements of `domain` satisfying `predicate`.
pub fn build<T, D, F>(domain: D, predicate: F) -> Vec<T>
where
    T: Ord,
    D: IntoIterator<Item = T>,
    F: Fn(&T) -> bool,
{
    from_iter(domain.into_iter().filter(|x| predicate(x)))
}

/// The union of two canonical sets, itself canonical.
pub fn union<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i].clone());
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j].clone());
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// The intersection of two canonical sets, itself canonical.
pub fn intersection<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// `a` with every element of `b` removed ("subtract"), itself canonical.
pub fn difference<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i].clone());
                i += 1;
            }
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out
}

/// Whether `a` is a subset of `b`. Both must already be canonical.
pub fn subset<T: Ord>(a: &[T], b: &[T]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < a.len() {
        if j >= b.len() {
            return false;
        }
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => return false,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    true
}

/// Whether `a` and `b` intersect at all, without materializing the intersection.
pub fn intersects<T: Ord>(a: &[T], b: &[T]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => return true,
        }
    }
    false
}
