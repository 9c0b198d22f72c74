//! Exhaustive order-law checker for comparators.
//!
//! Purpose
//! - Certify on a finite sample that a comparator is usable for sorting:
//!   reflexive (`cmp(x, x) == Equal`), antisymmetric
//!   (`cmp(a, b) == cmp(b, a).reverse()`) and transitive for each of the three
//!   cases (`<,<`, `=,=`, `>,>`).
//! - Report every violation with the compared items, the raw results and, for
//!   staged comparators, the deciding stage, so the broken stage is visible.
//!
//! Cost
//! - `n²` comparisons into a result matrix, then `O(n³)` lookups. Meant for
//!   test-sized inputs, not for production paths.

use std::cmp::Ordering;
use std::fmt;

use super::chain::{Comparator, Decision};

/// Which index triples are checked for transitivity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TripleScope {
    /// `i <= j <= k`.
    #[default]
    Ascending,
    /// Every ordered triple.
    All,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LawCheckCfg {
    pub triples: TripleScope,
    /// Stop after this many violations (`None`: report all). The first
    /// violation is always reported, so `Some(0)` acts as `Some(1)`.
    pub max_violations: Option<usize>,
}

/// One broken law with the items and results involved.
#[derive(Debug)]
pub enum Violation<'a, T> {
    /// `cmp(x, x) != Equal`.
    Reflexivity {
        index: usize,
        item: &'a T,
        result: Decision,
    },
    /// `cmp(a, b) != cmp(b, a).reverse()`.
    Antisymmetry {
        indices: (usize, usize),
        a: &'a T,
        b: &'a T,
        ab: Decision,
        ba: Decision,
    },
    /// `cmp(a, b)` and `cmp(b, c)` agree but `cmp(a, c)` does not follow.
    Transitivity {
        indices: (usize, usize, usize),
        a: &'a T,
        b: &'a T,
        c: &'a T,
        ab: Decision,
        bc: Decision,
        ac: Decision,
    },
}

impl<T: fmt::Debug> fmt::Display for Violation<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Reflexivity {
                index,
                item,
                result,
            } => write!(
                f,
                "reflexivity violated at [{index}]: cmp(x, x) = {result}\n  x: {item:?}"
            ),
            Violation::Antisymmetry {
                indices: (i, j),
                a,
                b,
                ab,
                ba,
            } => write!(
                f,
                "antisymmetry violated at [{i}, {j}]: cmp(a, b) = {ab}, cmp(b, a) = {ba}\n  a: {a:?}\n  b: {b:?}"
            ),
            Violation::Transitivity {
                indices: (i, j, k),
                a,
                b,
                c,
                ab,
                bc,
                ac,
            } => write!(
                f,
                "transitivity violated at [{i}, {j}, {k}]: cmp(a, b) = {ab}, cmp(b, c) = {bc}, cmp(a, c) = {ac}\n  a: {a:?}\n  b: {b:?}\n  c: {c:?}"
            ),
        }
    }
}

/// Outcome of [`check_order_laws`].
#[derive(Debug)]
pub struct LawReport<'a, T> {
    pub violations: Vec<Violation<'a, T>>,
    pub items: usize,
    pub pairs_checked: usize,
    pub triples_checked: usize,
    /// `max_violations` was hit; later pairs/triples were not checked.
    pub truncated: bool,
}

impl<'a, T> LawReport<'a, T> {
    #[inline]
    pub fn is_lawful(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_lawful() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl<T: fmt::Debug> fmt::Display for LawReport<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} violation(s) over {} items ({} pairs, {} triples checked{})",
            self.violations.len(),
            self.items,
            self.pairs_checked,
            self.triples_checked,
            if self.truncated { ", truncated" } else { "" }
        )?;
        for v in &self.violations {
            write!(f, "\n{v}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> std::error::Error for LawReport<'_, T> {}

struct Checker<'a, 'c, T, C: ?Sized> {
    items: &'a [T],
    cmp: &'c C,
    matrix: Vec<Ordering>,
    report: LawReport<'a, T>,
    limit: usize,
}

impl<'a, 'c, T, C: Comparator<T> + ?Sized> Checker<'a, 'c, T, C> {
    #[inline]
    fn at(&self, i: usize, j: usize) -> Ordering {
        self.matrix[i * self.items.len() + j]
    }

    /// Raw result from the matrix plus the deciding stage (recomputed).
    fn decision(&self, i: usize, j: usize) -> Decision {
        Decision {
            ordering: self.at(i, j),
            stage: self.cmp.decide(&self.items[i], &self.items[j]).stage,
        }
    }

    fn push(&mut self, v: Violation<'a, T>) -> bool {
        self.report.violations.push(v);
        if self.report.violations.len() >= self.limit {
            self.report.truncated = true;
            return false;
        }
        true
    }

    fn check_pair(&mut self, i: usize, j: usize) -> bool {
        self.report.pairs_checked += 1;
        let items = self.items;
        let ab = self.at(i, j);
        let ba = self.at(j, i);
        if i == j {
            if ab != Ordering::Equal {
                let v = Violation::Reflexivity {
                    index: i,
                    item: &items[i],
                    result: self.decision(i, i),
                };
                return self.push(v);
            }
        } else if ab != ba.reverse() {
            let v = Violation::Antisymmetry {
                indices: (i, j),
                a: &items[i],
                b: &items[j],
                ab: self.decision(i, j),
                ba: self.decision(j, i),
            };
            return self.push(v);
        }
        true
    }

    fn check_triple(&mut self, i: usize, j: usize, k: usize) -> bool {
        self.report.triples_checked += 1;
        let ab = self.at(i, j);
        let bc = self.at(j, k);
        if ab != bc {
            return true;
        }
        if self.at(i, k) == ab {
            return true;
        }
        let items = self.items;
        let v = Violation::Transitivity {
            indices: (i, j, k),
            a: &items[i],
            b: &items[j],
            c: &items[k],
            ab: self.decision(i, j),
            bc: self.decision(j, k),
            ac: self.decision(i, k),
        };
        self.push(v)
    }

    fn run(&mut self, scope: TripleScope) {
        let n = self.items.len();
        for i in 0..n {
            for j in i..n {
                if !self.check_pair(i, j) {
                    return;
                }
                let k_start = match scope {
                    TripleScope::Ascending => j,
                    TripleScope::All => 0,
                };
                for k in k_start..n {
                    if !self.check_triple(i, j, k) {
                        return;
                    }
                    if scope == TripleScope::All && i != j && !self.check_triple(j, i, k) {
                        return;
                    }
                }
            }
        }
    }
}

/// Check reflexivity, antisymmetry and transitivity of `cmp` over `items`.
///
/// Every pair `i <= j` is checked; triples follow `cfg.triples`.
pub fn check_order_laws<'a, T, C>(items: &'a [T], cmp: &C, cfg: LawCheckCfg) -> LawReport<'a, T>
where
    C: Comparator<T> + ?Sized,
{
    let n = items.len();
    let mut matrix = Vec::with_capacity(n * n);
    for a in items {
        for b in items {
            matrix.push(cmp.compare(a, b));
        }
    }
    let mut checker = Checker {
        items,
        cmp,
        matrix,
        report: LawReport {
            violations: Vec::new(),
            items: n,
            pairs_checked: 0,
            triples_checked: 0,
            truncated: false,
        },
        limit: cfg.max_violations.unwrap_or(usize::MAX).max(1),
    };
    checker.run(cfg.triples);
    checker.report
}

/// True when no adjacent pair is out of order.
pub fn is_sorted_by<T, C: Comparator<T> + ?Sized>(items: &[T], cmp: &C) -> bool {
    items
        .windows(2)
        .all(|w| cmp.compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Sorting the input and its reversal gives sequences that compare equal
/// element by element.
///
/// Only meaningful for comparators that already pass [`check_order_laws`];
/// the standard sort may panic on comparators that break the laws.
pub fn check_sort_determinism<T: Clone, C: Comparator<T> + ?Sized>(items: &[T], cmp: &C) -> bool {
    let mut forward = items.to_vec();
    forward.sort_by(|a, b| cmp.compare(a, b));
    let mut backward: Vec<T> = items.iter().rev().cloned().collect();
    backward.sort_by(|a, b| cmp.compare(a, b));
    forward
        .iter()
        .zip(&backward)
        .all(|(a, b)| cmp.compare(a, b) == Ordering::Equal)
}
