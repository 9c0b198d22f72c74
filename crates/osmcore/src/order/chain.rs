//! Lexicographic composition of comparison stages.
//!
//! A `ChainComparator` is data: an ordered list of named stages. `compare`
//! walks the list and returns the first non-`Equal` result. Stages added with
//! `key` compare an `Ord` key and are total orders by construction; the
//! lexicographic composition of total preorders is again a total preorder,
//! so a chain built only from `key` stages always satisfies the order laws.
//!
//! Caller obligation: do not mutate sort-relevant fields of the items while a
//! sort over them is in flight.

use std::cmp::Ordering;
use std::fmt;

/// A reusable comparison over `T`.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Ordering plus the stage that decided it, when the comparator has stages.
    fn decide(&self, a: &T, b: &T) -> Decision {
        Decision {
            ordering: self.compare(a, b),
            stage: None,
        }
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Result of a comparison with the name of the deciding stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub ordering: Ordering,
    /// `None` when every stage tied (or the comparator has no stages).
    pub stage: Option<&'static str>,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.ordering {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        };
        match self.stage {
            Some(stage) => write!(f, "{sign} (by {stage})"),
            None => write!(f, "{sign}"),
        }
    }
}

type StageFn<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

struct Stage<T> {
    name: &'static str,
    cmp: StageFn<T>,
}

/// Ordered list of comparison stages; first non-`Equal` stage wins.
pub struct ChainComparator<T> {
    stages: Vec<Stage<T>>,
}

impl<T> ChainComparator<T> {
    pub fn builder() -> ChainBuilder<T> {
        ChainBuilder { stages: Vec::new() }
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name)
    }

    /// Stable sort.
    pub fn sort(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    pub fn sorted(&self, mut items: Vec<T>) -> Vec<T> {
        self.sort(&mut items);
        items
    }
}

impl<T> Comparator<T> for ChainComparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        for stage in &self.stages {
            match (stage.cmp)(a, b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    fn decide(&self, a: &T, b: &T) -> Decision {
        for stage in &self.stages {
            let ordering = (stage.cmp)(a, b);
            if ordering != Ordering::Equal {
                return Decision {
                    ordering,
                    stage: Some(stage.name),
                };
            }
        }
        Decision {
            ordering: Ordering::Equal,
            stage: None,
        }
    }
}

impl<T> fmt::Debug for ChainComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainComparator")
            .field("stages", &self.stage_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`ChainComparator`]; stages run in insertion order.
pub struct ChainBuilder<T> {
    stages: Vec<Stage<T>>,
}

impl<T: 'static> ChainBuilder<T> {
    /// Compare by an extracted `Ord` key.
    pub fn key<K, F>(mut self, name: &'static str, extract: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.stages.push(Stage {
            name,
            cmp: Box::new(move |a: &T, b: &T| extract(a).cmp(&extract(b))),
        });
        self
    }

    /// Custom stage. Must be a total preorder on `T`; the order-law harness
    /// in `order::laws` checks that on sample data.
    pub fn by<F>(mut self, name: &'static str, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.stages.push(Stage {
            name,
            cmp: Box::new(cmp),
        });
        self
    }

    pub fn build(self) -> ChainComparator<T> {
        ChainComparator {
            stages: self.stages,
        }
    }
}
