//! Natural ("alphanumeric") string order: `Route 2 < Route 10`.
//!
//! Both strings are split into runs of ASCII digits and runs of everything
//! else. Runs are compared pairwise:
//! - digit runs by numeric value (leading zeros ignored, any length);
//! - text runs by their Unicode lowercase mapping, char by char;
//! - a digit run sorts before a text run.
//!
//! A string that is a run-prefix of another sorts first. Strings that still
//! tie (`"Route 02"` / `"Route 2"`, `"Alpha"` / `"alpha"`) fall back to plain
//! `str` order, so the result is a total order and `Equal` means equal
//! strings. No locale data is involved.

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(self.rest.len(), |(i, _)| i);
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Run::Digits(run)
        } else {
            Run::Text(run)
        })
    }
}

fn cmp_run(a: Run<'_>, b: Run<'_>) -> Ordering {
    match (a, b) {
        (Run::Digits(x), Run::Digits(y)) => {
            let x = x.trim_start_matches('0');
            let y = y.trim_start_matches('0');
            x.len().cmp(&y.len()).then_with(|| x.cmp(y))
        }
        (Run::Text(x), Run::Text(y)) => x
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(y.chars().flat_map(char::to_lowercase)),
        (Run::Digits(_), Run::Text(_)) => Ordering::Less,
        (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
    }
}

/// Natural order of two strings; see the module docs.
pub fn alphanum_cmp(a: &str, b: &str) -> Ordering {
    let mut ra = Runs { rest: a };
    let mut rb = Runs { rest: b };
    loop {
        match (ra.next(), rb.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match cmp_run(x, y) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

/// String key ordered by [`alphanum_cmp`].
#[derive(Clone, Debug, Default, Hash)]
pub struct Alphanum<S>(pub S);

impl<S: AsRef<str>> PartialEq for Alphanum<S> {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}

impl<S: AsRef<str>> Eq for Alphanum<S> {}

impl<S: AsRef<str>> PartialOrd for Alphanum<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: AsRef<str>> Ord for Alphanum<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        alphanum_cmp(self.0.as_ref(), other.0.as_ref())
    }
}
