// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear stepping through an ordered candidate list.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Forward,
    Backward,
    First,
    Last,
}

/// Pick the candidate after (or before) `origin`.
///
/// An origin that is not in `items` steps to the first item going forward
/// and to the last item going backward. Reaching an end either wraps or
/// yields `None`.
pub(crate) fn step<K>(items: &[K], origin: Option<K>, step: Step, wrap: bool) -> Option<K>
where
    K: Copy + Eq,
{
    let first = *items.first()?;
    let last = items[items.len() - 1];
    let origin_pos = origin.and_then(|o| items.iter().position(|&k| k == o));

    match step {
        Step::First => Some(first),
        Step::Last => Some(last),
        Step::Forward => match origin_pos {
            Some(pos) if pos + 1 < items.len() => Some(items[pos + 1]),
            Some(_) => wrap.then_some(first),
            None => Some(first),
        },
        Step::Backward => match origin_pos {
            Some(pos) if pos > 0 => Some(items[pos - 1]),
            Some(_) => wrap.then_some(last),
            None => Some(last),
        },
    }
}
