//! Minimal parser combinators over a "-"-split subtag sequence.
//!
//! Every parser is a plain function from the remaining segment slice to
//! `Option<(value, rest)>`. Failure is `None`; there are no partial
//! results. A successful parser always consumes at least one segment,
//! which is what keeps [`many`] and [`some`] from looping.

/// The unconsumed input: a borrowed slice of "-"-separated segments.
pub(crate) type Segments<'a> = &'a [&'a str];

/// Parser outcome: the matched value plus whatever is left to consume.
pub(crate) type PResult<'a, T> = Option<(T, Segments<'a>)>;

/// Consume the head segment if it satisfies `pred`. Fails on empty input
/// and does not skip a non-matching head.
pub(crate) fn pop_if<'a>(segs: Segments<'a>, pred: impl Fn(&str) -> bool) -> PResult<'a, &'a str> {
    let (head, rest) = segs.split_first()?;
    pred(head).then(|| (*head, rest))
}

/// Consume the head segment if its length lies in `min..=max` and every
/// character belongs to `class`. Empty segments never match (`min` is at
/// least 1 in every production).
pub(crate) fn repeat<'a>(
    segs: Segments<'a>,
    min: usize,
    max: usize,
    class: impl Fn(char) -> bool,
) -> PResult<'a, &'a str> {
    pop_if(segs, |s| {
        (min..=max).contains(&s.len()) && s.chars().all(|c| class(c))
    })
}

/// Consume the head segment if it equals `literal` exactly.
pub(crate) fn symbol<'a>(segs: Segments<'a>, literal: &str) -> PResult<'a, &'a str> {
    pop_if(segs, |s| s == literal)
}

/// Try `alternatives` in order against the same input and return the
/// first success. The order is part of the grammar, not an optimization.
pub(crate) fn one_of<'a, T>(
    segs: Segments<'a>,
    alternatives: &[&dyn Fn(Segments<'a>) -> PResult<'a, T>],
) -> PResult<'a, T> {
    alternatives.iter().find_map(|parser| parser(segs))
}

/// Zero-or-one. Never fails: on a miss the input is returned untouched.
pub(crate) fn maybe<'a, T>(
    segs: Segments<'a>,
    parser: impl Fn(Segments<'a>) -> PResult<'a, T>,
) -> (Option<T>, Segments<'a>) {
    match parser(segs) {
        Some((value, rest)) => (Some(value), rest),
        None => (None, segs),
    }
}

/// Zero-or-more, collecting values in match order. Never fails.
pub(crate) fn many<'a, T>(
    segs: Segments<'a>,
    parser: impl Fn(Segments<'a>) -> PResult<'a, T>,
) -> (Vec<T>, Segments<'a>) {
    let mut values = Vec::new();
    let mut rest = segs;
    while let Some((value, next)) = parser(rest) {
        values.push(value);
        rest = next;
    }
    (values, rest)
}

/// One-or-more: fails if the first application fails.
pub(crate) fn some<'a, T>(
    segs: Segments<'a>,
    parser: impl Fn(Segments<'a>) -> PResult<'a, T>,
) -> PResult<'a, Vec<T>> {
    let (first, rest) = parser(segs)?;
    let (more, rest) = many(rest, &parser);
    let mut values = vec![first];
    values.extend(more);
    Some((values, rest))
}

/// Transform a successful result's value; failure passes through.
pub(crate) fn map<'a, T, U>(result: PResult<'a, T>, f: impl FnOnce(T) -> U) -> PResult<'a, U> {
    result.map(|(value, rest)| (f(value), rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters<'a>(segs: Segments<'a>) -> PResult<'a, &'a str> {
        pop_if(segs, |s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()))
    }

    #[test]
    fn pop_if_fails_on_empty_input() {
        assert_eq!(pop_if(&[], |_| true), None);
    }

    #[test]
    fn pop_if_does_not_skip() {
        let segs = ["123", "abc"];
        assert_eq!(letters(&segs), None);
    }

    fn alpha<'a>(segs: Segments<'a>, min: usize, max: usize) -> PResult<'a, &'a str> {
        repeat(segs, min, max, |c| c.is_ascii_alphabetic())
    }

    #[test]
    fn repeat_bounds_are_inclusive() {
        assert_eq!(alpha(&["abcd"], 2, 4), Some(("abcd", &[][..])));
        assert_eq!(alpha(&["ab"], 2, 4), Some(("ab", &[][..])));
        assert_eq!(alpha(&["a"], 2, 4), None);
        assert_eq!(alpha(&["abcde"], 2, 4), None);
        assert_eq!(alpha(&["ab1"], 2, 4), None);
        assert_eq!(alpha(&[""], 1, 4), None);
    }

    #[test]
    fn symbol_matches_exactly() {
        let segs = ["x", "rest"];
        assert_eq!(symbol(&segs, "x"), Some(("x", &segs[1..])));
        assert_eq!(symbol(&segs, "X"), None);
    }

    #[test]
    fn one_of_returns_first_success() {
        let segs = ["ab"];
        let got = one_of(
            &segs,
            &[
                &|s| map(symbol(s, "zz"), |_| 1),
                &|s| map(letters(s), |_| 2),
                &|s| map(letters(s), |_| 3),
            ],
        );
        assert_eq!(got, Some((2, &[][..])));
    }

    #[test]
    fn one_of_fails_when_all_fail() {
        let got: PResult<&str> = one_of(&["1"], &[&|s| letters(s), &|s| symbol(s, "x")]);
        assert_eq!(got, None);
    }

    #[test]
    fn maybe_leaves_input_on_miss() {
        let segs = ["123"];
        let (value, rest) = maybe(&segs, letters);
        assert_eq!(value, None);
        assert_eq!(rest, &segs[..]);
    }

    #[test]
    fn many_collects_in_order_and_stops() {
        let segs = ["ab", "cd", "12", "ef"];
        let (values, rest) = many(&segs, letters);
        assert_eq!(values, vec!["ab", "cd"]);
        assert_eq!(rest, &segs[2..]);
    }

    #[test]
    fn many_accepts_zero_matches() {
        let segs = ["12"];
        let (values, rest) = many(&segs, letters);
        assert!(values.is_empty());
        assert_eq!(rest, &segs[..]);
    }

    #[test]
    fn some_requires_one_match() {
        assert_eq!(some(&["12", "ab"], letters), None);
        let segs = ["ab", "cd"];
        assert_eq!(some(&segs, letters), Some((vec!["ab", "cd"], &[][..])));
    }
}
