//! Sortedness predicates backing the inventory sorting assertions.
//!
//! The suite checks displayed order for self-consistency (the sequence
//! matches its own sort), not against a ground-truth catalog.

/// Whether a price sequence is sorted ascending.
#[must_use]
pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Whether a price sequence is sorted descending.
#[must_use]
pub fn is_non_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] >= pair[1])
}

/// Whether a name sequence is in lexicographic order.
#[must_use]
pub fn is_lexicographic<S: AsRef<str>>(names: &[S]) -> bool {
    names
        .windows(2)
        .all(|pair| pair[0].as_ref() <= pair[1].as_ref())
}

/// Whether a name sequence is in reverse lexicographic order.
#[must_use]
pub fn is_reverse_lexicographic<S: AsRef<str>>(names: &[S]) -> bool {
    names
        .windows(2)
        .all(|pair| pair[0].as_ref() >= pair[1].as_ref())
}
