/// Errors surfaced by the kernel's `Poly`/`Clip` entry points.
///
/// Degenerate input (empty series, a zero-length segment, a zero-area
/// rect) is handled inline as a conservative `bool`/`Geometry` return,
/// never an `Err`. Invariant violations (an indexed ring disagreeing
/// with its own linear scan) are `debug_assert!`-gated panics, not part
/// of the public error surface — they indicate a bug in this crate, not
/// a caller mistake. Only the not-yet-implemented-operation category
/// gets a named variant, and every `Poly` method this kernel ships is
/// implemented, so no shipped predicate currently returns it.
#[derive(Debug, thiserror::Error)]
pub enum RingError {
    #[error("operation not implemented for this polygon predicate")]
    Unimplemented,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unimplemented_carries_a_distinct_message() {
        assert_eq!(RingError::Unimplemented.to_string(), "operation not implemented for this polygon predicate");
    }
}
