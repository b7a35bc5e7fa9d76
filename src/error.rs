use crate::ring::RingId;
use thiserror::Error;

/// Result type for fallible ring operations.
pub type Result<T, E = RingError> = std::result::Result<T, E>;

/// Contract violations detected by the ring.
///
/// The panicking entry points (`erase`, `Index`, [`Cursor::get`], ...) panic
/// with the `Display` message of one of these; the `try_*` entry points
/// return them instead.
///
/// [`Cursor::get`]: crate::ring::cursor::Cursor::get
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// The end position (the sentinel) holds no element, so it can be neither
    /// dereferenced nor erased.
    #[error("the end position of {ring} holds no element")]
    EndPosition { ring: RingId },

    /// A position was handed to a ring other than the one that produced it.
    #[error("position belongs to {found}, not to {expected}")]
    ForeignPosition { expected: RingId, found: RingId },

    /// The node a position refers to has been erased.
    #[error("position refers to an erased node of {ring}")]
    StalePosition { ring: RingId },

    /// Distance was requested between positions of two different rings.
    #[error("cannot measure the distance between positions of {left} and {right}")]
    MismatchedRings { left: RingId, right: RingId },
}

#[cfg(test)]
mod tests {
    use super::RingError;
    use crate::Ring;

    #[test]
    fn error_messages_name_the_rings() {
        let a = Ring::<i32>::new();
        let b = Ring::<i32>::new();
        let err = RingError::MismatchedRings {
            left: a.id(),
            right: b.id(),
        };
        let msg = err.to_string();
        assert!(msg.contains(&a.id().to_string()));
        assert!(msg.contains(&b.id().to_string()));

        let err = RingError::EndPosition { ring: a.id() };
        assert_eq!(
            err.to_string(),
            format!("the end position of {} holds no element", a.id())
        );
    }
}
