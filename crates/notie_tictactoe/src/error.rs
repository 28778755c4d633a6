//! Errors raised by board mutation.

use crate::position::Position;

/// Error that can occur when placing a piece.
///
/// Placement never mutates state when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// The index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}
