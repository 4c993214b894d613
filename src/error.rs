//! Wire grid error handling
//!
//! Recoverable errors are bad geometry data (non-finite endpoints, taut or
//! unsolvable catenaries). Invariant violations such as a wire spanning two
//! local networks are programmer errors upstream and assert instead.

use thiserror::Error;

/// Type alias for wire grid operation results
pub type WireGridResult<T> = Result<T, WireGridError>;

#[derive(Debug, Error)]
pub enum WireGridError {
    #[error("degenerate wire geometry: {reason}")]
    DegenerateWire { reason: String },

    #[error("catenary solve failed over span {span:.3}: {reason}")]
    CatenarySolve { span: f64, reason: String },
}

/// Create a degenerate wire geometry error
pub fn degenerate_wire(reason: impl std::fmt::Display) -> WireGridError {
    WireGridError::DegenerateWire {
        reason: reason.to_string(),
    }
}

/// Create a catenary solve error
pub fn catenary_solve_error(span: f64, reason: impl std::fmt::Display) -> WireGridError {
    WireGridError::CatenarySolve {
        span,
        reason: reason.to_string(),
    }
}
