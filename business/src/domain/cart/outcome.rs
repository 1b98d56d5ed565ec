/// Result kind of a cart operation.
///
/// Operations never return errors to their caller; this tag is what they
/// report instead, alongside any notice sent to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    Ok,
    OutOfStock,
    NotFound,
    TransportError,
    /// Request ignored on purpose (non-positive amount). No notice is sent.
    InvalidNoOp,
}

impl CartOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, CartOutcome::Ok)
    }
}

impl std::fmt::Display for CartOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartOutcome::Ok => write!(f, "ok"),
            CartOutcome::OutOfStock => write!(f, "out_of_stock"),
            CartOutcome::NotFound => write!(f, "not_found"),
            CartOutcome::TransportError => write!(f, "transport_error"),
            CartOutcome::InvalidNoOp => write!(f, "invalid_no_op"),
        }
    }
}
