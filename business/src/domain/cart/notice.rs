/// Messages sent through the [`Notifier`](crate::domain::notifier::Notifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartNotice {
    OutOfStock,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl CartNotice {
    pub fn message(&self) -> &'static str {
        match self {
            CartNotice::OutOfStock => "requested quantity out of stock",
            CartNotice::AddFailed => "error adding product",
            CartNotice::RemoveFailed => "error removing product",
            CartNotice::UpdateFailed => "error changing product quantity",
        }
    }
}

impl std::fmt::Display for CartNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
