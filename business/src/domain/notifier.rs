/// User-facing notification channel (toasts, banners, ...).
///
/// Receives the literal message of a [`CartNotice`](crate::domain::cart::notice::CartNotice).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
