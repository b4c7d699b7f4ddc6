mod crud;
mod rejection;
mod view;

pub use crud::CrudRepository;
pub use rejection::Rejection;
pub use view::ViewRepository;

/// The base trait every storage backend implements.
///
/// Entity and view access are layered on top of it via [`CrudRepository`] and
/// [`ViewRepository`], one implementation per model.
pub trait Repository {
    /// Infrastructure failures (connectivity, constraint violations, malformed
    /// SQL). Their `Display` text is surfaced to callers verbatim.
    type Error: std::error::Error + Send + Sync + 'static;
}
