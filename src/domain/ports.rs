use crate::utils::error::Result;

/// A network communication capability handed to the service from outside.
pub trait NetworkClient: Send + Sync {
    /// Fetch the body at `url`.
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}
