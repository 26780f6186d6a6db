use crate::domain::ports::NetworkClient;

const VALUE: &str = "example";

/// Wraps a borrowed network client.
///
/// The client is owned by the caller and is fixed at construction. `get`
/// never touches it.
#[derive(Debug)]
pub struct Service<'a, C> {
    client: Option<&'a C>,
}

impl<'a, C: NetworkClient> Service<'a, C> {
    /// Build a service around `client`. `None` is accepted.
    pub fn new(client: Option<&'a C>) -> Self {
        tracing::debug!(has_client = client.is_some(), "Constructing service");
        Self { client }
    }

    /// Returns "example".
    pub fn get(&self) -> &'static str {
        VALUE
    }

    pub fn client(&self) -> Option<&'a C> {
        self.client
    }
}
