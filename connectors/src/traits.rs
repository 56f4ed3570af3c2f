use super::error::ConnectorError;
use super::kind::ConnectorKind;

/// Main trait that all connector descriptors must implement
pub trait Connector: Send + Sync {
    /// Returns the connector kind, which fixes the URI scheme
    fn kind(&self) -> ConnectorKind;

    /// Renders the descriptor into its connection URI
    ///
    /// The result is deterministic: the same field values always produce a
    /// byte-identical string. Query parameters are percent-encoded, and a
    /// parameter whose value is empty is omitted from the output entirely.
    fn uri(&self) -> Result<String, ConnectorError>;
}
