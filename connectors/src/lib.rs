pub mod descriptors;
pub mod error;
pub mod kind;
pub mod registry;
pub mod traits;

mod uri;

pub use descriptors::*;
pub use error::ConnectorError;
pub use kind::ConnectorKind;
pub use registry::SourceConnector;
pub use traits::Connector;
