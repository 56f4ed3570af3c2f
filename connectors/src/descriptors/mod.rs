// Descriptors grouped by credential shape: the query families share
// `uri::QueryUri`, the location family shares `uri::AuthorityUri`.

pub mod augmented;
pub mod location;
pub mod multi_field;
pub mod single_secret;

pub use augmented::*;
pub use location::*;
pub use multi_field::*;
pub use single_secret::*;
