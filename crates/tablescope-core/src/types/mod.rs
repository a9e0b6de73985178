//! Types exchanged between the catalog and its host.
//!
//! Names and prefixes identify tables, handles bind those identities to the
//! catalog instance that issued them, and metadata types carry column
//! definitions as the source reported them.

mod dialect;
mod handle;
mod metadata;
mod names;

pub use dialect::Dialect;
pub use handle::{ColumnHandle, HandleKind, TableHandle};
pub use metadata::{ColumnMetadata, TableMetadata};
pub use names::{ConnectorId, SchemaTableName, SchemaTablePrefix};
