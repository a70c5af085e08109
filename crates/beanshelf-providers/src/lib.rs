// Error types
pub mod error;

// Record normalization (field alias tables)
pub mod normalize;

// Payload shape unwrapping
pub mod payload;

// HTTP seam
pub mod transport;

// Endpoint layout
pub mod endpoints;

// Bundled fallback dataset
pub mod bundled;

// Fallback-chained fetching
pub mod fetcher;

pub use bundled::BundledDataset;
pub use endpoints::{DEFAULT_TIMEOUT, Endpoints};
pub use error::{Error, Result};
pub use fetcher::{Catalog, CatalogSource, SourceFetcher};
pub use normalize::{BEAN_SCHEMA, FieldMapping, normalize_bean};
pub use payload::{SinglePayload, unwrap_collection, unwrap_single};
pub use transport::{HttpTransport, Transport};
