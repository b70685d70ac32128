mod loader;

pub use loader::{ContentLoadError, ContentLoader, ContentSource, Document};
