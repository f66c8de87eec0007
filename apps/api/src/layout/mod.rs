// Layout: text measurement, fixed-width document layout, pagination and page navigation.
// Layout is CPU-bound; the export path runs it inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod measure;
pub mod navigator;
pub mod page;
pub mod paginator;
pub mod style;

pub use measure::layout_document;
pub use navigator::PageNavigator;
pub use page::PageGeometry;
pub use paginator::{paginate, PageDescriptor};
