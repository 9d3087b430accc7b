pub mod fetch;
pub mod pipeline;
pub mod scan;
pub mod select;
pub mod title;

pub use fetch::Fetcher;
pub use pipeline::{Pipeline, ProcessedNews};
pub use scan::{scan, Candidate, Heuristic};
pub use select::{normalize, select};
pub use title::extract_title;

pub mod prelude {
    pub use crate::fetch::Fetcher;
    pub use crate::pipeline::{Pipeline, ProcessedNews};
    pub use crate::scan::{scan, Candidate, Heuristic};
    pub use crate::select::select;
}
