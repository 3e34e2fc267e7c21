pub mod client;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod pipeline;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use normalize::{category_label, normalize_detail};
pub use pipeline::{DetailFailurePolicy, PipelineOptions, SearchPipeline};
pub use types::{PlaceDetail, PlaceSummary};
