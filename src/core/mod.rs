// Model seam exports
pub mod recommender;
pub mod segmenter;

pub use recommender::{ModelError, PlaceholderRecommender, Recommender};
pub use segmenter::{PlaceholderSegmenter, Segmenter};
