pub mod feature_vector;
pub mod ranker;
pub mod recommendations;
pub mod similarity;
pub mod survey;

pub use feature_vector::{FeatureSchema, FeatureSource, FeatureVector, TASTE_V1, TASTE_V2};
pub use recommendations::{rank_dishes, recommend};
