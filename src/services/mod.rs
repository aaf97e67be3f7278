pub mod providers;
pub mod recommendations;

pub use providers::{PosterProvider, TmdbProvider};
pub use recommendations::{recommend_with_posters, Recommender};
