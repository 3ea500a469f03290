pub mod language;
pub mod matcher;
pub mod recommender;
