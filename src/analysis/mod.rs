pub mod grader;
pub mod grouping;
pub mod recommender;
pub mod summary;
