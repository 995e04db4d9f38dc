pub mod growth;
pub mod history;
pub mod profile;
pub mod scores;
pub mod weights;
