pub mod aggregate;
pub mod classify;
pub mod rank;
pub mod score;
