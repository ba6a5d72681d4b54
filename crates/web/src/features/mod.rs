pub mod standings;
pub mod tournaments;
