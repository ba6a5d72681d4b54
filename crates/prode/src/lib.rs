pub mod cache;
pub mod error;
pub mod extract;
pub mod models;
pub mod schedule;
pub mod tournaments;

pub use cache::StandingsCache;
pub use error::{Result, ScrapeError};
pub use schedule::RefreshSchedule;
pub use tournaments::TournamentStore;
