use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Tournament;

/// Request payload for creating a new tournament. The id is generated by
/// the store, everything else is taken as-is.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTournamentRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "titulo must be between 1 and 255 characters"
    ))]
    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "imgLink")]
    pub img_link: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "fase")]
    pub phase: String,

    #[serde(rename = "estado")]
    pub status: String,
}

/// In-memory tournament list. This is the sole store: contents live for
/// the process lifetime and are seeded with a fixed set at startup.
#[derive(Clone)]
pub struct TournamentStore {
    tournaments: Arc<RwLock<Vec<Tournament>>>,
}

impl TournamentStore {
    pub fn new(seed: Vec<Tournament>) -> Self {
        Self {
            tournaments: Arc::new(RwLock::new(seed)),
        }
    }

    /// Store seeded with the launch line-up.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            Tournament {
                id: 1,
                title: "Copa del mundo 2026".to_string(),
                img_link: "Mundial.jpeg".to_string(),
                description: "Inicia Junio 2026".to_string(),
                phase: "Previa".to_string(),
                status: "Proximo".to_string(),
            },
            Tournament {
                id: 2,
                title: "F1 2026".to_string(),
                img_link: "f1.webp".to_string(),
                description: "Inicia Junio 2025".to_string(),
                phase: "Ultimas carreras".to_string(),
                status: "Activo".to_string(),
            },
            Tournament {
                id: 3,
                title: "Moto Gp 2025".to_string(),
                img_link: "motoGp.jpg".to_string(),
                description: "Finalizon en noviembre 2025".to_string(),
                phase: "Fases de grupos".to_string(),
                status: "Activo".to_string(),
            },
        ])
    }

    /// Full list in insertion order.
    pub async fn list(&self) -> Vec<Tournament> {
        self.tournaments.read().await.clone()
    }

    /// Append a new tournament with a generated id (max existing + 1,
    /// computed under the same write guard as the append so ids stay
    /// unique). Returns the stored record.
    pub async fn create(&self, request: CreateTournamentRequest) -> Tournament {
        let mut tournaments = self.tournaments.write().await;
        let id = tournaments.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let tournament = Tournament {
            id,
            title: request.title,
            img_link: request.img_link,
            description: request.description,
            phase: request.phase,
            status: request.status,
        };
        tournaments.push(tournament.clone());
        tournament
    }
}

impl Default for TournamentStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str) -> CreateTournamentRequest {
        CreateTournamentRequest {
            title: title.to_string(),
            img_link: "x.png".to_string(),
            description: "d".to_string(),
            phase: "f".to_string(),
            status: "Activo".to_string(),
        }
    }

    #[tokio::test]
    async fn seeded_store_lists_launch_lineup_in_order() {
        let store = TournamentStore::seeded();
        let tournaments = store.list().await;

        assert_eq!(tournaments.len(), 3);
        assert_eq!(
            tournaments.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(tournaments[0].title, "Copa del mundo 2026");
    }

    #[tokio::test]
    async fn ids_continue_from_max_regardless_of_titles() {
        let store = TournamentStore::seeded();

        let a = store.create(request("Zeta")).await;
        let b = store.create(request("Alfa")).await;
        let c = store.create(request("Medio")).await;

        assert_eq!((a.id, b.id, c.id), (4, 5, 6));
        assert_eq!(store.list().await.len(), 6);
    }

    #[tokio::test]
    async fn created_record_echoes_submitted_fields() {
        let store = TournamentStore::seeded();

        let created = store.create(request("X")).await;

        assert_eq!(created.id, 4);
        assert_eq!(created.title, "X");
        assert_eq!(created.img_link, "x.png");
        assert_eq!(created.description, "d");
        assert_eq!(created.phase, "f");
        assert_eq!(created.status, "Activo");
    }

    #[tokio::test]
    async fn empty_store_starts_ids_at_one() {
        let store = TournamentStore::new(vec![]);

        let created = store.create(request("Primero")).await;

        assert_eq!(created.id, 1);
    }

    #[test]
    fn blank_title_fails_validation() {
        let mut req = request("");
        assert!(req.validate().is_err());

        req.title = "Copa".to_string();
        assert!(req.validate().is_ok());
    }
}
