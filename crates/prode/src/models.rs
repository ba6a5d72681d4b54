use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One driver's entry in the championship standings.
///
/// Field names on the wire stay in Spanish to keep the public API stable.
/// Points are kept as display text because the source mixes numbers with
/// markers such as "DNF".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StandingsRow {
    #[serde(rename = "posicion")]
    pub position: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    pub team: String,
    #[serde(rename = "puntos")]
    pub points: String,
}

/// Response envelope for the standings endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Standings {
    #[serde(rename = "clasificacion")]
    pub rows: Vec<StandingsRow>,
}

/// A tournament entry shown on the landing page. Ids are assigned
/// sequentially by the store; all other fields are free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Tournament {
    pub id: u32,
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
