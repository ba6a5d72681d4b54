use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::models::StandingsRow;

/// Drivers' standings page for the current season.
pub const STANDINGS_URL: &str = "https://www.formula1.com/en/results/2025/drivers";

/// Class marker the source puts on its results table. Generated by the
/// site's CSS tooling, so it changes when they redeploy styles; when that
/// happens extraction degrades to `TableNotFound` until the marker is
/// updated here.
const TABLE_CLASS: &str = "Table-module_table__cKsW2";

/// Fetch the standings page and extract the ranking rows.
pub async fn fetch_standings(client: &reqwest::Client, url: &str) -> Result<Vec<StandingsRow>> {
    debug!(url, "fetching standings page");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ScrapeError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| ScrapeError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    parse_standings(&Html::parse_document(&body))
}

/// Extract ranking rows from a parsed standings page.
///
/// Rows need at least five cells; cell 0 is the position, cell 1 the full
/// name, cell 3 the team and cell 4 the points. Rows whose position is not
/// an integer or whose name is empty are dropped, never surfaced as
/// partial data.
pub fn parse_standings(document: &Html) -> Result<Vec<StandingsRow>> {
    let table_selector = Selector::parse(&format!("table.{TABLE_CLASS}"))?;
    let table = document
        .select(&table_selector)
        .next()
        .ok_or(ScrapeError::TableNotFound)?;

    let tbody_row_selector = Selector::parse("tbody tr")?;
    let row_selector = Selector::parse("tr")?;

    let mut rows: Vec<ElementRef> = table.select(&tbody_row_selector).collect();
    if rows.is_empty() {
        // No tbody: everything is a direct child, first row is the header.
        rows = table.select(&row_selector).skip(1).collect();
    }

    let cell_selector = Selector::parse("th, td")?;
    let parsed: Vec<StandingsRow> = rows
        .into_iter()
        .filter_map(|row| parse_row(row, &cell_selector))
        .collect();

    debug!(count = parsed.len(), "parsed standings rows");
    Ok(parsed)
}

fn parse_row(row: ElementRef, cell_selector: &Selector) -> Option<StandingsRow> {
    let cells: Vec<ElementRef> = row.select(cell_selector).collect();
    if cells.len() < 5 {
        return None;
    }

    let position = cell_text(cells[0]).parse().ok()?;
    let name = cell_text(cells[1]);
    if name.is_empty() {
        return None;
    }

    Some(StandingsRow {
        position,
        name,
        team: cell_text(cells[3]),
        points: cell_text(cells[4]),
    })
}

/// Concatenated, trimmed text content of a cell.
fn cell_text(cell: ElementRef) -> String {
    cell.text().map(str::trim).collect()
}
