use chrono::{Datelike, Duration, Local, NaiveDateTime, Weekday};
use tracing::{info, warn};

use crate::cache::StandingsCache;

/// Calendar rule for the recurring standings refresh: a set of weekdays
/// and a set of on-the-hour times. The source only changes around race
/// weekends, so the default polls Saturday and Sunday at 08:00 and 20:00
/// local time.
#[derive(Debug, Clone)]
pub struct RefreshSchedule {
    weekdays: Vec<Weekday>,
    hours: Vec<u32>,
}

impl Default for RefreshSchedule {
    fn default() -> Self {
        Self::new(vec![Weekday::Sat, Weekday::Sun], vec![8, 20])
    }
}

impl RefreshSchedule {
    /// Hours outside 0..24 are discarded.
    pub fn new(weekdays: Vec<Weekday>, hours: Vec<u32>) -> Self {
        let mut hours: Vec<u32> = hours.into_iter().filter(|h| *h < 24).collect();
        hours.sort_unstable();
        hours.dedup();
        Self { weekdays, hours }
    }

    /// Earliest schedule point strictly after `after`, or `None` when the
    /// rule is empty.
    pub fn next_fire(&self, after: NaiveDateTime) -> Option<NaiveDateTime> {
        // A non-empty rule always has a point within the next 7 days.
        (0..=7)
            .map(|offset| after.date() + Duration::days(offset))
            .filter(|date| self.weekdays.contains(&date.weekday()))
            .flat_map(|date| {
                self.hours
                    .iter()
                    .filter_map(move |&hour| date.and_hms_opt(hour, 0, 0))
            })
            .find(|candidate| *candidate > after)
    }

    /// Run the refresh loop forever: sleep until the next schedule point,
    /// refresh the cache from `url`, repeat. Spawned as a background task
    /// at startup, with the same source URL the read fallback uses.
    pub async fn run(self, cache: StandingsCache, client: reqwest::Client, url: String) {
        loop {
            let now = Local::now().naive_local();
            let Some(next) = self.next_fire(now) else {
                warn!("refresh schedule is empty, scheduler exiting");
                return;
            };
            let wait = (next - now).to_std().unwrap_or_default();
            info!(next = %next, "next scheduled standings refresh");
            tokio::time::sleep(wait).await;
            cache.refresh(&client, &url).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn midweek_fires_on_saturday_morning() {
        // 2025-06-11 is a Wednesday.
        let next = RefreshSchedule::default().next_fire(at(2025, 6, 11, 12, 0));

        assert_eq!(next, Some(at(2025, 6, 14, 8, 0)));
    }

    #[test]
    fn saturday_morning_fires_same_evening() {
        let next = RefreshSchedule::default().next_fire(at(2025, 6, 14, 9, 0));

        assert_eq!(next, Some(at(2025, 6, 14, 20, 0)));
    }

    #[test]
    fn sunday_night_wraps_to_next_saturday() {
        let next = RefreshSchedule::default().next_fire(at(2025, 6, 15, 21, 0));

        assert_eq!(next, Some(at(2025, 6, 21, 8, 0)));
    }

    #[test]
    fn schedule_point_itself_is_excluded() {
        let next = RefreshSchedule::default().next_fire(at(2025, 6, 14, 8, 0));

        assert_eq!(next, Some(at(2025, 6, 14, 20, 0)));
    }

    #[test]
    fn empty_rule_never_fires() {
        let schedule = RefreshSchedule::new(vec![], vec![8]);

        assert_eq!(schedule.next_fire(at(2025, 6, 11, 12, 0)), None);
    }

    #[test]
    fn out_of_range_hours_are_discarded() {
        let schedule = RefreshSchedule::new(vec![Weekday::Sat], vec![26, 8]);

        assert_eq!(
            schedule.next_fire(at(2025, 6, 11, 12, 0)),
            Some(at(2025, 6, 14, 8, 0))
        );
    }

    /// Minimal HTTP server handing the same page to every request.
    async fn serve_page(page: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    page.len(),
                    page
                );
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });
        format!("http://{addr}/")
    }

    #[tokio::test(start_paused = true)]
    async fn run_polls_the_injected_source() {
        const PAGE: &str = r#"<table class="Table-module_table__cKsW2"><tbody>
            <tr><td>1</td><td>Oscar Piastri</td><td>AUS</td><td>McLaren Mercedes</td><td>284</td></tr>
            </tbody></table>"#;

        let url = serve_page(PAGE).await;
        let cache = StandingsCache::new();
        // Every hour of every day, so the next point is at most an hour out.
        let schedule = RefreshSchedule::new(
            vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ],
            (0..24).collect(),
        );

        let task = tokio::spawn(schedule.run(cache.clone(), reqwest::Client::new(), url));

        // Paused clock: each sleep advances virtual time and lets the loop fire.
        for _ in 0..180 {
            if !cache.is_empty().await {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        }
        task.abort();

        let rows = cache.snapshot().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Oscar Piastri");
    }
}
