use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, Duration, Local, NaiveTime, Offset, TimeZone, Utc};

use cricconnect_db::Database;
use cricconnect_types::api::{ChatStats, DataEnvelope};

use crate::error::ApiError;
use crate::state::{AppState, run_blocking};

/// Recompute chat statistics from the store. `day_start` bounds `todayMessages`.
/// All figures come from one snapshot, so a concurrent insert or delete can
/// never make `todayMessages` exceed `totalMessages`.
pub fn collect_stats(db: &Database, day_start: DateTime<Utc>) -> anyhow::Result<ChatStats> {
    db.message_stats(day_start)
}

/// Midnight at the start of `now`'s calendar day, in `now`'s zone.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => start.with_timezone(&Utc),
        // Midnight skipped by a DST jump: fall back to the current offset.
        None => {
            let offset = Duration::seconds(i64::from(now.offset().fix().local_minus_utc()));
            (midnight - offset).and_utc()
        }
    }
}

/// GET /api/messages/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let day_start = start_of_day(&Local::now());

    let stats = run_blocking(&state, "Server error while fetching chat stats", move |db| {
        collect_stats(db, day_start)
    })
    .await?;

    Ok(Json(DataEnvelope::ok(stats)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn start_of_day_respects_zone() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let now = ist.with_ymd_and_hms(2025, 10, 15, 1, 30, 0).unwrap();

        // 00:00 IST is 18:30 UTC the previous day
        assert_eq!(
            start_of_day(&now),
            Utc.with_ymd_and_hms(2025, 10, 14, 18, 30, 0).unwrap()
        );
    }

    #[test]
    fn stats_count_today_and_distinct_authors() {
        let db = Database::open_in_memory().unwrap();
        let now = Utc::now();
        let day_start = now - Duration::hours(1);

        db.insert_message_at("amy", "old news", false, now - Duration::days(1)).unwrap();
        db.insert_message_at("bob", "fresh", false, now).unwrap();
        let gone = db.insert_message_at("amy", "again", true, now).unwrap();

        let stats = collect_stats(&db, day_start).unwrap();
        assert_eq!(
            stats,
            ChatStats {
                total_messages: 3,
                today_messages: 2,
                unique_users: 2,
                users: vec!["amy".into(), "bob".into()],
            }
        );

        db.delete_message(&gone.id).unwrap();
        let stats = collect_stats(&db, day_start).unwrap();
        assert_eq!(stats.total_messages, 2);
        assert_eq!(stats.today_messages, 1);
    }
}
