//! Built-in match and prediction data served by the read-only catalog routes.

use chrono::{DateTime, Duration, Utc};

use cricconnect_types::models::{
    Match, MatchStatus, MatchType, PlayerPick, Prediction, TeamOdds, TeamScore,
};

fn team(name: &str, flag: &str, score: &str, overs: &str) -> TeamScore {
    TeamScore {
        name: name.into(),
        flag: flag.into(),
        score: score.into(),
        overs: overs.into(),
    }
}

fn odds(name: &str, flag: &str, win_probability: u8) -> TeamOdds {
    TeamOdds {
        name: name.into(),
        flag: flag.into(),
        win_probability,
    }
}

#[allow(clippy::too_many_arguments)]
fn live(
    id: u32,
    team1: TeamScore,
    team2: TeamScore,
    venue: &str,
    match_type: MatchType,
    toss: &str,
    run_rate: &str,
    now: DateTime<Utc>,
) -> Match {
    Match {
        id,
        team1,
        team2,
        status: MatchStatus::Live,
        venue: venue.into(),
        match_type,
        toss_info: Some(toss.into()),
        result: None,
        current_run_rate: run_rate.into(),
        date: now,
    }
}

#[allow(clippy::too_many_arguments)]
fn completed(
    id: u32,
    team1: TeamScore,
    team2: TeamScore,
    venue: &str,
    match_type: MatchType,
    result: &str,
    run_rate: &str,
    date: DateTime<Utc>,
) -> Match {
    Match {
        id,
        team1,
        team2,
        status: MatchStatus::Completed,
        venue: venue.into(),
        match_type,
        toss_info: None,
        result: Some(result.into()),
        current_run_rate: run_rate.into(),
        date,
    }
}

/// Match list; live matches are dated `now`, finished ones a day or two back.
pub fn matches(now: DateTime<Utc>) -> Vec<Match> {
    vec![
        live(
            1,
            team("India", "🇮🇳", "287/6", "48.3"),
            team("Australia", "🇦🇺", "245/10", "45.2"),
            "Melbourne Cricket Ground",
            MatchType::Odi,
            "India won the toss and chose to bat",
            "5.92",
            now,
        ),
        completed(
            2,
            team("England", "🏴󠁧󠁢󠁥󠁮󠁧󠁿", "178/4", "20.0"),
            team("Pakistan", "🇵🇰", "175/8", "20.0"),
            "Lord's Cricket Ground",
            MatchType::T20,
            "England won by 6 wickets",
            "8.90",
            now - Duration::days(1),
        ),
        live(
            3,
            team("South Africa", "🇿🇦", "312/7", "88.0"),
            team("New Zealand", "🇳🇿", "198/3", "56.0"),
            "Cape Town Stadium",
            MatchType::Test,
            "South Africa won the toss and chose to bat",
            "3.55",
            now,
        ),
        completed(
            4,
            team("West Indies", "🏴", "245/9", "50.0"),
            team("Sri Lanka", "🇱🇰", "248/5", "47.3"),
            "Kensington Oval",
            MatchType::Odi,
            "Sri Lanka won by 5 wickets",
            "5.22",
            now - Duration::days(2),
        ),
        live(
            5,
            team("Bangladesh", "🇧🇩", "156/8", "20.0"),
            team("Afghanistan", "🇦🇫", "132/7", "18.2"),
            "Shere Bangla Stadium",
            MatchType::T20,
            "Bangladesh won the toss and chose to bat",
            "7.80",
            now,
        ),
        live(
            6,
            team("Ireland", "🇮🇪", "198/10", "48.1"),
            team("Zimbabwe", "🇿🇼", "156/6", "35.0"),
            "Harare Sports Club",
            MatchType::Odi,
            "Ireland won the toss and chose to bat",
            "4.11",
            now,
        ),
    ]
}

pub fn predictions() -> Vec<Prediction> {
    let pick = |name: &str, team: &str, flag: &str, probability: u8, stats: &str| PlayerPick {
        name: name.into(),
        team: team.into(),
        flag: flag.into(),
        probability,
        stats: stats.into(),
    };
    let factors = |items: [&str; 3]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        Prediction {
            id: 1,
            team1: odds("India", "🇮🇳", 68),
            team2: odds("Australia", "🇦🇺", 32),
            match_type: MatchType::Odi,
            venue: "Melbourne Cricket Ground".into(),
            date: "Oct 15, 2025".into(),
            player_of_match: pick(
                "Virat Kohli",
                "India",
                "🇮🇳",
                35,
                "Avg: 52.4 | SR: 89.2",
            ),
            key_factors: factors([
                "Recent form favors India",
                "Home advantage for Australia",
                "Head-to-head: India leads 6-4",
            ]),
        },
        Prediction {
            id: 2,
            team1: odds("England", "🏴󠁧󠁢󠁥󠁮󠁧󠁿", 55),
            team2: odds("Pakistan", "🇵🇰", 45),
            match_type: MatchType::T20,
            venue: "Lord's Cricket Ground".into(),
            date: "Oct 18, 2025".into(),
            player_of_match: pick(
                "Jos Buttler",
                "England",
                "🏴󠁧󠁢󠁥󠁮󠁧󠁿",
                42,
                "Avg: 45.8 | SR: 142.5",
            ),
            key_factors: factors([
                "England's batting depth",
                "Pakistan's strong bowling attack",
                "Pitch conditions favor batsmen",
            ]),
        },
        Prediction {
            id: 3,
            team1: odds("South Africa", "🇿🇦", 72),
            team2: odds("New Zealand", "🇳🇿", 28),
            match_type: MatchType::Test,
            venue: "Cape Town Stadium".into(),
            date: "Oct 20, 2025".into(),
            player_of_match: pick(
                "Kagiso Rabada",
                "South Africa",
                "🇿🇦",
                38,
                "Avg: 4.2 wkts/match | ER: 2.8",
            ),
            key_factors: factors([
                "South Africa's pace attack",
                "Home ground advantage",
                "Recent winning streak",
            ]),
        },
        Prediction {
            id: 4,
            team1: odds("West Indies", "🏴", 41),
            team2: odds("Sri Lanka", "🇱🇰", 59),
            match_type: MatchType::Odi,
            venue: "Kensington Oval".into(),
            date: "Oct 22, 2025".into(),
            player_of_match: pick(
                "Wanindu Hasaranga",
                "Sri Lanka",
                "🇱🇰",
                33,
                "Avg: 3.8 wkts/match | ER: 5.2",
            ),
            key_factors: factors([
                "Sri Lanka's spin advantage",
                "West Indies struggling with form",
                "Pitch favors spinners",
            ]),
        },
    ]
}

/// Parse a catalog filter value. Absent, empty or `ALL` means no filter;
/// comparison is case-insensitive.
pub fn filter_value(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim().to_uppercase();
    if value.is_empty() || value == "ALL" {
        None
    } else {
        Some(value)
    }
}
