//! Demo data: two teams of heroes, their activities, a set of workouts and
//! a leaderboard ranked by total calories.
//!
//! Values are derived from the hero's position rather than drawn at random,
//! so a seeded database is always the same.

use chrono::{Duration, Utc};
use log::info;
use rusqlite::{params, Connection};

struct Hero {
    name: &'static str,
    email: &'static str,
    password: &'static str,
}

const fn hero(name: &'static str, email: &'static str, password: &'static str) -> Hero {
    Hero { name, email, password }
}

const MARVEL: [Hero; 6] = [
    hero("Iron Man", "tony.stark@marvel.com", "ironman123"),
    hero("Captain America", "steve.rogers@marvel.com", "cap123"),
    hero("Thor", "thor.odinson@marvel.com", "thor123"),
    hero("Black Widow", "natasha.romanoff@marvel.com", "widow123"),
    hero("Hulk", "bruce.banner@marvel.com", "hulk123"),
    hero("Spider-Man", "peter.parker@marvel.com", "spidey123"),
];

const DC: [Hero; 6] = [
    hero("Superman", "clark.kent@dc.com", "superman123"),
    hero("Batman", "bruce.wayne@dc.com", "batman123"),
    hero("Wonder Woman", "diana.prince@dc.com", "wonder123"),
    hero("Flash", "barry.allen@dc.com", "flash123"),
    hero("Aquaman", "arthur.curry@dc.com", "aquaman123"),
    hero("Green Lantern", "hal.jordan@dc.com", "lantern123"),
];

/// (name, description, activity type, difficulty, minutes, kcal)
const WORKOUTS: [(&str, &str, &str, &str, i64, i64); 8] = [
    ("Super Soldier Training", "Intense full-body workout inspired by Captain America", "Strength Training", "Hard", 60, 500),
    ("Web-Slinger Cardio", "High-intensity cardio workout like Spider-Man", "Running", "Medium", 45, 400),
    ("Asgardian Hammer Lift", "Heavy lifting workout worthy of Thor", "Weight Lifting", "Hard", 50, 450),
    ("Speed Force Sprint", "Lightning-fast interval running workout", "Running", "Hard", 30, 350),
    ("Atlantean Swim", "Endurance swimming workout like Aquaman", "Swimming", "Medium", 40, 380),
    ("Bat-Cave Circuit", "Full-body circuit training in the dark", "Circuit Training", "Hard", 55, 480),
    ("Amazon Warrior Yoga", "Flexibility and strength yoga session", "Yoga", "Easy", 35, 200),
    ("Gamma Rage HIIT", "High-intensity interval training for explosive power", "HIIT", "Hard", 40, 420),
];

const ACTIVITY_TYPES: [&str; 7] = [
    "Running",
    "Swimming",
    "Cycling",
    "Weight Lifting",
    "Yoga",
    "HIIT",
    "Circuit Training",
];

/// Seeds an empty database. Returns whether anything was written.
pub fn seed_if_empty(conn: &mut Connection) -> rusqlite::Result<bool> {
    let users: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    if users > 0 {
        return Ok(false);
    }

    let tx = conn.transaction()?;
    let now = Utc::now();
    let stamp = now.to_rfc3339();

    let mut teams = Vec::new();
    for (name, description) in [
        ("Team Marvel", "Earth's Mightiest Heroes - Fighting for fitness!"),
        ("Team DC", "Justice League - Defending health and wellness!"),
    ] {
        tx.execute(
            "INSERT INTO teams (name, description, created_at) VALUES (?1, ?2, ?3)",
            params![name, description, stamp],
        )?;
        teams.push(tx.last_insert_rowid().to_string());
    }

    let mut users = Vec::new();
    for (team_id, roster) in teams.iter().zip([&MARVEL, &DC]) {
        for hero in roster.iter() {
            tx.execute(
                "INSERT INTO users (name, email, password, team_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![hero.name, hero.email, hero.password, team_id, stamp],
            )?;
            users.push((tx.last_insert_rowid().to_string(), team_id.clone()));
        }
    }

    for (name, description, activity_type, difficulty, duration, calories) in WORKOUTS {
        tx.execute(
            "INSERT INTO workouts (name, description, activity_type, difficulty, duration, calories_per_session, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![name, description, activity_type, difficulty, duration, calories, stamp],
        )?;
    }

    for (position, (user_id, team_id)) in users.iter().enumerate() {
        let count = 5 + position % 6;
        let (mut total_calories, mut total_duration) = (0i64, 0i64);
        for i in 0..count {
            let activity_type = ACTIVITY_TYPES[(position + i) % ACTIVITY_TYPES.len()];
            let duration = 20 + ((position * 7 + i * 13) % 71) as i64;
            let calories = duration * (6 + ((position + i * 3) % 7) as i64);
            let distance = matches!(activity_type, "Running" | "Swimming" | "Cycling")
                .then(|| 2.0 + ((position * 5 + i * 3) % 130) as f64 / 10.0);
            let date = (now - Duration::days(((position * 3 + i * 5) % 31) as i64)).to_rfc3339();
            tx.execute(
                "INSERT INTO activities (user_id, activity_type, duration, distance, calories, date, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![user_id, activity_type, duration, distance, calories, date, stamp],
            )?;
            total_calories += calories;
            total_duration += duration;
        }
        tx.execute(
            "INSERT INTO leaderboard (user_id, team_id, total_calories, total_activities, total_duration, rank, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)",
            params![user_id, team_id, total_calories, count as i64, total_duration, stamp],
        )?;
    }

    rank_leaderboard(&tx)?;
    tx.commit()?;

    info!(
        "Seeded database: {} teams, {} users, {} workouts",
        teams.len(),
        users.len(),
        WORKOUTS.len()
    );
    Ok(true)
}

/// Assigns ranks 1..n by descending total calories.
fn rank_leaderboard(conn: &Connection) -> rusqlite::Result<()> {
    let ids: Vec<i64> = conn
        .prepare("SELECT id FROM leaderboard ORDER BY total_calories DESC, id ASC")?
        .query_map([], |row| row.get(0))?
        .collect::<Result<_, _>>()?;
    for (rank, id) in ids.iter().enumerate() {
        conn.execute(
            "UPDATE leaderboard SET rank = ?1 WHERE id = ?2",
            params![rank as i64 + 1, id],
        )?;
    }
    Ok(())
}
