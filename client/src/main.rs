use std::io::{self, Write};

use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fittrack_client::api::ApiClient;
use fittrack_client::config::ClientConfig;
use fittrack_client::models::NewSet;
use fittrack_client::navigation::{NavigationStore, Page};
use fittrack_client::views::{HomeView, LoginView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fittrack_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let api = ApiClient::new(config.api_url.clone());

    let mut nav = NavigationStore::new();
    let mut login = LoginView::new();
    let mut home = HomeView::new();

    println!("fittrack client, talking to {}", config.api_url);

    loop {
        match nav.current() {
            Page::Login => {
                login.username = prompt("Username (blank to quit)")?;
                if login.username.is_empty() {
                    break;
                }
                login.password = prompt("Password")?;

                if login.submit(&api, &mut nav).await? {
                    home.load(&api, &login.username).await?;
                    match &home.user {
                        Some(user) => println!("Welcome, {}!", user.name),
                        None => println!("Logged in (no profile on record)"),
                    }
                } else if let Some(error) = &login.error {
                    println!("{error}");
                }
            }
            Page::Home => {
                println!();
                println!(
                    "1) New workout  2) Add set  3) Show workout  4) Workouts  5) Log out  q) Quit"
                );
                match prompt("Choice")?.as_str() {
                    "1" => {
                        if let Err(e) = create_workout(&api, &mut home).await {
                            println!("Could not create workout: {e}");
                        }
                    }
                    "2" => {
                        if let Err(e) = add_set(&api, &home).await {
                            println!("Could not add set: {e}");
                        }
                    }
                    "3" => {
                        if let Err(e) = show_workout(&api, &home).await {
                            println!("Could not show workout: {e}");
                        }
                    }
                    "4" => nav.navigate(Page::Dashboard),
                    "5" => home.logout(&mut nav),
                    "q" => break,
                    other => println!("Unknown choice: {other}"),
                }
            }
            Page::Dashboard => {
                if home.workouts.is_empty() {
                    println!("No workouts yet.");
                }
                for workout in &home.workouts {
                    println!("#{} {} {}", workout.id, workout.date, workout.name);
                }
                nav.navigate(Page::Home);
            }
        }
    }

    Ok(())
}

async fn create_workout(api: &ApiClient, home: &mut HomeView) -> anyhow::Result<()> {
    let name = prompt("Workout name")?;
    let date_input = prompt("Date (YYYY-MM-DD)")?;
    let date = NaiveDate::parse_from_str(&date_input, "%Y-%m-%d")?;

    match home.create_workout(api, date, &name).await? {
        Some(id) => println!("Created workout #{id}"),
        None => println!("Log in first"),
    }
    Ok(())
}

async fn add_set(api: &ApiClient, home: &HomeView) -> anyhow::Result<()> {
    let workout_id: i64 = prompt("Workout id")?.parse()?;
    let exercise_id: i64 = prompt("Exercise id")?.parse()?;
    let weight: f64 = prompt("Weight (kg)")?.parse()?;
    let reps: i64 = prompt("Reps")?.parse()?;
    let rest_seconds: i64 = prompt("Rest (seconds)")?.parse()?;

    let set_id = home
        .add_set(
            api,
            workout_id,
            NewSet {
                exercise_id,
                weight,
                reps,
                rest_seconds,
            },
        )
        .await?;
    println!("Added set #{set_id}");
    Ok(())
}

async fn show_workout(api: &ApiClient, home: &HomeView) -> anyhow::Result<()> {
    let workout_id: i64 = prompt("Workout id")?.parse()?;

    match home.show_workout(api, workout_id).await? {
        Some(workout) => {
            println!("#{} {} {}", workout.id, workout.date, workout.name);
            for set in &workout.sets {
                println!(
                    "  exercise {}: {} reps @ {} kg, {}s rest",
                    set.exercise_id, set.reps, set.weight, set.rest_seconds
                );
            }
        }
        None => println!("No workout with id {workout_id}"),
    }
    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
