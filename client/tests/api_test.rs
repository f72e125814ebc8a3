//! End-to-end tests: the client drives a real server instance over HTTP.

use chrono::NaiveDate;

use fittrack_client::api::ApiClient;
use fittrack_client::models::{NewSet, NewWorkout};
use fittrack_client::navigation::{NavigationStore, Page};
use fittrack_client::views::{HomeView, LoginView};

async fn spawn_server() -> String {
    let pool = fittrack_server::db::create_memory_pool().expect("Failed to create test database");
    fittrack_server::schema::initialize(&pool).expect("Failed to initialize schema");
    let app = fittrack_server::routes::app(pool);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_login_roundtrip() {
    let api = ApiClient::new(spawn_server().await);

    assert!(api.login("test", "test").await.unwrap());
    assert!(!api.login("test", "wrong").await.unwrap());
    assert!(!api.login("ghost", "test").await.unwrap());
}

#[tokio::test]
async fn test_user_lookup() {
    let api = ApiClient::new(spawn_server().await);

    let user = api.get_user("test").await.unwrap().unwrap();
    assert_eq!(user.name, "Test User");

    assert!(api.get_user("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn test_workout_flow() {
    let api = ApiClient::new(spawn_server().await);
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let workout_id = api
        .create_workout(&NewWorkout {
            user_id: 1,
            date,
            name: "Pull day".to_string(),
        })
        .await
        .unwrap();

    api.add_set(
        workout_id,
        &NewSet {
            exercise_id: 4,
            weight: 90.0,
            reps: 5,
            rest_seconds: 180,
        },
    )
    .await
    .unwrap();

    let workout = api.get_workout(workout_id).await.unwrap().unwrap();
    assert_eq!(workout.name, "Pull day");
    assert_eq!(workout.date, date);
    assert_eq!(workout.sets.len(), 1);
    assert_eq!(workout.sets[0].reps, 5);

    let workouts = api.list_workouts(1).await.unwrap();
    assert_eq!(workouts.len(), 1);
}

#[tokio::test]
async fn test_missing_workout_is_none() {
    let api = ApiClient::new(spawn_server().await);

    assert!(api.get_workout(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_login_view_navigates_on_success() {
    let api = ApiClient::new(spawn_server().await);
    let mut nav = NavigationStore::new();
    let mut view = LoginView::new();
    view.username = "test".to_string();
    view.password = "test".to_string();

    assert!(view.submit(&api, &mut nav).await.unwrap());
    assert_eq!(nav.current(), Page::Home);
    assert!(view.error.is_none());
}

#[tokio::test]
async fn test_login_view_stays_on_failure() {
    let api = ApiClient::new(spawn_server().await);
    let mut nav = NavigationStore::new();
    let mut view = LoginView::new();
    view.username = "test".to_string();
    view.password = "nope".to_string();

    assert!(!view.submit(&api, &mut nav).await.unwrap());
    assert_eq!(nav.current(), Page::Login);
    assert_eq!(view.error.as_deref(), Some("Wrong username or password!"));
}

#[tokio::test]
async fn test_home_view_load_and_create() {
    let api = ApiClient::new(spawn_server().await);
    let mut home = HomeView::new();

    home.load(&api, "test").await.unwrap();
    assert!(home.user.is_some());
    assert!(home.workouts.is_empty());

    let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    let id = home.create_workout(&api, date, "Legs").await.unwrap();
    assert!(id.is_some());
    assert_eq!(home.workouts.len(), 1);
}

#[tokio::test]
async fn test_home_view_show_workout() {
    let api = ApiClient::new(spawn_server().await);
    let mut home = HomeView::new();
    home.load(&api, "test").await.unwrap();

    let date = NaiveDate::from_ymd_opt(2024, 8, 5).unwrap();
    let workout_id = home
        .create_workout(&api, date, "Push day")
        .await
        .unwrap()
        .unwrap();
    home.add_set(
        &api,
        workout_id,
        NewSet {
            exercise_id: 2,
            weight: 42.5,
            reps: 10,
            rest_seconds: 60,
        },
    )
    .await
    .unwrap();

    let workout = home.show_workout(&api, workout_id).await.unwrap().unwrap();
    assert_eq!(workout.name, "Push day");
    assert_eq!(workout.sets.len(), 1);
    assert_eq!(workout.sets[0].weight, 42.5);

    assert!(home.show_workout(&api, 999).await.unwrap().is_none());
}
