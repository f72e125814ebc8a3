use chrono::NaiveDate;

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{NewSet, NewWorkout, User, Workout};
use crate::navigation::{NavigationStore, Page};

/// Home page state: the signed-in user and their workouts.
#[derive(Default)]
pub struct HomeView {
    pub user: Option<User>,
    pub workouts: Vec<Workout>,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the user profile and their workout list.
    pub async fn load(&mut self, api: &ApiClient, username: &str) -> Result<()> {
        self.user = api.get_user(username).await?;
        self.workouts = match &self.user {
            Some(user) => api.list_workouts(user.id).await?,
            None => Vec::new(),
        };
        Ok(())
    }

    /// Create a workout for the loaded user. None when nobody is loaded.
    pub async fn create_workout(
        &mut self,
        api: &ApiClient,
        date: NaiveDate,
        name: &str,
    ) -> Result<Option<i64>> {
        let Some(user) = &self.user else {
            return Ok(None);
        };

        let id = api
            .create_workout(&NewWorkout {
                user_id: user.id,
                date,
                name: name.to_string(),
            })
            .await?;
        self.workouts = api.list_workouts(user.id).await?;
        Ok(Some(id))
    }

    pub async fn add_set(&self, api: &ApiClient, workout_id: i64, set: NewSet) -> Result<i64> {
        api.add_set(workout_id, &set).await
    }

    pub async fn show_workout(&self, api: &ApiClient, workout_id: i64) -> Result<Option<Workout>> {
        api.get_workout(workout_id).await
    }

    pub fn logout(&mut self, nav: &mut NavigationStore) {
        self.user = None;
        self.workouts.clear();
        nav.navigate(Page::Login);
    }
}
