use crate::error::{AppError, Result};
use crate::models::User;
use crate::repositories::UserRepository;

#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        if username.trim().is_empty() {
            return Err(AppError::Validation("Username is required".to_string()));
        }
        self.repo.find_by_username(username).await
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        if id <= 0 {
            return Err(AppError::Validation("User id is required".to_string()));
        }
        self.repo.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::schema;

    fn service() -> UserService {
        let pool = create_memory_pool().unwrap();
        {
            let conn = pool.get().unwrap();
            schema::reset(&conn).unwrap();
            schema::seed(&conn).unwrap();
        }
        UserService::new(UserRepository::new(pool))
    }

    #[tokio::test]
    async fn test_lookup_seeded_user() {
        let service = service();
        let user = service.get_user_by_username("test").await.unwrap().unwrap();
        assert_eq!(user.name, "Test User");
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.total_workout_seconds, 0);
    }

    #[tokio::test]
    async fn test_unknown_username_is_none() {
        let service = service();
        assert!(service.get_user_by_username("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_username_is_rejected() {
        let service = service();
        let err = service.get_user_by_username("  ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
