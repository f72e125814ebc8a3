use crate::error::Result;
use crate::models::LoginRequest;
use crate::repositories::LoginRepository;

#[derive(Clone)]
pub struct LoginService {
    repo: LoginRepository,
}

impl LoginService {
    pub fn new(repo: LoginRepository) -> Self {
        Self { repo }
    }

    /// True iff stored username and password both match exactly. A missing
    /// credentials row is an ordinary failed check, not an error.
    pub async fn check_credentials(&self, request: &LoginRequest) -> Result<bool> {
        if request.username.is_empty() || request.password.is_empty() {
            return Ok(false);
        }

        let stored = self.repo.get_credentials(&request.username).await?;
        Ok(match stored {
            Some(credentials) => credentials.matches(request),
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::schema;

    fn service() -> LoginService {
        let pool = create_memory_pool().unwrap();
        {
            let conn = pool.get().unwrap();
            schema::reset(&conn).unwrap();
            schema::seed(&conn).unwrap();
        }
        LoginService::new(LoginRepository::new(pool))
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_credentials_pass() {
        let service = service();
        assert!(service
            .check_credentials(&request("test", "test"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_wrong_password_fails() {
        let service = service();
        assert!(!service
            .check_credentials(&request("test", "nope"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_unknown_user_fails() {
        let service = service();
        assert!(!service
            .check_credentials(&request("ghost", "test"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_empty_input_fails_without_lookup() {
        let service = service();
        assert!(!service.check_credentials(&request("", "")).await.unwrap());
        assert!(!service
            .check_credentials(&request("test", ""))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_no_trimming_on_check_path() {
        let service = service();
        assert!(!service
            .check_credentials(&request("test ", "test"))
            .await
            .unwrap());
        assert!(!service
            .check_credentials(&request("test", "test "))
            .await
            .unwrap());
    }
}
