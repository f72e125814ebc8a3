pub mod login_repo;
pub mod user_repo;
pub mod workout_repo;

pub use login_repo::LoginRepository;
pub use user_repo::UserRepository;
pub use workout_repo::WorkoutRepository;
