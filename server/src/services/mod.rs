pub mod login_service;
pub mod user_service;
pub mod workout_service;

pub use login_service::LoginService;
pub use user_service::UserService;
pub use workout_service::WorkoutService;
