pub mod home;
pub mod login;

pub use home::HomeView;
pub use login::LoginView;
