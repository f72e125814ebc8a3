pub mod credentials;
pub mod from_row;
pub mod set;
pub mod user;
pub mod workout;

pub use credentials::{LoginRequest, StoredCredentials};
pub use from_row::FromSqliteRow;
pub use set::{CreateSet, ExerciseSet};
pub use user::User;
pub use workout::{CreateWorkout, Workout};
