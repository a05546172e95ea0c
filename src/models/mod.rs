pub mod game;
pub mod traffic;
pub mod user;

pub use game::*;
pub use traffic::*;
pub use user::*;
