pub mod amount;
pub mod csv;
pub mod engine;
pub mod model;
pub mod rating;
pub mod weight;

pub use amount::Amount;
pub use engine::Engine;
pub use model::{Command, OrderId, UserId};
pub use rating::RateTable;
pub use weight::Weight;
