pub mod asset;
pub mod constants;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod host;
pub mod pick;
pub mod registry;
pub mod scene;
pub mod state;

pub use asset::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use gesture::*;
pub use host::*;
pub use pick::*;
pub use registry::*;
pub use scene::*;
pub use state::*;
