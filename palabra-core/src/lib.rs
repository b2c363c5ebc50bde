pub mod config;
pub mod events;
pub mod matcher;
pub mod pool;
pub mod pronounce;
pub mod session;
pub mod timer;

// Re-export main components
pub use config::*;
pub use events::*;
pub use matcher::*;
pub use pool::*;
pub use pronounce::*;
pub use session::*;
pub use timer::*;
