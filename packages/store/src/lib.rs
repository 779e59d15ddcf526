pub mod config;
pub mod role;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::ClinicConfig;
pub use role::Role;
pub use session::{Session, SessionCheck, SessionStorage, SessionStore, ROLE_KEY, TOKEN_KEY};
