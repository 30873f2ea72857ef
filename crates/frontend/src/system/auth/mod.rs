pub mod api;
pub mod context;
pub mod guard;
pub mod session;
pub mod storage;

pub use context::{provide_auth, use_auth, AuthContext};
pub use guard::RequirePermission;
pub use session::Session;
