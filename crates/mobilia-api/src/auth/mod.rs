pub mod middleware;
pub mod session;

pub use middleware::{session_middleware, AuthState};
pub use session::{SessionClaims, SessionContext};
