mod publish;
mod resolve;
mod session;

pub use publish::publish;
pub use resolve::ResolutionEngine;
pub use session::Session;
pub use session::SessionManager;
pub use session::SessionState;
