// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod session_state;
pub mod app_state;

pub use session_state::*;
pub use app_state::*;
