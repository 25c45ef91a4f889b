pub mod controller;
pub mod event;
pub mod integrator;
pub mod state;
pub mod ticker;

pub use controller::SimController;
pub use event::{EventKind, SimEvent};
pub use integrator::euler_step;
pub use state::{KinematicState, RunState, TickRecord};
pub use ticker::{FixedTicker, TickTimer};
