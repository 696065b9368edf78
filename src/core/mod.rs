pub mod clock;
pub mod context;

pub use clock::{Clock, FixedClock, SystemClock};
pub use context::{WorkingContext, WorkingContextManager};
