//! Testing utilities and harness for the swipeable row control

pub mod recorder;
pub mod robot;
pub mod robot_assertions;

pub use recorder::ActionRecorder;
pub use robot::*;

pub mod prelude {
    pub use crate::recorder::ActionRecorder;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
