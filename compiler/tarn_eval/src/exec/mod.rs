//! Statement outcomes shared by the executors.

mod control;

pub use control::{to_loop_action, ExecResult, LoopAction, Outcome};
