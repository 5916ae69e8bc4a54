//! Control signals produced by statement execution.

use crate::context_stack::ConstructKind;
use crate::errors::EvalError;
use crate::value::Value;

/// How a statement finished.
///
/// Any variant other than `Running` stops the enclosing block and is handed
/// to the nearest construct that consumes it: loops consume `Break` and
/// `Continue`, the function-call boundary consumes `Return`.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Completed normally; execution continues with the next statement.
    Running,
    Break,
    Continue,
    /// Leave the enclosing function with this value. Several results are
    /// already folded into a tuple.
    Return(Value),
}

impl Outcome {
    /// Keyword of the statement that raised this signal, paired with the
    /// construct that consumes it. `None` for `Running`.
    pub fn signal(&self) -> Option<(&'static str, ConstructKind)> {
        match self {
            Outcome::Running => None,
            Outcome::Break => Some(("break", ConstructKind::For)),
            Outcome::Continue => Some(("continue", ConstructKind::For)),
            Outcome::Return(_) => Some(("return", ConstructKind::Func)),
        }
    }
}

/// Result of executing a statement.
pub type ExecResult = Result<Outcome, EvalError>;

/// What a loop does after its body finished.
#[derive(Clone, Debug, PartialEq)]
pub enum LoopAction {
    /// Run the post clause, then the next iteration.
    Next,
    /// Stop iterating; the loop itself completes normally.
    Exit,
    /// Stop iterating and hand the outcome to the caller.
    Propagate(Outcome),
}

/// Map a body outcome onto the loop's reaction.
pub fn to_loop_action(outcome: Outcome) -> LoopAction {
    match outcome {
        Outcome::Running | Outcome::Continue => LoopAction::Next,
        Outcome::Break => LoopAction::Exit,
        ret @ Outcome::Return(_) => LoopAction::Propagate(ret),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_reactions() {
        assert_eq!(to_loop_action(Outcome::Running), LoopAction::Next);
        assert_eq!(to_loop_action(Outcome::Continue), LoopAction::Next);
        assert_eq!(to_loop_action(Outcome::Break), LoopAction::Exit);
        assert_eq!(
            to_loop_action(Outcome::Return(Value::Int(1))),
            LoopAction::Propagate(Outcome::Return(Value::Int(1)))
        );
    }

    #[test]
    fn signals_name_their_consumer() {
        assert_eq!(Outcome::Running.signal(), None);
        assert_eq!(Outcome::Break.signal(), Some(("break", ConstructKind::For)));
        assert_eq!(Outcome::Continue.signal(), Some(("continue", ConstructKind::For)));
        assert_eq!(
            Outcome::Return(Value::Empty).signal(),
            Some(("return", ConstructKind::Func))
        );
    }
}
