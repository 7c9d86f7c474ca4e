//! The reporting seam between tree consumers and whoever renders messages.

use crate::value::Node;

/// Receives diagnostics raised while walking a parsed document.
///
/// Node-anchored methods locate the message at the node's span and pointer.
/// `warning` returns whether the warning was actually emitted, so callers can
/// skip the follow-up note when warnings are suppressed.
pub trait JsonDiagnostics {
    fn error(&mut self, node: &Node, message: String);

    fn warning(&mut self, node: &Node, message: String) -> bool;

    fn note(&mut self, node: &Node, message: String);

    fn global_error(&mut self, message: String);

    fn global_warning(&mut self, message: String) -> bool;

    fn global_note(&mut self, message: String);
}

/// A sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreDiagnostics;

impl JsonDiagnostics for IgnoreDiagnostics {
    fn error(&mut self, _node: &Node, _message: String) {}

    fn warning(&mut self, _node: &Node, _message: String) -> bool {
        false
    }

    fn note(&mut self, _node: &Node, _message: String) {}

    fn global_error(&mut self, _message: String) {}

    fn global_warning(&mut self, _message: String) -> bool {
        false
    }

    fn global_note(&mut self, _message: String) {}
}
