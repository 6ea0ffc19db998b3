//! Contains the structure that carries the evaluator's per-call state: the current LTS and the
//! fixed-point *scope* flag (§3, §4.7).

use crate::policy::Scope;

/// Evaluation context threaded explicitly through every recursive `sat` call.
///
/// The scope flag is conceptually a stack value: `eg`/`ag` save it, run their two-phase
/// computation under `Scope::Max` then `Scope::Min`, and restore the caller's value on exit (see
/// [EvalContext::with_scope]). This is deliberately not a global — a process-wide mutable flag
/// would block evaluating independent formulas concurrently and would obscure the invariant that
/// scope is lexically scoped by the operator (§9 design notes).
pub struct EvalContext {
    pub scope: Scope,
    depth: usize,
}

impl EvalContext {
    /// A fresh context for a top-level `sat` call: scope starts in `Min` (§4.9).
    pub fn new() -> EvalContext {
        EvalContext {
            scope: Scope::Min,
            depth: 0,
        }
    }

    /// Run `f` with `scope` in effect, restoring the previous scope on return.
    pub fn with_scope<T>(&mut self, scope: Scope, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.scope;
        self.scope = scope;
        let result = f(self);
        self.scope = saved;
        result
    }

    /// Run `f` one recursion level deeper, for log indentation only.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_scope_restores_previous_scope_on_return() {
        let mut ctx = EvalContext::new();
        assert_eq!(ctx.scope, Scope::Min);
        ctx.with_scope(Scope::Max, |inner| {
            assert_eq!(inner.scope, Scope::Max);
        });
        assert_eq!(ctx.scope, Scope::Min);
    }

    #[test]
    fn nested_scopes_restore_correctly() {
        let mut ctx = EvalContext::new();
        ctx.with_scope(Scope::Max, |outer| {
            outer.with_scope(Scope::Min, |inner| {
                assert_eq!(inner.scope, Scope::Min);
            });
            assert_eq!(outer.scope, Scope::Max);
        });
        assert_eq!(ctx.scope, Scope::Min);
    }
}
