//! Short-circuiting predicate chains
//!
//! A [`ValidationChain`] is bound to one input record, collects boolean
//! predicates through a fluent `check` call, and reduces them to a single
//! pass/fail answer with [`ValidationChain::validate`].
//!
//! Predicates run **newest first**: the last `check` registered is the first
//! one evaluated, the first one registered is evaluated last. Evaluation stops
//! at the first predicate that returns `false`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use grok_validator::chain::chain;
//! use grok_validator::input::FieldInput;
//!
//! let passed = chain(FieldInput::new("ticketNumber", "123"))
//!     .check(|input| input.value.bytes().all(|b| b.is_ascii_digit()))
//!     .check(|input| input.value.chars().count() >= 3)
//!     .check(|input| !input.value.is_empty())
//!     .validate();
//! assert!(passed);
//! ```

use std::fmt;

use crate::foundation::{Validate, ValidationResult};

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// An input record plus the predicates registered against it.
///
/// The chain never mutates its data and keeps no result state: every call to
/// [`validate`](Self::validate) re-runs the predicates from scratch. There is
/// no way to remove a predicate or to learn which one failed.
pub struct ValidationChain<'a, T> {
    data: T,
    checks: Vec<Predicate<'a, T>>,
}

/// Creates a chain bound to `data`.
pub fn chain<'a, T>(data: T) -> ValidationChain<'a, T> {
    ValidationChain::new(data)
}

impl<'a, T> ValidationChain<'a, T> {
    /// Creates an empty chain bound to `data`. An empty chain validates to `true`.
    pub fn new(data: T) -> Self {
        Self {
            data,
            checks: Vec::new(),
        }
    }

    /// Registers `predicate` and returns this same chain.
    ///
    /// The predicate will run before every predicate registered earlier.
    pub fn check<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.checks.push(Box::new(predicate));
        self
    }

    /// Registers a typed rule, reporting its full result to `report` before
    /// reducing it to pass/fail.
    ///
    /// Ordering and counting are the same as for [`check`](Self::check).
    pub fn check_rule<V, R>(&mut self, rule: V, report: R) -> &mut Self
    where
        V: Validate<Input = T> + 'a,
        R: Fn(&T, ValidationResult<()>) + 'a,
    {
        self.check(move |data| {
            let result = rule.validate(data);
            let passed = result.is_ok();
            report(data, result);
            passed
        })
    }

    /// Runs the predicates newest first and returns `true` if all pass.
    pub fn validate(&self) -> bool {
        let passed = self.checks.iter().rev().all(|check| check(&self.data));
        tracing::trace!(checks = self.checks.len(), passed, "validation chain evaluated");
        passed
    }

    /// Number of registered predicates.
    pub fn count(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// The record every predicate receives.
    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<T: fmt::Debug> fmt::Debug for ValidationChain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationChain")
            .field("data", &self.data)
            .field("checks", &self.checks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidateExt, ValidationError};
    use crate::input::FieldInput;
    use crate::validators::{min_length, required, whole_number};
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_empty_chain_passes() {
        let c = chain(FieldInput::new("ticketNumber", ""));
        assert!(c.is_empty());
        assert_eq!(c.count(), 0);
        assert!(c.validate());
    }

    #[test]
    fn test_count_ignores_outcomes() {
        let mut c = chain(());
        c.check(|_| true).check(|_| false);
        assert_eq!(c.count(), 2);
    }

    #[test]
    fn test_check_returns_same_instance() {
        let mut c = chain(());
        let before: *const ValidationChain<'_, ()> = &c;
        let after: *const ValidationChain<'_, ()> = c.check(|_| true).check(|_| true);
        assert!(std::ptr::eq(before, after));
    }

    #[test]
    fn test_newest_predicate_runs_first() {
        let val = Cell::new(0);
        let trace = RefCell::new(Vec::new());

        let passed = chain(())
            .check(|_| {
                val.set(1);
                trace.borrow_mut().push(1);
                true
            })
            .check(|_| {
                val.set(2);
                trace.borrow_mut().push(2);
                true
            })
            .validate();

        assert!(passed);
        assert_eq!(trace.borrow().first(), Some(&2));
        assert_eq!(*trace.borrow(), vec![2, 1]);
        assert_eq!(val.get(), 1);
    }

    #[test]
    fn test_failure_skips_older_predicates() {
        let a_called = Cell::new(false);
        let b_called = Cell::new(false);

        let passed = chain(())
            .check(|_| {
                a_called.set(true);
                true
            })
            .check(|_| {
                b_called.set(true);
                false
            })
            .validate();

        assert!(!passed);
        assert!(b_called.get());
        assert!(!a_called.get());
    }

    #[test]
    fn test_data_is_shared_unchanged() {
        let seen = RefCell::new(Vec::new());
        let input = FieldInput::new("ticketNumber", "123");

        let mut c = chain(input.clone());
        c.check(|i: &FieldInput| {
            seen.borrow_mut().push(i.clone());
            true
        })
        .check(|i: &FieldInput| {
            seen.borrow_mut().push(i.clone());
            true
        });

        assert!(c.validate());
        assert_eq!(c.data(), &input);
        assert_eq!(*seen.borrow(), vec![input.clone(), input]);
    }

    #[test]
    fn test_validate_reruns_every_time() {
        let calls = Cell::new(0);
        let mut c = chain(());
        c.check(|_| {
            calls.set(calls.get() + 1);
            true
        });

        assert!(c.validate());
        assert!(c.validate());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_check_rule_reports_results() {
        let reported = RefCell::new(Vec::new());
        let report = |_: &FieldInput, result: Result<(), ValidationError>| {
            reported.borrow_mut().push(result.err().map(|e| e.code.into_owned()));
        };

        let passed = chain(FieldInput::new("ticketNumber", "12"))
            .check_rule(whole_number().on_value(), report)
            .check_rule(min_length(3).on_value(), report)
            .check_rule(required().on_value(), report)
            .validate();

        assert!(!passed);
        assert_eq!(
            *reported.borrow(),
            vec![None, Some("min_length".to_owned())]
        );
    }
}
