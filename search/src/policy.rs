//! Search policy types.

/// Budget configuration for one search invocation.
///
/// The open-set loop is otherwise unbounded: a pathological dictionary
/// could run for a long time, so the expansion budget caps it
/// explicitly. Exceeding the budget is a distinct termination reason
/// on the trace, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions.
    pub max_expansions: u64,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_covers_tens_of_thousands_of_words() {
        let policy = SearchPolicy::default();
        assert_eq!(policy.max_expansions, 100_000);
    }
}
