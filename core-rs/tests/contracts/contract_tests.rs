//! Contract Tests - Search Invariant Protection
//!
//! This file aggregates all contract test modules.
//! Contract tests verify invariants that MUST NEVER BREAK.

// Contract test modules
mod contracts {
    // Result window contracts
    mod search_window {
        include!("search_window_contracts.rs");
    }

    // Predicate flattening contracts
    mod flatten {
        include!("flatten_contracts.rs");
    }

    // Namespace splitter contracts
    mod namespace {
        include!("namespace_contracts.rs");
    }

    // Canonical record contracts shared by every backend
    mod backend {
        include!("backend_contracts.rs");
    }
}
