//! Validation outcomes
//!
//! Each check returns its own verdict and trace lines; the report folds the
//! verdicts with a logical AND.

use std::fmt;

/// The independent checks making up a validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Abilities,
    Attributes,
    Derived,
}

impl CheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::Abilities => "abilities",
            CheckKind::Attributes => "attributes",
            CheckKind::Derived => "derived statistics",
        }
    }
}

/// Verdict and trace of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    pub passed: bool,
    pub lines: Vec<String>,
}

impl CheckOutcome {
    pub fn new(kind: CheckKind) -> Self {
        Self {
            kind,
            passed: true,
            lines: Vec::new(),
        }
    }

    /// Record a trace line without affecting the verdict
    pub fn note(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Record a trace line and fail the check
    pub fn fail(&mut self, line: impl Into<String>) {
        self.passed = false;
        self.lines.push(line.into());
    }

    /// Fail the check when the condition holds
    pub fn reject_if(&mut self, condition: bool) {
        if condition {
            self.passed = false;
        }
    }

    /// Fold lines and verdict from another partial result
    pub fn absorb(&mut self, legal: bool, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
        self.reject_if(!legal);
    }
}

/// Overall verdict with the ordered diagnostic trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    checks: Vec<CheckOutcome>,
}

impl ValidationReport {
    pub fn new(checks: Vec<CheckOutcome>) -> Self {
        Self { checks }
    }

    /// True when every check passed
    pub fn is_legal(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    pub fn checks(&self) -> &[CheckOutcome] {
        &self.checks
    }

    pub fn check(&self, kind: CheckKind) -> Option<&CheckOutcome> {
        self.checks.iter().find(|check| check.kind == kind)
    }

    /// Kinds of the checks that failed, in order
    pub fn failures(&self) -> Vec<CheckKind> {
        self.checks.iter().filter(|check| !check.passed).map(|check| check.kind).collect()
    }

    /// Every trace line, in check order
    pub fn diagnostics(&self) -> Vec<String> {
        self.checks.iter().flat_map(|check| check.lines.iter().cloned()).collect()
    }

    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.is_legal(), self.diagnostics())
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.checks.iter().flat_map(|check| &check.lines) {
            writeln!(f, "{}", line)?;
        }
        if self.is_legal() {
            write!(f, "Character is legal")
        } else {
            let failed: Vec<&str> = self.failures().into_iter().map(CheckKind::as_str).collect();
            write!(f, "Character is not legal: {} failed", failed.join(", "))
        }
    }
}
