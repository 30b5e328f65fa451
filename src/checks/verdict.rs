//! Check verdicts.
//!
//! A [`Verdict`] is the outcome of one compatibility check: a
//! [`VerdictKind`] plus an optional short detail explaining a failure.

use std::fmt;

/// Outcome kind of a compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VerdictKind {
    /// The task definition satisfies the constraint.
    Pass,
    /// Reserved for constraints that should be reviewed but do not block
    /// Fargate. No built-in check emits it.
    Warning,
    /// The task definition violates the constraint.
    Failure,
}

impl VerdictKind {
    /// Short status token used in reports.
    pub fn token(&self) -> &'static str {
        match self {
            VerdictKind::Pass => "OK",
            VerdictKind::Warning => "WARN",
            VerdictKind::Failure => "FAIL",
        }
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Verdict of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    kind: VerdictKind,
    detail: Option<String>,
}

impl Verdict {
    /// A passing verdict.
    pub fn pass() -> Self {
        Self {
            kind: VerdictKind::Pass,
            detail: None,
        }
    }

    /// A warning verdict.
    pub fn warning() -> Self {
        Self {
            kind: VerdictKind::Warning,
            detail: None,
        }
    }

    /// A failing verdict.
    pub fn failure() -> Self {
        Self {
            kind: VerdictKind::Failure,
            detail: None,
        }
    }

    /// Pass when `passed` holds, fail otherwise.
    pub fn pass_if(passed: bool) -> Self {
        if passed {
            Self::pass()
        } else {
            Self::failure()
        }
    }

    /// Attach a short detail.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// The verdict kind.
    pub fn kind(&self) -> VerdictKind {
        self.kind
    }

    /// The detail, if any.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Status token (`OK`, `WARN`, `FAIL`).
    pub fn token(&self) -> &'static str {
        self.kind.token()
    }

    pub fn is_pass(&self) -> bool {
        self.kind == VerdictKind::Pass
    }

    pub fn is_failure(&self) -> bool {
        self.kind == VerdictKind::Failure
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({})", self.kind, detail),
            None => write!(f, "{}", self.kind),
        }
    }
}
