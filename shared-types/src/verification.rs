use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Administrator decision on a single company
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VerificationDecision {
    pub is_approved: bool,
    #[serde(default)]
    pub notes: String,
}

impl VerificationDecision {
    pub fn approve(notes: impl Into<String>) -> Self {
        Self {
            is_approved: true,
            notes: notes.into(),
        }
    }

    pub fn reject(notes: impl Into<String>) -> Self {
        Self {
            is_approved: false,
            notes: notes.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BulkActionKind {
    Approve,
    Reject,
}

impl BulkActionKind {
    pub fn is_approval(&self) -> bool {
        matches!(self, BulkActionKind::Approve)
    }

    pub fn as_str(&self) -> &str {
        match self {
            BulkActionKind::Approve => "approve",
            BulkActionKind::Reject => "reject",
        }
    }
}

/// One decision applied to many companies
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BulkCompanyAction {
    pub company_ids: Vec<i64>,
    pub action: BulkActionKind,
    #[serde(default)]
    pub notes: String,
}

impl BulkCompanyAction {
    /// Company ids with duplicates removed, first occurrence kept
    pub fn distinct_ids(&self) -> Vec<i64> {
        let mut seen = std::collections::HashSet::new();
        self.company_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// The single decision each company in the batch receives
    pub fn decision(&self) -> VerificationDecision {
        VerificationDecision {
            is_approved: self.action.is_approval(),
            notes: self.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BulkItemFailure {
    pub company_id: i64,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BulkActionResult {
    pub message: String,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<BulkItemFailure>,
}

/// Role of the authenticated caller, supplied by the auth layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Candidate,
    Employer,
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Candidate => "CANDIDATE",
            UserRole::Employer => "EMPLOYER",
            UserRole::Admin => "ADMIN",
            UserRole::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Whether the role may review and verify companies
    pub fn can_review_companies(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::SuperAdmin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CANDIDATE" => Ok(UserRole::Candidate),
            "EMPLOYER" => Ok(UserRole::Employer),
            "ADMIN" => Ok(UserRole::Admin),
            "SUPER_ADMIN" => Ok(UserRole::SuperAdmin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}
