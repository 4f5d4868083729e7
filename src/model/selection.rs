use serenity::all::UserId;

use super::member::CandidateMember;

pub const DEFAULT_ROLE_NAME: &str = "Superstar";
pub const DEFAULT_IMPOSTER_NAME: &str = "Imposter";

/// Parameters for a public `/select` round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectParams {
    /// Name of the role textually assigned to the selected members.
    pub role_name: String,
    /// Number of members to select. Validated by the selection engine.
    pub n: i64,
    /// Exclude the selected members from future rounds in this voice channel.
    pub remove_from_pool: bool,
}

impl Default for SelectParams {
    fn default() -> Self {
        Self {
            role_name: DEFAULT_ROLE_NAME.to_string(),
            n: 1,
            remove_from_pool: false,
        }
    }
}

/// Parameters for a private `/imposter` round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImposterParams {
    /// Name of the role secretly assigned to the selected members.
    pub imposter_name: String,
    /// Name given to everyone else; empty means "not the imposter".
    pub safe_role_name: String,
    /// Number of imposters. Validated by the selection engine.
    pub n: i64,
    /// Exclude the imposters from future rounds in this voice channel.
    pub remove_from_pool: bool,
    /// Tell each imposter who the other imposters are.
    pub reveal_imposters: bool,
}

impl Default for ImposterParams {
    fn default() -> Self {
        Self {
            imposter_name: DEFAULT_IMPOSTER_NAME.to_string(),
            safe_role_name: String::new(),
            n: 1,
            remove_from_pool: false,
            reveal_imposters: true,
        }
    }
}

/// Members drawn by the selection engine, in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub selected: Vec<CandidateMember>,
}

impl SelectionResult {
    pub fn contains(&self, id: UserId) -> bool {
        self.selected.iter().any(|member| member.id == id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
