//! Permission evaluator for the Jobs domain
//!
//! Every handler asks the same question: may this requester perform this
//! action on this target? The answer comes from one rule table keyed by
//! (resource kind, action). Rules are pure functions of the requester and the
//! target's owner, so they can be exercised without a store or HTTP layer.
//!
//! | Resource        | List | Read | Create | Write      |
//! |-----------------|------|------|--------|------------|
//! | JobPost         | any  | any  | authn  | owner only |
//! | JobApplication  | authn| authn| authn  | never      |

use jobboard_auth::AuthContext;
use jobboard_common::{Error, Result};
use uuid::Uuid;

use crate::domain::entities::{JobApplication, JobPost};

/// Kinds of resource guarded by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    JobPost,
    JobApplication,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JobPost => write!(f, "job post"),
            Self::JobApplication => write!(f, "job application"),
        }
    }
}

/// Actions a requester can attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    List,
    Read,
    Create,
    /// Update or delete
    Write,
}

/// Why a request was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    Unauthenticated,
    NotOwner,
    Immutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Denial),
}

/// What an action is aimed at: a whole collection, or one owned instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub kind: ResourceKind,
    pub owner: Option<Uuid>,
}

impl Target {
    pub fn collection(kind: ResourceKind) -> Self {
        Self { kind, owner: None }
    }

    pub fn instance(kind: ResourceKind, owner: Uuid) -> Self {
        Self {
            kind,
            owner: Some(owner),
        }
    }
}

/// Resources that have a single owning user
pub trait Owned {
    const KIND: ResourceKind;

    fn owner_id(&self) -> Uuid;

    fn target(&self) -> Target {
        Target::instance(Self::KIND, self.owner_id())
    }
}

impl Owned for JobPost {
    const KIND: ResourceKind = ResourceKind::JobPost;

    fn owner_id(&self) -> Uuid {
        self.posted_by
    }
}

impl Owned for JobApplication {
    const KIND: ResourceKind = ResourceKind::JobApplication;

    fn owner_id(&self) -> Uuid {
        self.applicant
    }
}

type Rule = fn(Option<&AuthContext>, Option<Uuid>) -> Decision;

fn anyone(_: Option<&AuthContext>, _: Option<Uuid>) -> Decision {
    Decision::Allow
}

fn authenticated(requester: Option<&AuthContext>, _: Option<Uuid>) -> Decision {
    match requester {
        Some(_) => Decision::Allow,
        None => Decision::Deny(Denial::Unauthenticated),
    }
}

fn owner_only(requester: Option<&AuthContext>, owner: Option<Uuid>) -> Decision {
    match (requester, owner) {
        (None, _) => Decision::Deny(Denial::Unauthenticated),
        (Some(ctx), Some(owner)) if ctx.is_user(owner) => Decision::Allow,
        (Some(_), _) => Decision::Deny(Denial::NotOwner),
    }
}

fn never(requester: Option<&AuthContext>, _: Option<Uuid>) -> Decision {
    match requester {
        Some(_) => Decision::Deny(Denial::Immutable),
        None => Decision::Deny(Denial::Unauthenticated),
    }
}

/// The rule table
fn rule(kind: ResourceKind, action: Action) -> Rule {
    use Action::*;
    use ResourceKind::*;

    match (kind, action) {
        (JobPost, List | Read) => anyone,
        (JobPost, Create) => authenticated,
        (JobPost, Write) => owner_only,
        (JobApplication, List | Read | Create) => authenticated,
        (JobApplication, Write) => never,
    }
}

/// Decide whether `requester` (None = anonymous) may perform `action` on `target`
pub fn evaluate(action: Action, target: Target, requester: Option<&AuthContext>) -> Decision {
    rule(target.kind, action)(requester, target.owner)
}

/// `evaluate`, with denials turned into the matching API error
pub fn authorize(action: Action, target: Target, requester: Option<&AuthContext>) -> Result<()> {
    match evaluate(action, target, requester) {
        Decision::Allow => Ok(()),
        Decision::Deny(denial) => {
            tracing::debug!(
                kind = %target.kind,
                ?action,
                ?denial,
                user_id = ?requester.map(AuthContext::user_id),
                "Permission denied"
            );
            Err(denial_error(denial, target.kind))
        }
    }
}

fn denial_error(denial: Denial, kind: ResourceKind) -> Error {
    match denial {
        Denial::Unauthenticated => {
            Error::Authentication("Authentication credentials were not provided".to_string())
        }
        Denial::NotOwner => Error::Authorization(format!(
            "Only the owner of this {} may modify it",
            kind
        )),
        Denial::Immutable => Error::Authorization(format!("A {} cannot be modified", kind)),
    }
}
