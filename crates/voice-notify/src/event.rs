use std::fmt;

/// A decoded GitLab project event. Built once per inbound request and
/// consumed by [`crate::classify_and_format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub actor: String,
    pub project: Project,
    pub payload: Payload,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    pub path: String,
    pub url: String,
    pub web_url: String,
}

/// Kind-specific part of an event. The variant is the event kind; `None`
/// means the payload declared the kind but omitted the object it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    MergeRequest(Option<MergeRequestSubject>),
    Issue(Option<IssueSubject>),
    Note(Option<CommentSubject>),
    TagPush(Option<TagPushSubject>),
    Pipeline(Option<PipelineSubject>),
    Unknown(String),
}

impl Payload {
    pub fn kind(&self) -> EventKind {
        match self {
            Payload::MergeRequest(_) => EventKind::MergeRequest,
            Payload::Issue(_) => EventKind::Issue,
            Payload::Note(_) => EventKind::Note,
            Payload::TagPush(_) => EventKind::TagPush,
            Payload::Pipeline(_) => EventKind::Pipeline,
            Payload::Unknown(_) => EventKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MergeRequest,
    Issue,
    Note,
    TagPush,
    Pipeline,
    Unknown,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::MergeRequest => "merge_request",
            EventKind::Issue => "issue",
            EventKind::Note => "note",
            EventKind::TagPush => "tag_push",
            EventKind::Pipeline => "pipeline",
            EventKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for EventKind {
    fn from(s: &str) -> Self {
        match s {
            "merge_request" => EventKind::MergeRequest,
            "issue" => EventKind::Issue,
            "note" => EventKind::Note,
            "tag_push" => EventKind::TagPush,
            "pipeline" => EventKind::Pipeline,
            _ => EventKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequestSubject {
    pub internal_id: u64,
    pub title: String,
    pub url: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSubject {
    pub internal_id: u64,
    pub title: String,
    pub url: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSubject {
    pub note_text: String,
    pub target: NoteTarget,
    /// Link to the comment itself.
    pub url: String,
}

/// What a comment was left on. The merge request and issue variants carry
/// the object GitLab nests next to the note, which may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteTarget {
    MergeRequest(Option<MergeRequestSubject>),
    Issue(Option<IssueSubject>),
    Commit,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPushSubject {
    pub ref_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSubject {
    pub ref_name: String,
    pub status: PipelineStatus,
    pub duration_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Open,
    Merge,
    Close,
    Other(String),
}

impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Action::Open => "open",
            Action::Merge => "merge",
            Action::Close => "close",
            Action::Other(s) => s,
        }
    }

    /// Whether this action is one that gets announced.
    pub fn is_notable(&self) -> bool {
        matches!(self, Action::Open | Action::Merge | Action::Close)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        match s {
            "open" => Action::Open,
            "merge" => Action::Merge,
            "close" => Action::Close,
            other => Action::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineStatus {
    Pending,
    Running,
    Success,
    Failed,
    Canceled,
    Other(String),
}

impl PipelineStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PipelineStatus::Pending => "pending",
            PipelineStatus::Running => "running",
            PipelineStatus::Success => "success",
            PipelineStatus::Failed => "failed",
            PipelineStatus::Canceled => "canceled",
            PipelineStatus::Other(s) => s,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, PipelineStatus::Pending | PipelineStatus::Running)
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for PipelineStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => PipelineStatus::Pending,
            "running" => PipelineStatus::Running,
            "success" => PipelineStatus::Success,
            "failed" => PipelineStatus::Failed,
            "canceled" => PipelineStatus::Canceled,
            other => PipelineStatus::Other(other.to_string()),
        }
    }
}
