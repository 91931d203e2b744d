mod escape;
mod event;
mod notifier;

pub use escape::escape;
pub use event::{
    Action, CommentSubject, Event, EventKind, IssueSubject, MergeRequestSubject, NoteTarget,
    Payload, PipelineStatus, PipelineSubject, Project, TagPushSubject,
};
pub use notifier::{Notification, classify_and_format};
