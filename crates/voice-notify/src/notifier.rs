use crate::escape::escape;
use crate::event::{
    CommentSubject, Event, IssueSubject, MergeRequestSubject, NoteTarget, Payload,
    PipelineSubject, TagPushSubject,
};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Suppressed,
    Message(String),
}

impl Notification {
    pub fn message(&self) -> Option<&str> {
        match self {
            Notification::Message(text) => Some(text),
            Notification::Suppressed => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Notification::Suppressed)
    }
}

/// Decides whether an event is worth announcing and renders the MarkdownV2
/// message for it.
///
/// Pure and stateless. Malformed events (a declared kind without the object
/// it needs) and unrecognized kinds are suppressed rather than reported.
pub fn classify_and_format(event: &Event) -> Notification {
    let text = match &event.payload {
        Payload::MergeRequest(Some(mr)) => merge_request(event, mr),
        Payload::Issue(Some(issue)) => issue_event(event, issue),
        Payload::Note(Some(comment)) => note(event, comment),
        Payload::TagPush(Some(tag)) => Some(tag_push(event, tag)),
        Payload::Pipeline(Some(pipeline)) => pipeline_event(event, pipeline),
        Payload::MergeRequest(None)
        | Payload::Issue(None)
        | Payload::Note(None)
        | Payload::TagPush(None)
        | Payload::Pipeline(None) => {
            warn!("Malformed {} event: missing subject", event.kind());
            None
        }
        Payload::Unknown(kind) => {
            debug!("Ignoring unrecognized event kind: {}", kind);
            None
        }
    };

    match text {
        Some(text) => Notification::Message(text),
        None => Notification::Suppressed,
    }
}

fn merge_request(event: &Event, mr: &MergeRequestSubject) -> Option<String> {
    if !mr.action.is_notable() {
        debug!("Ignoring merge request action: {}", mr.action);
        return None;
    }

    Some(format!(
        "{}\n{} MR [\\!{}]({}) \"{}\" at {}",
        escape(&event.actor),
        mr.action,
        mr.internal_id,
        mr.url,
        escape(&mr.title),
        escape(&event.project.path),
    ))
}

fn issue_event(event: &Event, issue: &IssueSubject) -> Option<String> {
    if !issue.action.is_notable() {
        debug!("Ignoring issue action: {}", issue.action);
        return None;
    }

    Some(format!(
        "{}\n{} issue [\\#{}]({}) \"{}\" at {}",
        escape(&event.actor),
        issue.action,
        issue.internal_id,
        issue.url,
        escape(&issue.title),
        escape(&event.project.path),
    ))
}

fn note(event: &Event, comment: &CommentSubject) -> Option<String> {
    let (marker, internal_id, title) = match &comment.target {
        NoteTarget::MergeRequest(Some(mr)) => ('!', mr.internal_id, &mr.title),
        NoteTarget::Issue(Some(issue)) => ('#', issue.internal_id, &issue.title),
        NoteTarget::MergeRequest(None) | NoteTarget::Issue(None) => {
            warn!("Malformed note event: commented object missing");
            return None;
        }
        NoteTarget::Commit => return None,
        NoteTarget::Other(kind) => {
            debug!("Ignoring comment on {}", kind);
            return None;
        }
    };

    Some(format!(
        "{}\ncomment [\\{}{}]({}) \"{}\" at {}\n{}",
        escape(&event.actor),
        marker,
        internal_id,
        comment.url,
        escape(title),
        escape(&event.project.path),
        escape(&comment.note_text),
    ))
}

fn tag_push(event: &Event, tag: &TagPushSubject) -> String {
    format!(
        "{}\npush new tag [{}]({}/-/tags) at {}",
        escape(&event.actor),
        escape(&tag.ref_name),
        event.project.web_url,
        escape(&event.project.path),
    )
}

fn pipeline_event(event: &Event, pipeline: &PipelineSubject) -> Option<String> {
    if pipeline.status.is_in_progress() {
        return None;
    }

    Some(format!(
        "[pipeline for {}]({}/-/pipelines) is {} at {}\nduration: {}",
        escape(&pipeline.ref_name),
        event.project.web_url,
        escape(pipeline.status.as_str()),
        escape(&event.project.path),
        pipeline.duration_seconds,
    ))
}
