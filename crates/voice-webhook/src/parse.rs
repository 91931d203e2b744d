use crate::error::{Result, WebhookError};
use crate::events::*;
use voice_notify::{
    Action, CommentSubject, Event, EventKind, IssueSubject, MergeRequestSubject, NoteTarget,
    Payload, PipelineStatus, PipelineSubject, Project, TagPushSubject,
};

pub fn parse_webhook_event(body: &[u8]) -> Result<Event> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(WebhookError::EmptyBody);
    }

    let webhook: GitLabWebhook = serde_json::from_slice(body)?;
    Ok(into_event(webhook))
}

fn into_event(webhook: GitLabWebhook) -> Event {
    let GitLabWebhook {
        object_kind,
        git_ref,
        user_name,
        user_username,
        user,
        project,
        object_attributes,
        merge_request,
        issue,
    } = webhook;

    // Tag pushes only carry the top-level user fields.
    let actor = user
        .map(|u| u.username)
        .filter(|username| !username.is_empty())
        .or_else(|| Some(user_username).filter(|username| !username.is_empty()))
        .unwrap_or(user_name);

    let payload = match EventKind::from(object_kind.as_str()) {
        EventKind::MergeRequest => {
            Payload::MergeRequest(object_attributes.map(|attrs| MergeRequestSubject {
                internal_id: attrs.iid,
                title: attrs.title,
                url: attrs.url,
                action: Action::from(attrs.action.as_str()),
            }))
        }
        EventKind::Issue => Payload::Issue(object_attributes.map(|attrs| IssueSubject {
            internal_id: attrs.iid,
            title: attrs.title,
            url: attrs.url,
            action: Action::from(attrs.action.as_str()),
        })),
        EventKind::Note => Payload::Note(object_attributes.map(|attrs| CommentSubject {
            target: note_target(&attrs.noteable_type, merge_request, issue),
            note_text: attrs.note,
            url: attrs.url,
        })),
        EventKind::TagPush => Payload::TagPush(Some(TagPushSubject { ref_name: git_ref })),
        EventKind::Pipeline => Payload::Pipeline(object_attributes.map(|attrs| PipelineSubject {
            ref_name: attrs.git_ref,
            status: PipelineStatus::from(attrs.status.as_str()),
            duration_seconds: attrs.duration.map(|d| d.max(0.0) as u64).unwrap_or(0),
        })),
        EventKind::Unknown => Payload::Unknown(object_kind),
    };

    Event {
        actor,
        project: Project {
            path: project.path,
            url: project.url,
            web_url: project.web_url,
        },
        payload,
    }
}

fn note_target(
    noteable_type: &str,
    merge_request: Option<GitLabMergeRequest>,
    issue: Option<GitLabIssue>,
) -> NoteTarget {
    match noteable_type {
        "MergeRequest" => NoteTarget::MergeRequest(merge_request.map(|mr| MergeRequestSubject {
            internal_id: mr.iid,
            title: mr.title,
            url: mr.url,
            action: Action::Other(String::new()),
        })),
        "Issue" => NoteTarget::Issue(issue.map(|issue| IssueSubject {
            internal_id: issue.iid,
            title: issue.title,
            url: issue.url,
            action: Action::Other(String::new()),
        })),
        "Commit" => NoteTarget::Commit,
        other => NoteTarget::Other(other.to_string()),
    }
}
