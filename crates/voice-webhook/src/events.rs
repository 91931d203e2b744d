use serde::{Deserialize, Deserializer};

/// GitLab project webhook body, shared by every `object_kind`. Only the
/// fields the relay reads are declared; kind-specific objects are optional.
#[derive(Debug, Deserialize)]
pub struct GitLabWebhook {
    #[serde(default, deserialize_with = "nullable")]
    pub object_kind: String,

    #[serde(rename = "ref", default, deserialize_with = "nullable")]
    pub git_ref: String,

    #[serde(default, deserialize_with = "nullable")]
    pub user_name: String,

    #[serde(default, deserialize_with = "nullable")]
    pub user_username: String,

    #[serde(default)]
    pub user: Option<GitLabUser>,

    #[serde(default, deserialize_with = "nullable")]
    pub project: GitLabProject,

    #[serde(default)]
    pub object_attributes: Option<GitLabAttributes>,

    #[serde(default)]
    pub merge_request: Option<GitLabMergeRequest>,

    #[serde(default)]
    pub issue: Option<GitLabIssue>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GitLabUser {
    #[serde(default, deserialize_with = "nullable")]
    pub username: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct GitLabProject {
    #[serde(default, deserialize_with = "nullable")]
    pub web_url: String,

    #[serde(rename = "path_with_namespace", default, deserialize_with = "nullable")]
    pub path: String,

    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}

/// `object_attributes` carries the subject for merge request, issue, note
/// and pipeline events; which fields are populated depends on the kind.
#[derive(Debug, Deserialize, Default)]
pub struct GitLabAttributes {
    #[serde(default, deserialize_with = "nullable")]
    pub iid: u64,

    #[serde(default, deserialize_with = "nullable")]
    pub title: String,

    #[serde(default, deserialize_with = "nullable")]
    pub url: String,

    #[serde(default, deserialize_with = "nullable")]
    pub action: String,

    // note
    #[serde(default, deserialize_with = "nullable")]
    pub note: String,

    #[serde(default, deserialize_with = "nullable")]
    pub noteable_type: String,

    // pipeline
    #[serde(rename = "ref", default, deserialize_with = "nullable")]
    pub git_ref: String,

    #[serde(default, deserialize_with = "nullable")]
    pub status: String,

    /// Seconds; null while the pipeline has not finished.
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GitLabMergeRequest {
    #[serde(default, deserialize_with = "nullable")]
    pub iid: u64,

    #[serde(default, deserialize_with = "nullable")]
    pub title: String,

    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct GitLabIssue {
    #[serde(default, deserialize_with = "nullable")]
    pub iid: u64,

    #[serde(default, deserialize_with = "nullable")]
    pub title: String,

    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}

// GitLab sends explicit nulls for unset fields.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
