use serde::{Deserialize, Serialize};

/// Body of a pull request creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
}

impl PullRequestRequest {
    pub fn new(
        title: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            head: head.into(),
            base: base.into(),
            body: body.into(),
            draft: None,
        }
    }

    pub fn draft(mut self, draft: bool) -> Self {
        self.draft = Some(draft);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_omit_draft_unless_set() {
        let request = PullRequestRequest::new("title", "feature", "main", "body");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "title": "title", "head": "feature", "base": "main", "body": "body" })
        );
    }

    #[test]
    fn should_serialize_draft_when_set() {
        let request = PullRequestRequest::new("title", "feature", "main", "body").draft(true);

        assert_eq!(serde_json::to_value(&request).unwrap()["draft"], json!(true));
    }
}
