use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchIssuesResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub number: Option<u64>,
}
