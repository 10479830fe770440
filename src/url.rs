use regex::Regex;
use std::sync::LazyLock;

static RE_FILE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"figma\.com/(?:design|file)/([a-zA-Z0-9]+)").unwrap());
static RE_NODE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]node-id=([^&#]+)").unwrap());

const API_BASE: &str = "https://api.figma.com/v1";

/// File key and node id from a Figma share URL. The node id keeps the URL's
/// `-` separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignUrl {
    pub file_key: String,
    pub node_id: String,
}

impl DesignUrl {
    /// Node id in the `:` form the REST API expects (`11-4` -> `11:4`).
    pub fn api_node_id(&self) -> String {
        self.node_id.replace('-', ":")
    }

    /// `GET /v1/files/:key/nodes?ids=:id` for the fetch collaborator.
    pub fn nodes_endpoint(&self) -> String {
        format!(
            "{}/files/{}/nodes?ids={}",
            API_BASE,
            self.file_key,
            self.api_node_id().replace(':', "%3A")
        )
    }
}

/// Accepts `/design/` and `/file/` URLs; `None` unless both the file key and
/// a `node-id` query parameter are present.
pub fn parse_design_url(url: &str) -> Option<DesignUrl> {
    let file_key = RE_FILE_KEY.captures(url)?[1].to_string();
    let raw_id = RE_NODE_ID.captures(url)?[1].to_string();
    let node_id = raw_id.replace("%3A", ":").replace("%3a", ":").replace(':', "-");
    if node_id.is_empty() {
        return None;
    }
    Some(DesignUrl { file_key, node_id })
}

/// Share URL for a file key and node id in either separator form.
pub fn build_design_url(file_key: &str, node_id: &str) -> String {
    format!(
        "https://www.figma.com/design/{}?node-id={}",
        file_key,
        node_id.replace(':', "-")
    )
}
