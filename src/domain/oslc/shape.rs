use serde::Serialize;
use url::Url;

/// Published description of one resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceShape {
    #[serde(rename = "rdf:about")]
    pub about: Url,
    #[serde(rename = "dcterms:title")]
    pub title: String,
    #[serde(rename = "oslc:describes")]
    pub describes: Url,
}
