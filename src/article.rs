//! Article-page data transforms: heading index, related-article filtering,
//! lowercase routing, and the assembled page props.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Authors rendered with the third character illustration.
const PINNED_IMG_AUTHORS: [u32; 2] = [2, 3];
const CHARACTER_IMG_COUNT: u32 = 3;

/// One article as returned by the upstream articles API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub url: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub article_content: String,
    #[serde(default)]
    pub img_path: Option<String>,
    #[serde(default)]
    pub is_about_folktale: Option<bool>,
    #[serde(default)]
    pub author_id: Option<u32>,
}

/// One entry of the in-page heading index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub link_text: String,
    pub encoded_url: String,
}

/// Everything an article page needs, assembled from upstream responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleProps {
    pub page_name: String,
    pub title: String,
    pub description: String,
    pub article_content: String,
    pub img_path: Option<String>,
    pub is_about_folktale: bool,
    pub index_info: Vec<IndexEntry>,
    pub other_articles: Vec<Page>,
    pub img_number: u32,
}

/// Routing decision for a requested article page name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleRoute {
    Serve,
    /// Permanent redirect to the all-lowercase page name.
    RedirectTo(String),
}

/// Non-lowercase page names redirect permanently to their lowercase form.
pub fn route_page_name(page_name: &str) -> ArticleRoute {
    let lower = page_name.to_lowercase();
    if lower == page_name {
        ArticleRoute::Serve
    } else {
        ArticleRoute::RedirectTo(lower)
    }
}

/// Builds the heading index from markdown content: `##` headings only,
/// skipping `###` and deeper. Link text is the heading with the hash marks
/// stripped; the anchor is its percent-encoded form.
pub fn heading_index(content: &str) -> Vec<IndexEntry> {
    content
        .lines()
        .filter(|line| line.contains("##") && !line.contains("###"))
        .map(|line| {
            let link_text = line.replace('#', "").trim().to_string();
            let encoded_url = utf8_percent_encode(&link_text, NON_ALPHANUMERIC).to_string();
            IndexEntry {
                link_text,
                encoded_url,
            }
        })
        .collect()
}

/// Drops the currently displayed article from a related-articles list.
pub fn other_articles(articles: Vec<Page>, current_title: &str) -> Vec<Page> {
    articles
        .into_iter()
        .filter(|a| a.title != current_title)
        .collect()
}

/// Character illustration accompanying the description. Pinned for the two
/// authors drawn as that character, otherwise derived from the page name.
pub fn character_img_number(page_name: &str, author_id: Option<u32>) -> u32 {
    match author_id {
        Some(id) if PINNED_IMG_AUTHORS.contains(&id) => CHARACTER_IMG_COUNT,
        _ => (page_name.len() as u32 % CHARACTER_IMG_COUNT) + 1,
    }
}

/// Assembles the props for one article page from the fetched article and the
/// (unfiltered) random-articles response.
pub fn build_article_props(page_name: &str, page: Page, random_articles: Vec<Page>) -> ArticleProps {
    let index_info = heading_index(&page.article_content);
    let others = other_articles(random_articles, &page.title);
    let img_number = character_img_number(page_name, page.author_id);
    ArticleProps {
        page_name: page_name.to_string(),
        title: page.title,
        description: page.description,
        article_content: page.article_content,
        img_path: page.img_path,
        is_about_folktale: page.is_about_folktale.unwrap_or(false),
        index_info,
        other_articles: others,
        img_number,
    }
}
