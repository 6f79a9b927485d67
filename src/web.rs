use crate::article::{ArticleProps, ArticleRoute, build_article_props, route_page_name};
use crate::client::{ClientError, StoriesClient};
use crate::loader::SentenceLoader;
use crate::model::{Sentence, Word};
use crate::story;
use crate::toggle::{COLLAPSE_TIMEOUT_MS, VocabularyToggle};
use askama::Html as HtmlEscaper;
use askama::{MarkupDisplay, Template};
use axum::{
    Json, Router,
    extract::{Path as RoutePath, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use markdown::{Options as MarkdownOptions, to_html_with_options};
use parking_lot::RwLock;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::info;

type SharedState = Arc<AppState>;
type SafeJson = MarkupDisplay<HtmlEscaper, String>;

/// Article props are served from cache for this long before a fresh upstream
/// fetch (the site's revalidation window).
const PROPS_REVALIDATE: Duration = Duration::from_secs(5);

pub struct AppState {
    pub client: StoriesClient,
    pub theme: WebTheme,
    pub base_url: String,
    pub blob_base: String,
    props_cache: RwLock<HashMap<String, CachedProps>>,
}

impl AppState {
    pub fn new(client: StoriesClient, theme: WebTheme, base_url: String, blob_base: String) -> Self {
        Self {
            client,
            theme,
            base_url,
            blob_base,
            props_cache: RwLock::new(HashMap::new()),
        }
    }
}

struct CachedProps {
    fetched_at: Instant,
    props: Arc<ArticleProps>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum WebTheme {
    #[default]
    Tailwind,
    Bootstrap,
}

impl fmt::Display for WebTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebTheme::Tailwind => write!(f, "tailwind"),
            WebTheme::Bootstrap => write!(f, "bootstrap"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Chrome {
    use_tailwind: bool,
    use_bootstrap: bool,
    body_class: &'static str,
    main_class: &'static str,
    card_class: &'static str,
    eyebrow_class: &'static str,
    headline_class: &'static str,
    lede_class: &'static str,
    button_class: &'static str,
    table_row_class: &'static str,
}

impl Chrome {
    fn new(theme: WebTheme) -> Self {
        match theme {
            WebTheme::Tailwind => Self {
                use_tailwind: true,
                use_bootstrap: false,
                body_class: "bg-slate-50 text-slate-900",
                main_class: "min-h-screen flex flex-col items-center justify-start py-10 px-4",
                card_class: "max-w-3xl w-full space-y-6",
                eyebrow_class: "uppercase tracking-wide text-sm text-slate-500",
                headline_class: "text-4xl font-extrabold tracking-tight",
                lede_class: "text-lg text-slate-600",
                button_class: "inline-flex items-center rounded-md bg-slate-900 px-4 py-2 text-white font-semibold shadow hover:bg-slate-800 transition-colors",
                table_row_class: "border-b border-slate-200",
            },
            WebTheme::Bootstrap => Self {
                use_tailwind: false,
                use_bootstrap: true,
                body_class: "bg-light text-dark",
                main_class: "container py-5",
                card_class: "mx-auto col-lg-8",
                eyebrow_class: "text-uppercase text-muted mb-2",
                headline_class: "display-5 fw-bold",
                lede_class: "lead mb-4",
                button_class: "btn btn-primary px-4 py-2",
                table_row_class: "",
            },
        }
    }
}

#[derive(Clone)]
pub struct WebConfig {
    pub addr: SocketAddr,
    pub theme: WebTheme,
    pub base_url: String,
    pub api_base: String,
    pub blob_base: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            theme: WebTheme::default(),
            base_url: "http://127.0.0.1:8080".to_string(),
            api_base: crate::client::DEFAULT_API_BASE.to_string(),
            blob_base: story::BLOB_URL.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum WebError {
    Io(std::io::Error),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<std::io::Error> for WebError {
    fn from(value: std::io::Error) -> Self {
        WebError::Io(value)
    }
}

pub async fn serve(config: WebConfig) -> Result<(), WebError> {
    let state = Arc::new(AppState::new(
        StoriesClient::new(config.api_base.clone()),
        config.theme,
        config.base_url.clone(),
        config.blob_base.clone(),
    ));
    let router = build_router(state);
    info!(
        %config.addr,
        theme = ?config.theme,
        api = %config.api_base,
        base = %config.base_url,
        "Binding HTTP listener"
    );
    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server exited");
    Ok(())
}

fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/articles/:page_name", get(article_html))
        .route("/sentence", get(sentence_html))
        .route("/api/sentence", get(api_sentence))
        .route("/api/article", get(api_article))
        .route("/healthz", get(health))
        .route("/sitemap.xml", get(sitemap_xml))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(CompressionLayer::new())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn from_client(err: ClientError) -> Self {
        let status = match &err {
            ClientError::Status(StatusCode::NOT_FOUND) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = json!({ "error": self.message });
        (self.status, Json(payload)).into_response()
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": "storygloss-web" }))
}

async fn home(State(state): State<SharedState>) -> Response {
    let articles = match state.client.get_all_articles().await {
        Ok(articles) => articles,
        Err(err) => return Html(render_error_page(state.theme, err.to_string())).into_response(),
    };
    let links: Vec<ArticleLink> = articles
        .iter()
        .filter_map(|page| {
            let url = page.url.as_deref()?.to_lowercase();
            if url.is_empty() {
                return None;
            }
            Some(ArticleLink {
                href: format!("/articles/{url}"),
                title: page.title.clone(),
                description: page.description.clone(),
            })
        })
        .collect();
    let chrome = Chrome::new(state.theme);
    let json_ld = MarkupDisplay::new_safe(website_json_ld(&state.base_url), HtmlEscaper);
    let template = HomeTemplate {
        chrome,
        articles: links,
        json_ld,
        base_url: &state.base_url,
    };
    Html(
        template
            .render()
            .unwrap_or_else(|err| render_error_page(state.theme, err.to_string())),
    )
    .into_response()
}

async fn article_html(
    State(state): State<SharedState>,
    RoutePath(page_name): RoutePath<String>,
) -> Response {
    match route_page_name(&page_name) {
        ArticleRoute::RedirectTo(lower) => {
            Redirect::permanent(&format!("/articles/{lower}")).into_response()
        }
        ArticleRoute::Serve => match article_props(&state, &page_name).await {
            Ok(props) => {
                let chrome = Chrome::new(state.theme);
                let content_html =
                    render_markdown_str(&props.article_content).unwrap_or_default();
                let canonical_url = format!("{}/articles/{page_name}", state.base_url);
                let json_ld = MarkupDisplay::new_safe(
                    breadcrumb_json_ld(&state.base_url, &props.title, &canonical_url),
                    HtmlEscaper,
                );
                let template = ArticleTemplate {
                    chrome,
                    props: &props,
                    content_html,
                    canonical_url,
                    json_ld,
                };
                Html(
                    template
                        .render()
                        .unwrap_or_else(|err| render_error_page(state.theme, err.to_string())),
                )
                .into_response()
            }
            Err(err) => Html(render_error_page(state.theme, err.to_string())).into_response(),
        },
    }
}

/// Cached article-props lookup with the fixed revalidation window.
async fn article_props(
    state: &AppState,
    page_name: &str,
) -> Result<Arc<ArticleProps>, ClientError> {
    {
        let cache = state.props_cache.read();
        if let Some(cached) = cache.get(page_name) {
            if cached.fetched_at.elapsed() < PROPS_REVALIDATE {
                return Ok(Arc::clone(&cached.props));
            }
        }
    }
    let article = state.client.get_article(page_name).await?;
    let about_folktale = article.is_about_folktale.unwrap_or(false);
    let random = state.client.get_random_articles(about_folktale).await?;
    let props = Arc::new(build_article_props(page_name, article, random));
    state.props_cache.write().insert(
        page_name.to_string(),
        CachedProps {
            fetched_at: Instant::now(),
            props: Arc::clone(&props),
        },
    );
    Ok(props)
}

#[derive(Debug, Deserialize)]
struct SentenceParams {
    story: Option<String>,
    line: Option<u32>,
    vocab: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct ArticleParams {
    p: Option<String>,
}

/// Everything the sentence widget template needs, precomputed.
struct SentencePagePayload {
    title: String,
    widget_id: String,
    story_url: String,
    image_url: String,
    audio_url: String,
    has_story: bool,
    sentence: Sentence,
    affordance_label: Option<&'static str>,
    toggle_href: String,
    rows: Vec<Word>,
    shown: bool,
    collapse_ms: u64,
}

async fn load_sentence(state: &AppState, params: &SentenceParams) -> SentenceLoader {
    let mut loader = SentenceLoader::new();
    let story_name = params.story.as_deref().unwrap_or_default();
    let line_number = params.line.unwrap_or(0);
    // Blank inputs issue no fetch; failures keep the placeholder. Either way
    // the page renders whatever state the loader holds.
    loader.load(&state.client, story_name, line_number).await;
    loader
}

async fn sentence_html(
    State(state): State<SharedState>,
    Query(params): Query<SentenceParams>,
) -> impl IntoResponse {
    let loader = load_sentence(&state, &params).await;
    let mut toggle = VocabularyToggle::new();
    if params.vocab.unwrap_or(0) != 0 {
        toggle.show();
    }
    let line = loader.sentence().line_number;
    let affordance = toggle.affordance(loader.words(), line);
    let rows = toggle.visible_rows(loader.words(), line).to_vec();

    let story_name = params.story.clone().unwrap_or_default();
    let requested_line = params.line.unwrap_or(0);
    let toggle_href = {
        let encoded = encode_component(&story_name);
        if toggle.is_shown() {
            format!("/sentence?story={encoded}&line={requested_line}")
        } else {
            format!("/sentence?story={encoded}&line={requested_line}&vocab=1")
        }
    };
    let payload = SentencePagePayload {
        title: story::display_title(&story_name),
        widget_id: story::widget_id(&story_name, line),
        story_url: story::story_page_url(story::TOP_URL, &story_name),
        image_url: story::image_url(&state.blob_base, &story_name),
        audio_url: story::audio_url(&state.blob_base, &story_name, line),
        has_story: !story_name.is_empty(),
        sentence: loader.sentence().clone(),
        affordance_label: affordance.map(|a| a.label()),
        toggle_href,
        rows,
        shown: toggle.is_shown(),
        collapse_ms: COLLAPSE_TIMEOUT_MS,
    };
    let chrome = Chrome::new(state.theme);
    let template = SentenceTemplate { chrome, payload };
    Html(
        template
            .render()
            .unwrap_or_else(|err| render_error_page(state.theme, err.to_string())),
    )
}

async fn api_sentence(
    State(state): State<SharedState>,
    Query(params): Query<SentenceParams>,
) -> impl IntoResponse {
    let loader = load_sentence(&state, &params).await;
    Json(json!({
        "sentence": loader.sentence(),
        "words": loader.current_words(),
    }))
}

async fn api_article(
    State(state): State<SharedState>,
    Query(params): Query<ArticleParams>,
) -> Result<Json<ArticleProps>, ApiError> {
    let page_name = params
        .p
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::bad_request("Query parameter `p` is required"))?;
    let props = article_props(&state, &page_name.to_lowercase())
        .await
        .map_err(ApiError::from_client)?;
    Ok(Json(props.as_ref().clone()))
}

async fn sitemap_xml(State(state): State<SharedState>) -> impl IntoResponse {
    let mut body = String::with_capacity(1024);
    body.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    body.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    let mut push_url = |loc: String, priority: &str| {
        body.push_str("<url><loc>");
        body.push_str(&xml_escape(&loc));
        body.push_str("</loc><changefreq>weekly</changefreq><priority>");
        body.push_str(priority);
        body.push_str("</priority></url>");
    };
    push_url(state.base_url.clone(), "0.8");
    if let Ok(articles) = state.client.get_all_articles().await {
        for page in &articles {
            if let Some(url) = page.url.as_deref() {
                let lower = url.to_lowercase();
                if !lower.is_empty() {
                    push_url(format!("{}/articles/{lower}", state.base_url), "0.5");
                }
            }
        }
    }
    body.push_str("</urlset>");
    Response::builder()
        .header(axum::http::header::CONTENT_TYPE, "application/xml")
        .body(body)
        .unwrap()
}

fn render_error_page(theme: WebTheme, message: impl Into<String>) -> String {
    let chrome = Chrome::new(theme);
    let (css_tag, js_tag) = match theme {
        WebTheme::Tailwind => (
            r#"<script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"></script>"#,
            "",
        ),
        WebTheme::Bootstrap => (
            r#"<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/css/bootstrap.min.css" rel="stylesheet" crossorigin="anonymous">"#,
            r#"<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/js/bootstrap.bundle.min.js" crossorigin="anonymous"></script>"#,
        ),
    };
    let message = message.into();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Storygloss • Error</title>
    {css_tag}
    {js_tag}
  </head>
  <body class="{body_class}">
    <main class="{main_class}">
      <div class="{card_class}">
        <h1 class="{headline_class}">Something went wrong</h1>
        <p class="{lede_class}">{message}</p>
        <a href="/" class="{button_class}">Back to home</a>
      </div>
    </main>
  </body>
</html>"#,
        css_tag = css_tag,
        js_tag = js_tag,
        body_class = chrome.body_class,
        main_class = chrome.main_class,
        card_class = chrome.card_class,
        headline_class = chrome.headline_class,
        lede_class = chrome.lede_class,
        button_class = chrome.button_class,
        message = message,
    )
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

fn breadcrumb_json_ld(base_url: &str, title: &str, page_url: &str) -> String {
    serde_json::to_string_pretty(&json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            { "@type": "ListItem", "position": 1, "name": "Home", "item": base_url },
            { "@type": "ListItem", "position": 2, "name": title, "item": page_url }
        ]
    }))
    .unwrap_or_else(|_| "{}".to_string())
}

fn website_json_ld(base_url: &str) -> String {
    serde_json::to_string_pretty(&json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "url": base_url,
        "name": "Storygloss",
    }))
    .unwrap_or_else(|_| "{}".to_string())
}

fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn markdown_options() -> MarkdownOptions {
    let mut options = MarkdownOptions::gfm();
    // Article bodies embed trusted HTML (headings, tables, iframes).
    options.compile.allow_dangerous_html = true;
    options.compile.allow_dangerous_protocol = true;
    options.compile.gfm_tagfilter = false;
    options
}

fn render_markdown_str(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let options = markdown_options();
    let html = to_html_with_options(trimmed, &options).unwrap_or_else(|_| trimmed.to_string());
    Some(html)
}

#[derive(Debug, Clone)]
struct ArticleLink {
    href: String,
    title: String,
    description: String,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Storygloss • Articles</title>
    {% if chrome.use_tailwind %}
    <script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"></script>
    {% endif %}
    {% if chrome.use_bootstrap %}
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/css/bootstrap.min.css" rel="stylesheet" crossorigin="anonymous">
    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/js/bootstrap.bundle.min.js" crossorigin="anonymous"></script>
    {% endif %}
    <link rel="canonical" href="{{ base_url }}/">
    <script type="application/ld+json">
    {{ json_ld }}
    </script>
  </head>
  <body class="{{ chrome.body_class }}">
    <main class="{{ chrome.main_class }}">
      <div class="{{ chrome.card_class }} space-y-6">
        <div>
          <p class="{{ chrome.eyebrow_class }}">Storygloss</p>
          <h1 class="{{ chrome.headline_class }}">Articles</h1>
          <p class="{{ chrome.lede_class }}">Japanese folktales and culture, sentence by sentence.</p>
        </div>
        {% if articles.len() == 0 %}
          <p>No articles available.</p>
        {% else %}
        <div class="grid gap-3">
          {% for article in articles %}
          <a href="{{ article.href }}" class="block px-4 py-3 bg-white rounded shadow hover:shadow-md transition">
            <p class="font-semibold">{{ article.title }}</p>
            <p class="text-sm text-slate-500">{{ article.description }}</p>
          </a>
          {% endfor %}
        </div>
        {% endif %}
      </div>
    </main>
  </body>
</html>"#,
    ext = "html"
)]
struct HomeTemplate<'a> {
    chrome: Chrome,
    articles: Vec<ArticleLink>,
    json_ld: SafeJson,
    base_url: &'a str,
}

#[derive(Template)]
#[template(
    source = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Storygloss • {{ props.title }}</title>
    <meta name="description" content="{{ props.description }}">
    {% if chrome.use_tailwind %}
    <script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"></script>
    {% endif %}
    {% if chrome.use_bootstrap %}
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/css/bootstrap.min.css" rel="stylesheet" crossorigin="anonymous">
    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/js/bootstrap.bundle.min.js" crossorigin="anonymous"></script>
    {% endif %}
    <link rel="canonical" href="{{ canonical_url }}">
    <script type="application/ld+json">
    {{ json_ld }}
    </script>
  </head>
  <body class="{{ chrome.body_class }}">
    <main class="{{ chrome.main_class }}">
      <div class="{{ chrome.card_class }} space-y-6">
        <nav class="text-sm text-slate-500">
          <a href="/">Home</a> &gt; <span>{{ props.title }}</span>
        </nav>
        <div>
          <h1 class="{{ chrome.headline_class }}">{{ props.title }}</h1>
          <p class="{{ chrome.lede_class }}">{{ props.description }}</p>
        </div>

        {% if props.index_info.len() > 0 %}
        <section id="index">
          <p class="font-bold">Index</p>
          <ol class="list-decimal pl-6">
            {% for entry in props.index_info %}
            <li><a href="#{{ entry.encoded_url }}">{{ entry.link_text }}</a></li>
            {% endfor %}
          </ol>
        </section>
        {% endif %}

        <article class="prose prose-slate max-w-none">{{ content_html|safe }}</article>

        {% if props.other_articles.len() > 0 %}
        <section id="more-articles">
          <h2 class="text-xl font-semibold mb-2">More Articles</h2>
          <div class="grid gap-2">
            {% for other in props.other_articles %}
            <a {% if other.url.is_some() %}href="/articles/{{ other.url.as_ref().unwrap() }}"{% endif %} class="block px-3 py-2 bg-white rounded shadow hover:shadow-md transition">
              <p class="font-semibold">{{ other.title }}</p>
              <p class="text-sm text-slate-500">{{ other.description }}</p>
            </a>
            {% endfor %}
          </div>
        </section>
        {% endif %}
      </div>
    </main>
  </body>
</html>"##,
    ext = "html"
)]
struct ArticleTemplate<'a> {
    chrome: Chrome,
    props: &'a ArticleProps,
    content_html: String,
    canonical_url: String,
    json_ld: SafeJson,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Storygloss • {{ payload.title }}</title>
    {% if chrome.use_tailwind %}
    <script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"></script>
    {% endif %}
    {% if chrome.use_bootstrap %}
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/css/bootstrap.min.css" rel="stylesheet" crossorigin="anonymous">
    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/js/bootstrap.bundle.min.js" crossorigin="anonymous"></script>
    {% endif %}
  </head>
  <body class="{{ chrome.body_class }}">
    <main class="{{ chrome.main_class }}">
      <div id="{{ payload.widget_id }}" class="{{ chrome.card_class }} space-y-4">
        {% if payload.has_story %}
        <img src="{{ payload.image_url }}" alt="{{ payload.title }}" title="{{ payload.title }}" class="rounded shadow" />
        <p class="font-bold">
          Below is a sentence from the folktale
          <a href="{{ payload.story_url }}" target="_blank" rel="noopener noreferrer">{{ payload.title }}&gt;&gt;</a>
        </p>
        {% endif %}

        <section id="sentence">
          <p class="text-2xl">{{ payload.sentence.kanji }}</p>
          <p>{{ payload.sentence.hiragana }}</p>
          <p class="text-slate-600">{{ payload.sentence.romaji }}</p>
          <p class="text-slate-600">{{ payload.sentence.english }}</p>
          {% if payload.has_story %}
          <audio controls src="{{ payload.audio_url }}" preload="none"></audio>
          {% endif %}
        </section>

        {% if payload.affordance_label.is_some() %}
        <a href="{{ payload.toggle_href }}" class="{{ chrome.button_class }}">{{ payload.affordance_label.as_ref().unwrap() }}</a>
        {% endif %}

        {% if payload.shown %}
        <div id="word-list" style="transition: height {{ payload.collapse_ms }}ms; background-color: #f8f7f8;">
          <table>
            <tbody>
              {% for word in payload.rows %}
              <tr class="{{ chrome.table_row_class }}">
                <td style="min-width: 100px; border: 1px solid;">
                  {{ word.kanji }}
                  {% if word.hiragana.len() > 0 %}
                  <br />({{ word.hiragana }})
                  {% endif %}
                </td>
                <td style="padding-left: 3px; padding-right: 3px; border: 1px solid;">{{ word.english }}</td>
              </tr>
              {% endfor %}
            </tbody>
          </table>
        </div>
        {% endif %}
      </div>
    </main>
  </body>
</html>"#,
    ext = "html"
)]
struct SentenceTemplate {
    chrome: Chrome,
    payload: SentencePagePayload,
}
