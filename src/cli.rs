use std::error::Error;

use atty::Stream;
use clap::{Parser, Subcommand};
use serde_json::json;
use storygloss_rs::article::build_article_props;
use storygloss_rs::{DEFAULT_API_BASE, Sentence, SentenceLoader, StoriesClient, Word, story};
use termimad::{FmtText, MadSkin, terminal_size};
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "storygloss-rs", about = "Explore folktale sentences and articles", version)]
pub struct Cli {
    /// Emit JSON instead of human-readable output.
    #[arg(long, global = true)]
    json: bool,

    /// Base URL of the stories API.
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch one annotated sentence and its vocabulary list.
    Sentence {
        /// Story identifier, e.g. momotaro--oni_island.
        story: String,
        /// Line number within the story (1-based).
        line: u32,
    },
    /// Operations related to articles.
    #[command(subcommand)]
    Article(ArticleCommand),
    /// Operations related to stories.
    #[command(subcommand)]
    Story(StoryCommand),
    /// Serve the web front end.
    #[cfg(feature = "web")]
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: std::net::SocketAddr,
        /// Public base URL used in canonical links and the sitemap.
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        base_url: String,
        /// Use the Bootstrap page chrome instead of Tailwind.
        #[arg(long)]
        bootstrap: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ArticleCommand {
    /// Show an article with its heading index and related articles.
    Show {
        /// Page name of the article (lowercase).
        page: String,
    },
    /// Print only the heading index of an article.
    Index {
        /// Page name of the article (lowercase).
        page: String,
    },
}

#[derive(Subcommand, Debug)]
enum StoryCommand {
    /// Show the derived title and asset locations for a story line.
    Info {
        /// Story identifier, e.g. momotaro--oni_island.
        story: String,
        /// Line number used for the audio and widget derivations.
        #[arg(short, long, default_value_t = 1)]
        line: u32,
    },
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let runtime = Runtime::new()?;
    let client = StoriesClient::new(cli.api_base.clone());
    match cli.command {
        Command::Sentence { story, line } => {
            handle_sentence(&runtime, &client, story, line, cli.json)
        }
        Command::Article(ArticleCommand::Show { page }) => {
            handle_article_show(&runtime, &client, page, cli.json)
        }
        Command::Article(ArticleCommand::Index { page }) => {
            handle_article_index(&runtime, &client, page, cli.json)
        }
        Command::Story(StoryCommand::Info { story, line }) => {
            handle_story_info(story, line, cli.json)
        }
        #[cfg(feature = "web")]
        Command::Serve {
            addr,
            base_url,
            bootstrap,
        } => handle_serve(&runtime, cli.api_base, addr, base_url, bootstrap),
    }
}

fn handle_sentence(
    runtime: &Runtime,
    client: &StoriesClient,
    story: String,
    line: u32,
    as_json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut loader = SentenceLoader::new();
    if !runtime.block_on(loader.load(client, &story, line)) {
        return Err(format!("No sentence loaded for {story:?} line {line}").into());
    }

    if as_json {
        let payload = json!({
            "sentence": loader.sentence(),
            "words": loader.current_words(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_sentence(&story, loader.sentence(), loader.current_words());
    }
    Ok(())
}

fn handle_article_show(
    runtime: &Runtime,
    client: &StoriesClient,
    page: String,
    as_json: bool,
) -> Result<(), Box<dyn Error>> {
    let article = runtime.block_on(client.get_article(&page))?;
    let about_folktale = article.is_about_folktale.unwrap_or(false);
    let random = runtime.block_on(client.get_random_articles(about_folktale))?;
    let props = build_article_props(&page, article, random);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&props)?);
        return Ok(());
    }

    println!("{}", props.title);
    println!("{}", props.description);
    if !props.index_info.is_empty() {
        println!("\nIndex:");
        for entry in &props.index_info {
            println!("- {}", entry.link_text);
        }
    }
    render_markdown_block("Content", &props.article_content);
    if !props.other_articles.is_empty() {
        println!("\nMore articles:");
        for other in &props.other_articles {
            println!("- {}", other.title);
        }
    }
    Ok(())
}

fn handle_article_index(
    runtime: &Runtime,
    client: &StoriesClient,
    page: String,
    as_json: bool,
) -> Result<(), Box<dyn Error>> {
    let article = runtime.block_on(client.get_article(&page))?;
    let index = storygloss_rs::article::heading_index(&article.article_content);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&index)?);
        return Ok(());
    }
    if index.is_empty() {
        println!("Article {page:?} has no section headings.");
        return Ok(());
    }
    let width = index
        .iter()
        .map(|entry| entry.link_text.chars().count())
        .max()
        .unwrap_or(4)
        .max("HEADING".len());
    println!("{:<width$}  {}", "HEADING", "ANCHOR", width = width);
    println!("{:-<width$}  {}", "", "------", width = width);
    for entry in &index {
        println!(
            "{:<width$}  #{}",
            entry.link_text,
            entry.encoded_url,
            width = width
        );
    }
    Ok(())
}

fn handle_story_info(story: String, line: u32, as_json: bool) -> Result<(), Box<dyn Error>> {
    let title = story::display_title(&story);
    let folder = story::audio_folder(&story);
    let image = story::image_url(story::BLOB_URL, &story);
    let audio = story::audio_url(story::BLOB_URL, &story, line);
    let page = story::story_page_url(story::TOP_URL, &story);
    let widget = story::widget_id(&story, line);

    if as_json {
        let payload = json!({
            "story": story,
            "line": line,
            "title": title,
            "audioFolder": folder,
            "imageUrl": image,
            "audioUrl": audio,
            "pageUrl": page,
            "widgetId": widget,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Story: {story}");
    println!("Title: {title}");
    println!("Audio folder: {folder}");
    println!("Image: {image}");
    println!("Audio (line {line}): {audio}");
    println!("Page: {page}");
    println!("Widget id: {widget}");
    Ok(())
}

#[cfg(feature = "web")]
fn handle_serve(
    runtime: &Runtime,
    api_base: String,
    addr: std::net::SocketAddr,
    base_url: String,
    bootstrap: bool,
) -> Result<(), Box<dyn Error>> {
    use storygloss_rs::web::{WebConfig, WebTheme, serve};

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let config = WebConfig {
        addr,
        base_url,
        api_base,
        blob_base: story::BLOB_URL.to_string(),
        theme: if bootstrap {
            WebTheme::Bootstrap
        } else {
            WebTheme::Tailwind
        },
    };
    runtime.block_on(serve(config))?;
    Ok(())
}

fn print_sentence(story: &str, sentence: &Sentence, words: &[Word]) {
    println!(
        "{} (line {})",
        story::display_title(story),
        sentence.line_number
    );
    println!("Kanji:    {}", sentence.kanji);
    println!("Hiragana: {}", sentence.hiragana);
    println!("Romaji:   {}", sentence.romaji);
    println!("English:  {}", sentence.english);
    print_word_table(words);
}

fn print_word_table(words: &[Word]) {
    if words.is_empty() {
        println!("\nNo vocabulary for this line.");
        return;
    }
    let word_width = words
        .iter()
        .map(|w| w.kanji.chars().count())
        .max()
        .unwrap_or(4)
        .max("WORD".len());
    let reading_width = words
        .iter()
        .map(|w| w.hiragana.chars().count())
        .max()
        .unwrap_or(7)
        .max("READING".len());
    println!("\nVocabulary:");
    println!(
        "{:<word_width$}  {:<reading_width$}  {}",
        "WORD", "READING", "ENGLISH"
    );
    println!("{:-<word_width$}  {:-<reading_width$}  -------", "", "");
    for word in words {
        println!(
            "{:<word_width$}  {:<reading_width$}  {}",
            word.kanji, word.hiragana, word.english
        );
    }
}

fn stdout_is_tty() -> bool {
    atty::is(Stream::Stdout)
}

fn markdown_width() -> usize {
    let (width, _) = terminal_size();
    width.max(60) as usize
}

fn render_markdown_block(title: &str, body: &str) {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return;
    }
    println!("\n{title}:");
    if stdout_is_tty() {
        let skin = MadSkin::default();
        let formatted = FmtText::from(&skin, trimmed, Some(markdown_width()));
        println!("{formatted}");
    } else {
        println!("{trimmed}");
    }
}
