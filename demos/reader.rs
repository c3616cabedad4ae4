//! Interactive terminal news reader
//!
//! Run with: cargo run --example reader
//!
//! Uses the live headlines feed when NEWSAPI_KEY is set, otherwise a small
//! built-in sample feed. Set KHABAR_NO_SHARE=1 to see the "sharing not
//! supported" path. Build with `--features audio` to hear the notification
//! sound instead of the terminal bell.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[cfg(not(feature = "audio"))]
use tazza_khabar::notification::TerminalBell;
use tazza_khabar::share::WriterShare;
use tazza_khabar::{
    Action, Article, ArticleBuilder, AuthMode, Category, FeedConfig, HeadlinesClient,
    KhabarError, LoadStatus, Reader, RevealAnimator, RevealStyle, ShareTarget, StaticFeed,
    Viewport,
};

const WINDOW_CARDS: u32 = 4;

const HELP: &str = "\
commands:
  list                 show the cards in view
  scroll <n>           scroll the feed to card n
  search <term>        filter by title/content (empty clears)
  category <name|All>  filter by category
  like <n>             toggle the heart on card n
  bookmark <n>         toggle the bookmark on card n
  share <n>            share card n
  login <user> <pass>  log in
  signup <user> <pass> sign up
  logout               log out
  notify               toggle notifications
  refresh              fetch the feed again
  quit                 exit";

fn sample_feed() -> StaticFeed {
    StaticFeed::new(vec![
        ArticleBuilder::new()
            .title("Monsoon arrives early in Kerala")
            .content("Forecasters say rainfall will be above normal this season.")
            .category("Weather")
            .url("https://example.com/monsoon")
            .build(),
        ArticleBuilder::new()
            .title("Local team wins cup final")
            .content("A late goal settled a tense match in front of a packed stadium.")
            .category("Sports")
            .url("https://example.com/cup-final")
            .build(),
        ArticleBuilder::new()
            .title("New metro line opens")
            .content("Commuters get a faster route across the city from Monday.")
            .category("City")
            .url("https://example.com/metro")
            .build(),
        ArticleBuilder::new()
            .title("Rust release brings faster builds")
            .content("The compiler team reports shorter incremental build times.")
            .category("Tech")
            .url("https://example.com/rust")
            .build(),
        ArticleBuilder::new()
            .title("Heatwave warning for the plains")
            .content("Authorities advise staying indoors during the afternoon.")
            .category("Weather")
            .url("https://example.com/heatwave")
            .build(),
    ])
}

enum Feed {
    Live(HeadlinesClient),
    Sample(StaticFeed),
}

impl Feed {
    async fn refresh(&self, reader: &mut Reader) -> Result<usize, KhabarError> {
        match self {
            Feed::Live(client) => reader.refresh(client).await,
            Feed::Sample(feed) => reader.refresh(feed).await,
        }
    }
}

fn render(reader: &Reader, viewport: &mut Viewport, animator: &mut RevealAnimator) {
    let cards = reader.cards();
    let ids: Vec<_> = cards.iter().map(|c| c.article.id).collect();
    animator.subscribe(viewport, &ids);

    if let LoadStatus::Failed(reason) = reader.store().status() {
        println!("(feed unavailable: {})", reason);
    }
    if cards.is_empty() {
        println!("No articles.");
        return;
    }

    for (index, card) in cards.iter().enumerate() {
        if animator.style(index) == RevealStyle::HIDDEN {
            continue;
        }
        let heart = if card.liked { "♥" } else { "♡" };
        let mark = if card.bookmarked { "★" } else { "☆" };
        println!("{:>2}. {} {}  {}", index + 1, heart, mark, card.article.title);
        if !card.article.content.is_empty() {
            println!("      {}", card.article.content);
        }
    }
    println!(
        "-- cards {}-{} of {} --",
        viewport.scroll() + 1,
        (viewport.scroll() + WINDOW_CARDS).min(cards.len() as u32),
        cards.len()
    );
}

fn header(reader: &Reader) {
    let who = match reader.session().avatar_initial() {
        Some(initial) if reader.session().is_logged_in() => format!("[{}]", initial),
        _ => "[log in]".to_string(),
    };
    let bell = if reader.notifications().is_enabled() { "🔔" } else { "🔕" };
    println!(
        "Tazza Khabar  {}  {}  search='{}' category={}",
        who,
        bell,
        reader.filter().search_term,
        reader.filter().category
    );
    if !reader.notifications().message().is_empty() {
        println!("  {}", reader.notifications().message());
    }
}

fn card_id(reader: &Reader, arg: Option<&str>) -> Option<tazza_khabar::ArticleId> {
    let n: usize = arg?.parse().ok()?;
    reader.visible().get(n.checked_sub(1)?).map(|a: &&Article| a.id)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let (config, feed) = match FeedConfig::from_env() {
        Ok(config) => {
            let client = HeadlinesClient::new(Arc::new(config.clone()))?;
            (config, Feed::Live(client))
        }
        Err(_) => {
            println!("NEWSAPI_KEY not set, using the sample feed.");
            (FeedConfig::new("sample"), Feed::Sample(sample_feed()))
        }
    };
    let share_supported = std::env::var("KHABAR_NO_SHARE").is_err();

    println!("Tazza Khabar\nKhabar wakt se pehle milegi\n");

    let mut reader = Reader::new(&config);
    if let Err(e) = feed.refresh(&mut reader).await {
        eprintln!("Could not load the feed: {}", e);
    }

    let mut viewport = Viewport::new(1, WINDOW_CARDS);
    let mut animator = RevealAnimator::new();
    #[cfg(feature = "audio")]
    let mut bell = tazza_khabar::notification::AudioPlayer::new();
    #[cfg(not(feature = "audio"))]
    let mut bell = TerminalBell::new(io::stdout());

    header(&reader);
    render(&reader, &mut viewport, &mut animator);
    println!("\n{}", HELP);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        reader = match command {
            "" | "list" => reader,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "scroll" => {
                let to: u32 = rest.parse().unwrap_or(1);
                viewport.scroll_to(to.saturating_sub(1));
                reader
            }
            "search" => {
                viewport.scroll_to(0);
                reader.apply(Action::Search(rest.to_string()), &mut bell)
            }
            "category" => {
                viewport.scroll_to(0);
                reader.apply(Action::SelectCategory(Category::from_label(rest)), &mut bell)
            }
            "like" | "bookmark" => match card_id(&reader, Some(rest)) {
                Some(id) if command == "like" => reader.apply(Action::ToggleLike(id), &mut bell),
                Some(id) => reader.apply(Action::ToggleBookmark(id), &mut bell),
                None => {
                    println!("No card {}", rest);
                    continue;
                }
            },
            "share" => {
                match card_id(&reader, Some(rest)) {
                    Some(id) => {
                        let mut out = WriterShare::new(io::stdout());
                        let target = share_supported.then_some(&mut out as &mut dyn ShareTarget);
                        if let Err(e) = reader.share(id, target) {
                            println!("!! {}", e);
                        }
                    }
                    None => println!("No card {}", rest),
                }
                continue;
            }
            "login" | "signup" => {
                let mut parts = rest.split_whitespace();
                let username = parts.next().unwrap_or_default().to_string();
                let password = parts.next().unwrap_or_default().to_string();
                let mode = if command == "login" {
                    AuthMode::Login
                } else {
                    AuthMode::Signup
                };
                reader
                    .apply(Action::SetUsername(username), &mut bell)
                    .apply(Action::SetPassword(password), &mut bell)
                    .apply(Action::Submit(mode), &mut bell)
            }
            "logout" => reader.apply(Action::Logout, &mut bell),
            "notify" => reader.apply(Action::ToggleNotifications, &mut bell),
            "refresh" => {
                if let Err(e) = feed.refresh(&mut reader).await {
                    eprintln!("Could not load the feed: {}", e);
                }
                reader
            }
            other => {
                println!("Unknown command '{}', try 'help'", other);
                continue;
            }
        };

        header(&reader);
        render(&reader, &mut viewport, &mut animator);
    }

    Ok(())
}
