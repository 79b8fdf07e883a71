use std::io::BufRead;
use std::path::Path;
use std::time::{Duration, Instant};

use feedgram::config::NOTIFICATION_DURATION_MS;
use feedgram::core::helpers::{format_count, format_relative, now};
use feedgram::models::models::{CurrentUser, Post, Story, Suggestion};
use feedgram::{dispatch, ContentGenerator, FeedStore, Intent, Presenter, Ticker};

/// Text rendition of the presentation contract: every render signal
/// reprints the affected list in full, no diffing.
struct TerminalPresenter {
    notices: Vec<(Instant, String)>,
}

impl TerminalPresenter {
    fn new() -> Self {
        TerminalPresenter { notices: Vec::new() }
    }

    fn prune_notices(&mut self) {
        let ttl = Duration::from_millis(NOTIFICATION_DURATION_MS);
        self.notices.retain(|(shown_at, _)| shown_at.elapsed() < ttl);
    }
}

impl Presenter for TerminalPresenter {
    fn render_posts(&mut self, posts: &[Post]) {
        self.prune_notices();
        println!("--- feed ({} posts) ---", posts.len());
        for post in posts {
            println!("#{} @{} - {}", post.id, post.author.username, post.caption);
            println!(
                "    {} likes | {} comments | {}{}{}",
                format_count(post.likes),
                format_count(post.comments),
                format_relative(post.created_at, now()),
                if post.liked { " | liked" } else { "" },
                if post.saved { " | saved" } else { "" },
            );
        }
    }

    fn render_stories(&mut self, current_user: &CurrentUser, stories: &[Story]) {
        self.prune_notices();
        let rail: Vec<String> = std::iter::once(format!("[{}]", current_user.username))
            .chain(stories.iter().map(|story| {
                if story.viewed {
                    format!("({})", story.username)
                } else {
                    format!("*{}*", story.username)
                }
            }))
            .collect();
        println!("stories: {}", rail.join(" "));
    }

    fn render_suggestions(&mut self, suggestions: &[Suggestion]) {
        self.prune_notices();
        println!("--- suggestions ---");
        for suggestion in suggestions {
            let hint = suggestion
                .followed_by
                .as_deref()
                .map(|by| format!("Followed by {}", by))
                .unwrap_or_else(|| "New here".to_string());
            println!(
                "@{} ({}) - {} [{}]",
                suggestion.username,
                suggestion.display_name,
                hint,
                if suggestion.followed { "Following" } else { "Follow" },
            );
        }
    }

    fn render_profile(&mut self, current_user: &CurrentUser) {
        println!(
            "profile: @{} ({}){}",
            current_user.username,
            current_user.display_name,
            current_user
                .bio
                .as_deref()
                .map(|bio| format!(" - {}", bio))
                .unwrap_or_default(),
        );
    }

    fn show_post_detail(&mut self, post: &Post) {
        println!("=== post #{} ===", post.id);
        println!("@{}: {}", post.author.username, post.caption);
        println!("image: {}", post.image);
        println!(
            "{} likes | View all {} comments | {}",
            format_count(post.likes),
            format_count(post.comments),
            format_relative(post.created_at, now()),
        );
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            println!("Loading...");
        }
    }

    fn notify(&mut self, message: &str) {
        self.notices.push((Instant::now(), message.to_string()));
        println!("* {}", message);
    }
}

fn print_help() {
    println!("commands:");
    println!("  like <id>            toggle like on a post");
    println!("  save <id>            toggle save on a post");
    println!("  open <id>            open post detail");
    println!("  follow <username>    toggle follow on a suggestion");
    println!("  story <username>     view a story");
    println!("  profile <username>   view a profile");
    println!("  post <path|-> <caption>   publish a post ('-' skips the file picker)");
    println!("  me <username> <name> [bio]   update your profile");
    println!("  switch               switch to a random account");
    println!("  search <query>       search users");
    println!("  more                 load the next feed page");
    println!("  refresh              reset and reload the feed");
    println!("  dump                 print the state snapshot as JSON");
    println!("  quit");
}

fn parse_intent(input: &str) -> Result<Option<Intent>, String> {
    let mut parts = input.split_whitespace();
    let command = match parts.next() {
        Some(word) => word,
        None => return Ok(None),
    };
    let args: Vec<&str> = parts.collect();

    let post_id = |args: &[&str]| -> Result<u64, String> {
        args.first()
            .ok_or_else(|| "post id required".to_string())?
            .parse::<u64>()
            .map_err(|_| "post id must be a number".to_string())
    };
    let username = |args: &[&str]| -> Result<String, String> {
        args.first().map(|u| u.to_string()).ok_or_else(|| "username required".to_string())
    };

    let intent = match command {
        "like" => Intent::Like(post_id(&args)?),
        "save" => Intent::Save(post_id(&args)?),
        "open" => Intent::OpenPostDetail(post_id(&args)?),
        "follow" => Intent::Follow(username(&args)?),
        "story" => Intent::ViewStory(username(&args)?),
        "profile" => Intent::ViewProfile(username(&args)?),
        "post" => {
            let path = args.first().ok_or_else(|| "image path required ('-' for none)".to_string())?;
            let caption = args[1..].join(" ");
            let selected = if *path == "-" { None } else { Some(Path::new(*path)) };
            match feedgram::media::image_to_data_uri(selected).map_err(|e| e.to_string())? {
                None => {
                    println!("no image selected");
                    return Ok(None);
                }
                Some(image) => Intent::CreatePost { image, caption },
            }
        }
        "me" => {
            let username = username(&args)?;
            let display_name =
                args.get(1).map(|n| n.to_string()).ok_or_else(|| "display name required".to_string())?;
            let bio = args[2..].join(" ");
            Intent::UpdateProfile { username, display_name, bio }
        }
        "switch" => Intent::SwitchAccount,
        "search" => Intent::Search(args.join(" ")),
        "more" => Intent::ScrolledNearBottom,
        "refresh" => Intent::Refresh,
        other => return Err(format!("unknown command '{}', try 'help'", other)),
    };
    Ok(Some(intent))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let presenter = Box::new(TerminalPresenter::new());
    let store = feedgram::shared(FeedStore::new(ContentGenerator::new(), presenter));

    feedgram::lock(&store).init();
    feedgram::refresh(&store).await;

    let ticker = Ticker::spawn(store.clone());

    println!("feedgram demo - type 'help' for commands");
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "dump" => {
                let json = serde_json::to_string_pretty(&feedgram::lock(&store).snapshot())?;
                println!("{}", json);
                continue;
            }
            _ => {}
        }

        match parse_intent(input) {
            Ok(Some(intent)) => {
                if let Err(err) = dispatch(&store, intent).await {
                    println!("! {}", err);
                }
            }
            Ok(None) => {}
            Err(message) => println!("! {}", message),
        }
    }

    ticker.stop();
    Ok(())
}
