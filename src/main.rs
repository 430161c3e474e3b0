use clap::{
    ArgGroup, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playgen::{cli, config, error, types::IntentKind};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Clear the stored session
    Logout,

    #[clap(about = "Generate a playlist from a mood, genre, or artist")]
    Playlist(PlaylistOptions),

    /// Show the authenticated user
    Whoami,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(group(
    ArgGroup::new("intent")
        .required(true)
        .args(["mood", "genre", "artist"])
))]
pub struct PlaylistOptions {
    /// Generate from a mood (e.g. chill, workout, sleep)
    #[clap(long)]
    mood: Option<String>,

    /// Generate from a genre (e.g. techno, jazz)
    #[clap(long)]
    genre: Option<String>,

    /// Generate from an artist name
    #[clap(long)]
    artist: Option<String>,

    /// Playlist title (defaults to "<intent> Mix")
    #[clap(long)]
    title: Option<String>,

    /// Number of tracks (clamped to 1-50)
    #[clap(long, default_value_t = 20)]
    count: usize,

    /// Open the created playlist in the browser
    #[clap(long)]
    open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Logout => cli::logout().await,
        Command::Playlist(opt) => {
            let kind = match (opt.mood, opt.genre, opt.artist) {
                (Some(mood), _, _) => IntentKind::Mood(mood),
                (_, Some(genre), _) => IntentKind::Genre(genre),
                (_, _, Some(artist)) => IntentKind::Artist(artist),
                _ => error!("One of --mood, --genre, or --artist is required."),
            };
            cli::generate(kind, opt.title, opt.count, opt.open).await
        }
        Command::Whoami => cli::whoami().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
