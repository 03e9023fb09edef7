use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spindcli::{cli, config, error, types::AuthState};
use tokio::sync::Mutex;

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

    /// List your playlists
    Playlists(PlaylistsOptions),

    /// List and filter tracks of a playlist
    Tracks(TracksOptions),

    /// Pick a random track from a playlist
    Roll(RollOptions),

    /// List available playback devices
    Devices,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Only show playlists whose name contains this text
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Playlist name or id
    #[clap(long)]
    pub playlist: String,

    /// Only tracks whose artist contains this text
    #[clap(long)]
    pub artist: Option<String>,

    /// Only tracks whose album contains this text
    #[clap(long)]
    pub album: Option<String>,

    /// Only tracks whose title contains this text
    #[clap(long)]
    pub track: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RollOptions {
    /// Playlist name or id
    #[clap(long)]
    pub playlist: String,

    /// Only tracks whose artist contains this text
    #[clap(long)]
    pub artist: Option<String>,

    /// Only tracks whose album contains this text
    #[clap(long)]
    pub album: Option<String>,

    /// Only tracks whose title contains this text
    #[clap(long)]
    pub track: Option<String>,

    /// Start playback of the pick on a device
    #[clap(long)]
    pub play: bool,

    /// Device name or id to play on (default: the active device)
    #[clap(long)]
    pub device: Option<String>,
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
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<AuthState>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Playlists(opt) => cli::list_playlists(opt.search).await,
        Command::Tracks(opt) => {
            cli::list_tracks(opt.playlist, opt.artist, opt.album, opt.track).await
        }
        Command::Roll(opt) => {
            cli::roll(
                opt.playlist,
                opt.artist,
                opt.album,
                opt.track,
                opt.play,
                opt.device,
            )
            .await
        }
        Command::Devices => cli::list_devices().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
