use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli_style;

use cli_style::{
    get_prompt, get_styles, print_empty, print_error, print_highlight, print_key_value,
    print_success, TableBuilder,
};
use tunes_catalog::catalog_store::Playlist;
use tunes_catalog::config::{AppConfig, CliConfig, FileConfig};
use tunes_catalog::{
    load_seed, CatalogError, CatalogManager, CatalogResult, CatalogStore, EntityKind,
};

use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Path to a TOML config file, its values override the flags below.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Path to a TOML seed file loaded into the catalog at startup.
    #[clap(long, value_parser = parse_path)]
    pub seed: Option<PathBuf>,

    /// Path of the file keeping the command history.
    #[clap(long, value_parser = parse_path)]
    pub history: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace or off).
    #[clap(long)]
    pub log_level: Option<String>,
}

#[derive(Parser)]
#[command(styles=get_styles(),name = "")]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ListKind {
    Users,
    Artists,
    Albums,
    Songs,
    Playlists,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Registers a user, identified by mobile number.
    AddUser { name: String, mobile: String },

    /// Registers an artist.
    AddArtist { name: String },

    /// Creates an album, creating its artist if needed.
    AddAlbum { title: String, artist: String },

    /// Adds a song to an existing album.
    AddSong {
        title: String,
        album: String,
        length: u32,
    },

    /// Creates a playlist with every song of the given length.
    PlaylistByLength {
        mobile: String,
        title: String,
        length: u32,
    },

    /// Creates a playlist with the songs having the given titles.
    PlaylistByNames {
        mobile: String,
        title: String,
        songs: Vec<String>,
    },

    /// Adds a user to the listeners of a playlist.
    Join { mobile: String, playlist: String },

    /// Likes a song on behalf of a user, the song's artist is liked too.
    Like { mobile: String, song: String },

    /// Shows the artist with the most likes.
    PopularArtist,

    /// Shows the song with the most likes.
    PopularSong,

    /// Shows a playlist with its songs and listeners.
    ShowPlaylist { title: String },

    /// Shows a user with their playlists and liked songs.
    ShowUser { mobile: String },

    /// Lists every entity of a kind.
    List { kind: ListKind },

    /// Shows how many entities the catalog holds.
    Stats,

    /// Close this program.
    Exit,
}

enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

fn print_json<T: Serialize>(value: &T) -> CommandExecutionResult {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            CommandExecutionResult::Ok
        }
        Err(err) => CommandExecutionResult::Error(format!("{}", err)),
    }
}

fn print_result<T: Serialize>(result: CatalogResult<T>) -> CommandExecutionResult {
    match result {
        Ok(value) => print_json(&value),
        Err(err) => CommandExecutionResult::Error(format!("{}", err)),
    }
}

fn print_popular(label: &str, name: Option<String>) {
    match name {
        Some(name) => print_highlight(label, &name),
        None => print_empty("Nothing has been liked yet."),
    }
}

fn print_list(store: &CatalogStore, kind: ListKind) {
    let table = match kind {
        ListKind::Users => {
            let mut table = TableBuilder::new(vec!["Name", "Mobile", "Playlists"]);
            for user in store.users() {
                let playlists = store.user_playlists(&user.mobile).map_or(0, |p| p.len());
                table.add_row(vec![
                    user.name.clone(),
                    user.mobile.clone(),
                    playlists.to_string(),
                ]);
            }
            table
        }
        ListKind::Artists => {
            let mut table = TableBuilder::new(vec!["Name", "Albums", "Likes"]);
            for artist in store.artists() {
                let albums = store.albums_of_artist(&artist.name).map_or(0, |a| a.len());
                table.add_row(vec![
                    artist.name.clone(),
                    albums.to_string(),
                    artist.likes.to_string(),
                ]);
            }
            table
        }
        ListKind::Albums => {
            let mut table = TableBuilder::new(vec!["Title", "Artist", "Songs"]);
            for album in store.albums() {
                let songs = store.songs_of_album(&album.title).map_or(0, |s| s.len());
                table.add_row(vec![
                    album.title.clone(),
                    store.artist_of_album(album).name.clone(),
                    songs.to_string(),
                ]);
            }
            table
        }
        ListKind::Songs => {
            let mut table = TableBuilder::new(vec!["Title", "Album", "Length", "Likes"]);
            for song in store.songs() {
                table.add_row(vec![
                    song.title.clone(),
                    store.album_of_song(song).title.clone(),
                    song.length.to_string(),
                    song.likes.to_string(),
                ]);
            }
            table
        }
        ListKind::Playlists => {
            let mut table = TableBuilder::new(vec!["Title", "Creator", "Songs", "Listeners"]);
            for playlist in store.playlists() {
                let songs = store.playlist_songs(&playlist.title).map_or(0, |s| s.len());
                let listeners = store
                    .playlist_listeners(&playlist.title)
                    .map_or(0, |l| l.len());
                table.add_row(vec![
                    playlist.title.clone(),
                    store.users()[playlist.creator_id.index()].name.clone(),
                    songs.to_string(),
                    listeners.to_string(),
                ]);
            }
            table
        }
    };
    table.print();
}

fn show_user(store: &CatalogStore, mobile: &str) -> CatalogResult<()> {
    let user = store
        .user(mobile)
        .ok_or(CatalogError::NotFound(EntityKind::User))?;
    let titles = |playlists: Vec<&Playlist>| {
        playlists
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    print_key_value("Name", &user.name);
    print_key_value("Mobile", &user.mobile);
    print_key_value("Created", &titles(store.created_playlists(mobile)?));
    print_key_value("Playlists", &titles(store.user_playlists(mobile)?));
    let liked = store
        .liked_songs(mobile)?
        .iter()
        .map(|s| s.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    print_key_value("Liked", &liked);
    Ok(())
}

fn execute_command(line: String, manager: &CatalogManager) -> CommandExecutionResult {
    if line.is_empty() {
        return CommandExecutionResult::Ok;
    }

    let args =
        shlex::split(&line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    match cli {
        Ok(cli) => match cli.command {
            InnerCommand::AddUser { name, mobile } => {
                return print_json(&manager.create_user(&name, &mobile))
            }
            InnerCommand::AddArtist { name } => return print_json(&manager.create_artist(&name)),
            InnerCommand::AddAlbum { title, artist } => {
                return print_json(&manager.create_album(&title, &artist))
            }
            InnerCommand::AddSong {
                title,
                album,
                length,
            } => return print_result(manager.create_song(&title, &album, length)),
            InnerCommand::PlaylistByLength {
                mobile,
                title,
                length,
            } => {
                return print_result(manager.create_playlist_by_length(&mobile, &title, length))
            }
            InnerCommand::PlaylistByNames {
                mobile,
                title,
                songs,
            } => {
                return print_result(manager.create_playlist_by_names(&mobile, &title, &songs))
            }
            InnerCommand::Join { mobile, playlist } => {
                return print_result(manager.join_playlist(&mobile, &playlist))
            }
            InnerCommand::Like { mobile, song } => {
                return print_result(manager.like_song(&mobile, &song))
            }
            InnerCommand::PopularArtist => {
                print_popular("Most popular artist", manager.most_popular_artist())
            }
            InnerCommand::PopularSong => {
                print_popular("Most popular song", manager.most_popular_song())
            }
            InnerCommand::ShowPlaylist { title } => {
                return print_result(manager.resolve_playlist(&title))
            }
            InnerCommand::ShowUser { mobile } => {
                if let Err(err) = manager.read(|store| show_user(store, &mobile)) {
                    return CommandExecutionResult::Error(format!("{}", err));
                }
            }
            InnerCommand::List { kind } => manager.read(|store| print_list(store, kind)),
            InnerCommand::Stats => {
                let stats = manager.stats();
                print_key_value("Artists", &stats.artists.to_string());
                print_key_value("Albums", &stats.albums.to_string());
                print_key_value("Songs", &stats.songs.to_string());
                print_key_value("Users", &stats.users.to_string());
                print_key_value("Playlists", &stats.playlists.to_string());
            }
            InnerCommand::Exit => return CommandExecutionResult::Exit,
        },

        Err(e) => {
            if let Err(_) = e.print() {
                println!("{}", e);
            }
        }
    }
    CommandExecutionResult::Ok
}

#[derive(rustyline_derive::Hinter)]
struct CatalogHelper {
    commands_names: Vec<String>,
}

impl CatalogHelper {
    pub fn new() -> Self {
        let commands_names: Vec<String> = InnerCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .collect();

        CatalogHelper { commands_names }
    }
}

impl Completer for CatalogHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(" ") {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for CatalogHelper {}
impl Validator for CatalogHelper {}
impl Helper for CatalogHelper {}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        seed_path: cli_args.seed,
        history_path: cli_args.history,
        log_level: cli_args.log_level,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(config.log_level.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let store = match &config.seed_path {
        Some(path) => {
            info!("Loading seed file {:?}...", path);
            load_seed(path)?
        }
        None => CatalogStore::new(),
    };
    let manager = CatalogManager::new(store);

    InnerCli::command().print_long_help()?;

    let rl_config = Config::builder()
        .completion_type(CompletionType::List)
        .build();

    let mut rl = Editor::<CatalogHelper, FileHistory>::with_config(rl_config)?;
    rl.set_helper(Some(CatalogHelper::new()));
    if let Some(path) = &config.history_path {
        if rl.load_history(path).is_err() {
            info!("No previous history at {:?}", path);
        }
    }

    loop {
        match rl.readline(&get_prompt()) {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_command(line, &manager) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => {
                        break;
                    }
                    CommandExecutionResult::Error(err) => {
                        print_error(&err);
                        continue;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                print_error(&format!("{:?}", e));
                break;
            }
        }
    }

    if let Some(path) = &config.history_path {
        rl.save_history(path)?;
    }
    print_success("Bye.");
    Ok(())
}
