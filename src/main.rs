mod config;
mod lyrics;
mod models;
mod pipeline;
mod recognition;
#[cfg(test)]
mod test_support;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "songlens", version, about = "Identify songs from audio samples and fetch their lyrics")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recognize an audio file and print its metadata as JSON.
    Recognize {
        file: PathBuf,
    },
    /// Look up lyrics for a song.
    Lyrics {
        #[arg(long)]
        title: String,
        #[arg(long)]
        artist: String,
    },
    /// Recognize an audio file and attach its lyrics. Use `-` to read the sample from stdin.
    Identify {
        file: PathBuf,
    },
    /// Manage the AudD API key.
    Auth {
        #[command(subcommand)]
        cmd: AuthCommand,
    },
}

#[derive(Debug, Subcommand)]
enum AuthCommand {
    /// Store an AudD API key in the config file.
    Set { key: String },
    /// Remove the stored key (recognition falls back to demo mode).
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command {
        Command::Recognize { file } => {
            let recognizer = recognition::Recognizer::new(&cfg.recognition)?;
            print_song(recognizer.recognize_file(&file).await.as_ref())?;
        }
        Command::Lyrics { title, artist } => {
            let resolver = lyrics::LyricsResolver::from_config(&cfg.lyrics)?;
            println!("{}", resolver.get_lyrics(&title, &artist).await);
        }
        Command::Identify { file } => {
            let recognizer = recognition::Recognizer::new(&cfg.recognition)?;
            let resolver = lyrics::LyricsResolver::from_config(&cfg.lyrics)?;
            let song = if file.as_os_str() == "-" {
                pipeline::identify(&recognizer, &resolver, tokio::io::stdin(), "stdin").await
            } else {
                pipeline::identify_file(&recognizer, &resolver, &file).await
            };
            print_song(song.as_ref())?;
        }
        Command::Auth { cmd } => {
            let mut cfg = cfg;
            match cmd {
                AuthCommand::Set { key } => {
                    cfg.recognition.api_key = Some(key.trim().to_string());
                }
                AuthCommand::Clear => {
                    cfg.recognition.api_key = None;
                }
            }
            config::save(&cfg, cli.config.as_deref()).context("save config")?;
            println!("Updated config auth settings.");
        }
    }

    Ok(())
}

fn print_song(song: Option<&models::SongInfo>) -> anyhow::Result<()> {
    match song {
        Some(s) => println!("{}", serde_json::to_string_pretty(s)?),
        None => println!("No match found."),
    }
    Ok(())
}
