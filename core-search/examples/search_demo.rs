//! Search coordinator demonstration
//!
//! Wires the coordinator to the in-memory repositories and a console view,
//! then runs one search, history save and download cycle.
//!
//! Run with:
//! ```bash
//! # Search for the default query
//! cargo run -p core-search --example search_demo
//!
//! # Search for something else, with JSON logs
//! cargo run -p core-search --example search_demo -- "adele" json
//! ```

use anyhow::Context;
use bridge_traits::{History, LogLevel, SearchView, Song};
use core_library::{MemoryHistoryRepository, MemorySongRepository};
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use core_runtime::CoreConfig;
use core_search::SearchCoordinator;
use std::env;
use std::sync::Arc;
use tracing::info;

/// Prints every notification to stdout.
struct ConsoleView;

impl SearchView for ConsoleView {
    fn show_search_history(&self, histories: Option<Vec<History>>) {
        match histories {
            Some(histories) => {
                let keys: Vec<&str> = histories.iter().map(|h| h.search_key()).collect();
                println!("history: {:?}", keys);
            }
            None => println!("history: (not loaded)"),
        }
    }

    fn show_search_result(&self, songs: Vec<Song>) {
        println!("results:");
        for (index, song) in songs.iter().enumerate() {
            println!(
                "  [{}] {} - {}{}",
                index,
                song.title,
                song.artist.as_deref().unwrap_or("Unknown artist"),
                if song.is_downloadable() { "" } else { " (stream only)" }
            );
        }
    }

    fn show_progress_bar(&self, visible: bool) {
        println!("progress: {}", if visible { "searching..." } else { "done" });
    }

    fn show_error(&self, message: String) {
        println!("error: {}", message);
    }

    fn show_success(&self, message: String) {
        println!("success: {}", message);
    }
}

fn catalog() -> Vec<Song> {
    vec![
        Song::new("1", "Hello")
            .with_artist("Adele")
            .with_duration_ms(295_000)
            .with_downloadable(true),
        Song::new("2", "Hello, Goodbye")
            .with_artist("The Beatles")
            .with_duration_ms(208_000),
        Song::new("3", "Rolling in the Deep")
            .with_artist("Adele")
            .with_duration_ms(228_000)
            .with_downloadable(true),
        Song::new("4", "Yellow")
            .with_artist("Coldplay")
            .with_duration_ms(266_000),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let query = args.get(1).cloned().unwrap_or_else(|| "hello".to_string());
    let format = match args.get(2).map(String::as_str) {
        Some("json") => LogFormat::Json,
        Some("pretty") => LogFormat::Pretty,
        _ => LogFormat::Compact,
    };

    init_logging(
        LoggingConfig::default()
            .with_format(format)
            .with_level(LogLevel::Debug),
    )
    .context("logging setup")?;

    let history = Arc::new(MemoryHistoryRepository::with_entries(vec![
        History::new("coldplay"),
        History::new("beatles"),
    ]));
    let songs = Arc::new(MemorySongRepository::new(catalog()));

    let config = CoreConfig::builder()
        .history_store(history.clone())
        .song_store(songs.clone())
        .view(Arc::new(ConsoleView))
        .build()
        .context("coordinator config")?;
    let coordinator = SearchCoordinator::from_config(config)?;

    coordinator.start().await;

    coordinator.set_add_flag(true).await;
    coordinator.submit_query(&query).await;
    coordinator.save_recent_search().await;

    let Some(group) = coordinator.result_group().await else {
        info!("Nothing to download");
        return Ok(());
    };

    for index in 0..group.len() {
        coordinator.prepare_download(index).await?;
    }
    // A second attempt hits the already-downloaded probe.
    coordinator.prepare_download(0).await?;

    info!(
        stored_history = history.len().await,
        downloaded = songs.downloaded_songs().await.len(),
        "Demo finished"
    );
    Ok(())
}
