//! Status board CLI entry point.
//!
//! Plays the role of the editing surface: load the document once at start,
//! apply at most one slot edit, save the whole document back.
//!
//! ```text
//! board-sync show                     print the current document
//! board-sync set <slot> <text...>     overwrite one slot and save
//! board-sync seed                     save the compiled-in default document
//! ```
//!
//! Slots are spelled `strategy.<key>` or `<resource>.<field>`, e.g.
//! `strategy.general` or `bigquery.progress`.

use anyhow::bail;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use board_core::{ResourceField, ResourceKind, Slot, StatusDocument, StrategyKey};
use board_sync::application::sync_document::DocumentSync;
use board_sync::infrastructure::settings::{load_settings, SyncSettings};
use board_sync::infrastructure::store::csv_file::CsvFileStore;
use board_sync::infrastructure::store::{StoreConnector, StoreError, StoreHandle};

/// The configured backing store, or the reason there is none.
///
/// A missing or unresolvable store location is not a crash: it behaves as a
/// connect failure, so `load` degrades to defaults and `save` reports and
/// aborts.
enum BoardStore {
    Csv(CsvFileStore),
    Unconfigured(String),
}

impl StoreConnector for BoardStore {
    fn connect(&self) -> Result<Box<dyn StoreHandle>, StoreError> {
        match self {
            BoardStore::Csv(store) => store.connect(),
            BoardStore::Unconfigured(reason) => Err(StoreError::NotFound(reason.clone())),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Settings first so the log level default can come from them; a broken
    // settings file degrades to defaults rather than aborting.
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("warning: failed to load settings, using defaults: {e}");
            SyncSettings::default()
        }
    };

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.clone())),
        )
        .init();

    let store = match settings.store.resolve_table_path() {
        Ok(path) => {
            info!(path = %path.display(), "using status table");
            BoardStore::Csv(CsvFileStore::new(path))
        }
        Err(e) => {
            warn!("no usable store location: {e}");
            BoardStore::Unconfigured(e.to_string())
        }
    };
    let sync = DocumentSync::new(store);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("show") => cmd_show(&sync),
        Some("set") => cmd_set(&sync, &args[1..]),
        Some("seed") => cmd_seed(&sync),
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            print_usage();
            bail!("unknown command {other:?}");
        }
    }
}

fn print_usage() {
    eprintln!("usage: board-sync [show | set <slot> <text...> | seed]");
    eprintln!("slots: strategy.<general|cloud_vs_onprem|continuous_improvement>");
    eprintln!("       <bigquery|website|notion|recording>.<progress|notes>");
}

fn cmd_show(sync: &DocumentSync<BoardStore>) -> anyhow::Result<()> {
    let doc = sync.load();

    println!("Strategy");
    for key in StrategyKey::ALL {
        println!("  {:<24} {}", key.as_str(), doc.strategy.slot(key));
    }
    for kind in ResourceKind::ALL {
        println!();
        println!("{}", kind.title());
        for field in ResourceField::ALL {
            println!("  {:<24} {}", field.as_str(), doc.resource(kind).field(field));
        }
    }
    Ok(())
}

fn cmd_set(sync: &DocumentSync<BoardStore>, args: &[String]) -> anyhow::Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("set requires a slot and the new text (use \"\" to blank a slot)");
    }
    let slot: Slot = args[0].parse()?;
    let text = args[1..].join(" ");

    // Load, mutate one slot, write the whole document back.
    let mut doc = sync.load();
    *doc.slot_mut(slot) = text;
    persist(sync, &doc, slot)
}

fn cmd_seed(sync: &DocumentSync<BoardStore>) -> anyhow::Result<()> {
    match sync.save(&StatusDocument::default()) {
        Ok(()) => {
            println!("seeded the store with the default document");
            Ok(())
        }
        Err(e) => {
            error!("seed failed: {e}");
            bail!("could not seed the store");
        }
    }
}

fn persist(
    sync: &DocumentSync<BoardStore>,
    doc: &StatusDocument,
    slot: Slot,
) -> anyhow::Result<()> {
    match sync.save(doc) {
        Ok(()) => {
            println!("saved {slot}");
            Ok(())
        }
        Err(e) => {
            error!("save failed: {e}");
            bail!("could not save {slot}; the store was not updated");
        }
    }
}
