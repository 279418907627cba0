use anyhow::{Context, Result};
use lib_core::config::{core_config, init_config};
use lib_core::SnapshotFeed;
use lib_utils::checksum_address;
use picker::cli::{self, Args};
use picker::{CurrencyInputPanel, EnglishLabels, Labels, ModalContent, PanelEvent, PanelProps, RowView};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let args = Args::parse_args();

    init_config().context("Invalid configuration")?;
    let _log_guard = picker::logger::init(core_config());

    let account = match args.account.as_deref() {
        Some(raw) => Some(checksum_address(raw).with_context(|| format!("Invalid account address: {}", raw))?),
        None => None,
    };

    let loaded = cli::load_snapshot(&args.snapshot).inspect_err(|e| {
        error!(code = e.code(), error = %e, path = %args.snapshot.display(), "Snapshot unusable");
    })?;

    let feed = SnapshotFeed::new();
    feed.publish(loaded);
    let snapshot = feed.latest();
    info!(tokens = snapshot.tokens.len(), account = ?account, "Snapshot loaded");

    let (tx, rx) = async_channel::unbounded();
    let mut panel = CurrencyInputPanel::new(PanelProps::default(), tx);
    panel.open_selector();

    let labels = EnglishLabels;
    let content = match panel.modal_mut() {
        Some(modal) => {
            modal.on_search_input(args.query.as_deref().unwrap_or_default(), &snapshot);
            modal.content(&snapshot, account.is_some(), &labels)
        }
        None => ModalContent::Empty(labels.no_token().to_string()),
    };

    while let Ok(event) = rx.try_recv() {
        if let PanelEvent::TokenLookupRequested(address) = event {
            warn!(address = %address, "Address not in the token list; metadata lookup needed");
        }
    }

    if args.json {
        let rows: &[RowView] = match &content {
            ModalContent::Rows(rows) => rows.as_slice(),
            ModalContent::Empty(_) => &[],
        };
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        println!("{}", cli::render_table(&content));
    }

    Ok(())
}
