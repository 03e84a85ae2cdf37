use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use comment_dashboard::infra::http::client::HttpSource;
use comment_dashboard::infra::memory::store::MemoryStore;
use comment_dashboard::infra::sqlite::repo::SqliteStore;
use comment_dashboard::ui::table::{render_dashboard, render_error, render_profile};
use comment_dashboard::usecase::ports::storage::KeyValueStore;
use comment_dashboard::{DashboardConfig, DashboardService, FilterStateStore, PageSize, SortKey};

#[derive(Parser)]
#[command(name = "comment-dashboard")]
#[command(about = "Search, sort and page through remote comments")]
struct Cli {
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[arg(long, global = true)]
    api_base_url: Option<String>,
    /// Keep filter state in memory only for this run.
    #[arg(long, global = true, default_value_t = false)]
    ephemeral: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Show,
    Search { text: Vec<String> },
    Sort { field: SortField },
    Page { number: u32 },
    Next,
    Prev,
    PageSize { size: u32 },
    Reset,
    Profile {
        #[arg(long)]
        id: Option<i64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortField {
    PostId,
    Name,
    Email,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::PostId => SortKey::PostId,
            SortField::Name => SortKey::Name,
            SortField::Email => SortKey::Email,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_json);

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", render_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = DashboardConfig::from_env()?;
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(url) = &cli.api_base_url {
        config.api_base_url = url.clone();
    }
    Ok(config)
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: Cli, config: DashboardConfig) -> Result<()> {
    let source = HttpSource::new(&config.api_base_url, config.http_timeout)
        .context("failed to build http client")?;
    let service = DashboardService::new(Arc::new(source));

    let command = cli.command.unwrap_or(Command::Show);
    if let Command::Profile { id } = command {
        let user = service.profile(id)?;
        print!("{}", render_profile(&user));
        return Ok(());
    }

    let storage: Arc<dyn KeyValueStore> = if cli.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(SqliteStore::open(config.db_path.clone())?)
    };
    let mut store = FilterStateStore::load(storage);
    info!(db = %config.db_path.display(), ephemeral = cli.ephemeral, "filter state ready");

    match &command {
        Command::Search { text } => store.update_search(text.join(" ")),
        Command::Sort { field } => store.apply_sort_click((*field).into()),
        Command::Page { number } => store.update_page(*number),
        Command::PageSize { size } => store.update_page_size(PageSize::try_from(*size)?),
        Command::Reset => store.reset(),
        Command::Show | Command::Next | Command::Prev | Command::Profile { .. } => {}
    }

    let data = service.load()?;

    let mut view = service.view(&data, &store);
    let step = match command {
        Command::Next if view.page.has_next() => Some(view.page.page + 1),
        Command::Prev if view.page.has_previous() => Some(view.page.page - 1),
        _ => None,
    };
    if let Some(target) = step {
        store.update_page(u32::try_from(target).context("page number out of range")?);
        view = service.view(&data, &store);
    }

    print!("{}", render_dashboard(&data.user, &view));
    Ok(())
}
