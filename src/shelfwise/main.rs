use clap::Parser;
use directories::ProjectDirs;
use shelfwise::api::{ConfigAction, ListQuery, NewBook, ShelfApi, ShelfPaths};
use shelfwise::config::ShelfConfig;
use shelfwise::error::{Result, ShelfError};
use shelfwise::model::ReadingStatus;
use shelfwise::store::fs::FileStore;
use shelfwise::view::{SortDirection, StatusFilter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_books, print_config, print_messages, print_page_footer, print_stats};

const HOME_ENV: &str = "SHELF_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ShelfApi<FileStore>,
    user: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            status,
            search,
            sort,
            asc,
            desc,
            page,
        }) => {
            let direction = match (asc, desc) {
                (true, _) => Some(SortDirection::Asc),
                (_, true) => Some(SortDirection::Desc),
                _ => None,
            };
            let query = ListQuery {
                status: parse_status_filter(&status),
                search,
                sort_column: sort,
                direction,
                page,
            };
            handle_list(&ctx, query)
        }
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Add {
            title,
            author,
            status,
        }) => handle_add(&mut ctx, title, author, &status),
        Some(Commands::Mark { id, status }) => handle_mark(&mut ctx, &id, &status),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, ListQuery::default()),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "shelfwise=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "shelfwise", "shelfwise")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ShelfError::Config(format!(
                "Could not determine a data directory, set {}",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    tracing::debug!(path = %data_dir.display(), "using data directory");

    let config = ShelfConfig::load(&data_dir)?;
    let user = cli.user.clone().unwrap_or(config.user);

    let store = FileStore::new(data_dir.clone());
    let api = ShelfApi::new(store, ShelfPaths { data_dir });
    Ok(AppContext { api, user })
}

fn handle_list(ctx: &AppContext, query: ListQuery) -> Result<()> {
    let result = ctx.api.list_books(&ctx.user, query)?;
    print_books(&result.listed_books);
    if let (Some(page), Some(counts)) = (&result.page, &result.counts) {
        print_page_footer(page, counts);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.book_stats(&ctx.user)?;
    if let Some(counts) = &result.counts {
        print_stats(counts);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, title: String, author: String, status: &str) -> Result<()> {
    let status = parse_status(status);
    let result = ctx
        .api
        .add_book(&ctx.user, NewBook::new(title, author, status))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_mark(ctx: &mut AppContext, id: &str, status: &str) -> Result<()> {
    let status = parse_status(status);
    let result = ctx.api.mark_book(&ctx.user, id, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn parse_status(s: &str) -> ReadingStatus {
    match s.parse() {
        Ok(status) => status,
        Err(never) => match never {},
    }
}

fn parse_status_filter(s: &str) -> StatusFilter {
    match s.parse() {
        Ok(filter) => filter,
        Err(never) => match never {},
    }
}
