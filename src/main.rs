use std::process;

use rand::{SeedableRng, rngs::StdRng};
use tagwise::{
    application::{
        catalog::Catalog,
        error::AppError,
        output::{render_index, render_items},
    },
    config::{self, Command, IndexArgs, ListArgs, RelatedArgs, Settings, TaxonomyArgs},
    infra::{content_store::ContentStore, error::InfraError, telemetry},
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    let chain = error.chain().join(": ");
    if dispatcher::has_been_set() {
        error!(error = %chain, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %chain, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let catalog = load_catalog(&settings).await?;

    match cli_args.command {
        Command::Related(args) => run_related(&settings, &catalog, args),
        Command::Index(args) => run_index(&settings, &catalog, args).await,
        Command::Taxonomy(args) => run_taxonomy(&settings, &catalog, args),
        Command::List(args) => run_list(&settings, &catalog, args),
    }
}

async fn load_catalog(settings: &Settings) -> Result<Catalog, AppError> {
    let store = ContentStore::new(&settings.content);
    let items = store.load().await?;
    info!(
        target = "tagwise::content",
        root = %store.root().display(),
        items = items.len(),
        "Content collection ready"
    );
    Ok(Catalog::new(items))
}

fn shuffle_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn run_related(
    settings: &Settings,
    catalog: &Catalog,
    args: RelatedArgs,
) -> Result<(), AppError> {
    let mut rng = shuffle_rng(args.seed);
    let related = catalog.related(&args.slug, &settings.related.rank_options(), &mut rng)?;
    let rendered = render_items(&related, args.format, &settings.output.date_format)?;
    println!("{rendered}");
    Ok(())
}

async fn run_index(
    settings: &Settings,
    catalog: &Catalog,
    args: IndexArgs,
) -> Result<(), AppError> {
    let mut rng = shuffle_rng(args.seed);
    let index = catalog.related_index(&settings.related.rank_options(), &mut rng);
    let rendered = render_index(&index)?;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, format!("{rendered}\n"))
                .await
                .map_err(|source| InfraError::write_output(&path, source))?;
            info!(
                target = "tagwise::index",
                path = %path.display(),
                entries = index.len(),
                "Related-content index written"
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn run_taxonomy(
    settings: &Settings,
    catalog: &Catalog,
    args: TaxonomyArgs,
) -> Result<(), AppError> {
    let items = catalog.taxonomy(args.taxonomy, &args.key, args.sort);
    if items.is_empty() {
        info!(
            target = "tagwise::taxonomy",
            taxonomy = %args.taxonomy,
            key = %args.key,
            "No items matched"
        );
    }
    let rendered = render_items(&items, args.format, &settings.output.date_format)?;
    println!("{rendered}");
    Ok(())
}

fn run_list(settings: &Settings, catalog: &Catalog, args: ListArgs) -> Result<(), AppError> {
    let items = catalog.listing(args.sort);
    let rendered = render_items(&items, args.format, &settings.output.date_format)?;
    println!("{rendered}");
    Ok(())
}
