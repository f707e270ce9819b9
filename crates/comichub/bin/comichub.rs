#[macro_use]
extern crate log;

use clap::Parser;
use comichub::{
    application::seed,
    domain::services::{chapter::ChapterService, comic::ComicService, page::PageService},
    infrastructure::{
        config::{Config, GLOBAL_CONFIG},
        database,
        domain::repositories::{
            chapter::ChapterRepositoryImpl, comic::ComicRepositoryImpl, page::PageRepositoryImpl,
        },
    },
    presentation::ServerBuilder,
};

#[derive(Parser)]
struct Opts {
    /// Path to config file
    #[clap(long)]
    config: Option<String>,
    /// Reset the catalog, fill it with sample data, then exit
    #[clap(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let mut log_builder = env_logger::Builder::from_default_env();
    if std::env::var("RUST_LOG").is_err() {
        if let Ok(comichub_log) = std::env::var("COMICHUB_LOG") {
            log_builder.parse_filters(&format!("comichub={comichub_log}"));
        }
    }
    log_builder.init();

    let opts: Opts = Opts::parse();
    let config =
        GLOBAL_CONFIG.get_or_init(|| Config::open(opts.config).expect("failed to init config"));

    debug!("config: {:?}", config);

    let pool = database::establish_connection(&config.database_path, config.create_database).await?;

    let comic_repo = ComicRepositoryImpl::new(pool.clone());
    let comic_svc = ComicService::new(comic_repo);

    let chapter_repo = ChapterRepositoryImpl::new(pool.clone());
    let chapter_svc = ChapterService::new(chapter_repo);

    let page_repo = PageRepositoryImpl::new(pool.clone());
    let page_svc = PageService::new(page_repo);

    if opts.seed {
        seed::run(&comic_svc, &chapter_svc, &page_svc).await?;

        info!("closing database...");
        pool.close().await;

        return Ok(());
    }

    let mut server_builder = ServerBuilder::new()
        .with_comic_svc(comic_svc)
        .with_chapter_svc(chapter_svc)
        .with_page_svc(page_svc);

    if config.enable_playground {
        server_builder = server_builder.enable_playground();
    }

    let server_fut = server_builder.build()?.serve(([0, 0, 0, 0], config.port));

    tokio::select! {
        _ = server_fut => {
            info!("server shutdown");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("ctrl+c signal");
        }
    }

    info!("closing database...");
    pool.close().await;

    Ok(())
}
