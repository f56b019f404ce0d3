use anyhow::Context as _;
use envconfig::Envconfig;
use historia_site_updater::Config;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = Config::init_from_env().context("failed to get the config")?;
    let (source_dir, site_dir) = config.resolve()?;

    let summary = historia_site_updater::update(source_dir, site_dir)?;

    log::info!("update completed: {}", summary);

    Ok(())
}
