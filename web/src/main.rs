mod commands;

use anyhow::Context;
use commands::CommandLine;
use simplesite_common::config::Config;
use simplesite_web::terminal::logging;
use simplesite_web::{routes, server, site};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config::new(commands.visual_editor, commands.seed).context("invalid configuration")?;
    let state = site::build(&cfg).await?;

    server::serve(routes::router(state), &cfg.listen_urls).await
}
