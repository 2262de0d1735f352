use clap::Parser;
use nutrilens_core::{application::create_controller, domain::common::NutrilensConfig};
use tokio::io::{BufReader, stdin, stdout};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{application::session::Session, args::Args};

mod application;
mod args;

fn init_logger(log_json: bool) {
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

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logger(args.log_json);

    let config = NutrilensConfig::from(args);
    let controller = create_controller(&config);

    Session::new(controller, config.language, BufReader::new(stdin()), stdout())
        .run()
        .await
}
