use clap::Parser;
use jokes_lib::config::ServerConfig;

#[tokio::main]
async fn main() {
    jokes_lib::init_logging();
    let config = ServerConfig::parse();
    if let Err(e) = jokes_lib::run(config).await {
        log::error!("jokes-server stopped: {} ({})", e, e.code());
        std::process::exit(1);
    }
}
