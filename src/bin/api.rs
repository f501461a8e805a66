use clap::Parser;
use headsup::api::server::Server;

/// serve one hand engine over HTTP/JSON for the browser table
#[derive(Parser)]
struct Args {
    /// socket address to bind
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,
    /// engine rng seed
    #[arg(long, default_value_t = headsup::SEED)]
    seed: u64,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    headsup::log();
    let args = Args::parse();
    Server::run(&args.bind, args.seed).await
}
