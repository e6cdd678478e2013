use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardbox_cli::args::Options;
use cardbox_cli::session::Session;

fn main() {
    // Diagnostics go to stderr so they never interleave with the
    // interactive stream or end up in the transcript.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let options = Options::parse(std::env::args().skip(1));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    if let Err(error) = cardbox_cli::run(&mut session, &options, &mut rand::thread_rng()) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
