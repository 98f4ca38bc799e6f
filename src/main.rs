// src/main.rs

use gatecheck::{cli, logging, runner};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("gatecheck error: {err:?}");
        std::process::exit(1);
    }

    // All failures exit 1; the report format depends on the error kind.
    if let Err(err) = gatecheck::run(args).await {
        let _ = runner::report_failure(&err, &mut std::io::stdout());
        std::process::exit(1);
    }
}
