use heritage_core::catalog::CatalogError;
use heritage_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli::run_from_args() {
        eprintln!("heritage error: {:#}", err);
        let code = err
            .downcast_ref::<CatalogError>()
            .map(CatalogError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
