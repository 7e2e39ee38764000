fn main() {
    grain_evolver::init_logging();

    // 1. Parse commandline arguments, then run the requested command
    let cli = grain_evolver::args::parse_cli_args();
    if let Err(err) = grain_evolver::handle_cli_args(cli) {
        eprintln!("PROCESS ERROR!");
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
