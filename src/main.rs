fn main() {

    // 1. Parse commandline arguments
    let cli = match planar::args::parse_cli_args() {
        Ok(cli) => cli,
        Err(planar::args::ArgError::ClapError(err)) if !err.use_stderr() => {
            // --help and --version
            err.exit();
        },
        Err(err) => {
            println!("CLI ERROR!");
            println!("{}", err);
            std::process::exit(2);
        },
    };

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    // 2. Run the subcommand and print its output
    match planar::run(&cli) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            println!("PROCESS ERROR!");
            println!("{}", err);
            std::process::exit(1);
        },
    };
}
