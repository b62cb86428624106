use bikeshare::app::cli_args::CliArgs;
use bikeshare::app::menu;
use clap::Parser;

fn main() {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = CliArgs::parse();
    let data_dir = args.resolve_data_dir();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    match menu::run(&mut input, &data_dir) {
        Ok(_) => {}
        Err(e) => {
            log::error!("failed running bikeshare: {e}");
            std::process::exit(1);
        }
    }
}
