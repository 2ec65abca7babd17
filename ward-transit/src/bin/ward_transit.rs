use clap::Parser;
use ward_transit::app::WardTransitApp;

fn main() {
    env_logger::init();
    let args = WardTransitApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("ward-transit failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
