use super::WardTransitOperation;
use clap::Parser;

/// command line tool for estimating bus route durations from zone-to-zone travel times
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct WardTransitApp {
    #[command(subcommand)]
    pub op: WardTransitOperation,
}
