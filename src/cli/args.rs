use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "mers_shop")]
#[command(about = "MERS Clothing Line shopping system")]
#[command(version)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not clear the screen between menus
    #[arg(long)]
    pub no_clear: bool,
}
