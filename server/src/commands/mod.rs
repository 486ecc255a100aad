use clap::Subcommand;

use crate::Result;

pub(crate) mod print;
pub(crate) mod validate;

#[derive(Subcommand, Default)]
pub enum Command {
    /// Serve the resume page over HTTP
    #[default]
    Serve,
    /// Print the component markup to stdout
    Print,
    /// Check the rendered component against its fixed layout
    Validate,
}

impl Command {
    pub async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve => crate::http_server::cmd::serve().await,
            Command::Print => print::print_markup(),
            Command::Validate => validate::validate(),
        }
    }
}
