use anyhow::Result;
use clap::Parser;

use deepl_tmx::cli::commands::{config, translate, usage};
use deepl_tmx::cli::{Args, Command};
use deepl_tmx::output::{self, OutputConfig};
use deepl_tmx::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    // A local .env file may provide AUTH_KEY; a missing file is fine.
    let _ = dotenvy::dotenv();

    match args.command {
        Some(Command::Usage) => usage::print_usage().await?,
        Some(Command::Languages) => print_languages(),
        Some(Command::Config) => config::print_config()?,
        None => {
            let options = translate::TranslateOptions {
                inputs: args.inputs,
                output_dir: args.output_dir,
                dry_run: args.dry_run,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
