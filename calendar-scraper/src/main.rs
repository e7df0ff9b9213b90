mod error;
mod export;
mod extract;
mod site;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use crate::site::LegistarSite;

/// Scrape a Legistar meeting calendar into a CSV file.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Portal subdomain, e.g. "sunnyvaleca" for sunnyvaleca.legistar.com.
    subdomain: String,

    /// Calendar year to fetch, bypassing discovery. May be repeated.
    #[arg(long = "year", value_name = "YEAR")]
    years: Vec<String>,

    /// Output path. Defaults to legistar_<subdomain>.csv in the system
    /// temp directory.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let site = LegistarSite::new(&args.subdomain);
    println!("Scraping {}", site.url());
    let meetings = site.scrape(&args.years).await?;

    let outfile = args
        .out
        .unwrap_or_else(|| std::env::temp_dir().join(format!("legistar_{}.csv", args.subdomain)));
    println!("Writing {}", outfile.display());
    export::write_csv(&meetings, &outfile)?;

    Ok(())
}
