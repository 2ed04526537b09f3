use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use ecoleta_core::entities::ItemId;

#[derive(Parser, Debug)]
#[command(name = "ecoleta", version, about = "Register collection points for recyclable waste")]
pub struct Cli {
    /// Configuration file (default: ecoleta.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the item categories a point may collect
    Items,
    /// List all regions
    Regions,
    /// List the subregions of a region
    Subregions {
        /// Abbreviation of the region, e.g. SP
        region: String,
    },
    /// Register a new collection point
    CreatePoint(CreatePointArgs),
}

#[derive(Args, Debug)]
pub struct CreatePointArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub whatsapp: String,
    /// Abbreviation of the region, e.g. SP
    #[arg(long)]
    pub region: String,
    /// Name of a subregion of the region
    #[arg(long)]
    pub subregion: String,
    /// Latitude of the point (default: bootstrap position)
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Longitude of the point (default: bootstrap position)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
    /// ID of a collected item (repeatable)
    #[arg(long = "item", value_name = "ID")]
    pub items: Vec<ItemId>,
    /// Photo of the point
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_create_point() {
        let cli = Cli::try_parse_from([
            "ecoleta",
            "create-point",
            "--name",
            "Coleta Sul",
            "--email",
            "sul@example.org",
            "--whatsapp",
            "5511999999999",
            "--region",
            "SP",
            "--subregion",
            "Campinas",
            "--lat",
            "-23.5",
            "--lng",
            "-46.6",
            "--item",
            "3",
            "--item",
            "7",
        ])
        .unwrap();
        let Command::CreatePoint(args) = cli.command else {
            panic!("unexpected command");
        };
        assert_eq!(args.lat, Some(-23.5));
        assert_eq!(args.lng, Some(-46.6));
        assert_eq!(args.items, [ItemId::new(3), ItemId::new(7)]);
        assert!(args.image.is_none());
    }

    #[test]
    fn latitude_requires_longitude() {
        let res = Cli::try_parse_from([
            "ecoleta",
            "create-point",
            "--name=a",
            "--email=b",
            "--whatsapp=c",
            "--region=SP",
            "--subregion=Campinas",
            "--lat=1.0",
        ]);
        assert!(res.is_err());
    }
}
