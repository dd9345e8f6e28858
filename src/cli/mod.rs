use clap::{Args, Subcommand};

use crate::domain::{MileageUnit, VehicleDescriptor};

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, env = "CARMATCH_HOST", default_value = "0.0.0.0")]
        host: String,

        #[arg(short, long, env = "CARMATCH_PORT", default_value = "8000")]
        port: u16,

        /// Allowed CORS origin (repeatable)
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
    },

    /// Estimate the price of one vehicle and print the result as JSON
    Estimate {
        #[command(flatten)]
        vehicle: VehicleArgs,
    },

    /// Compare two vehicles described in free text
    Compare {
        /// Description of the first vehicle
        #[arg(long)]
        first: String,

        /// Description of the second vehicle
        #[arg(long)]
        second: String,
    },

    /// Extract structured fields from a free-text description
    Extract {
        description: String,
    },
}

#[derive(Args)]
pub struct VehicleArgs {
    /// Free-text description of the vehicle
    #[arg(short, long)]
    pub description: String,

    #[arg(long)]
    pub make: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub year: Option<String>,

    #[arg(long)]
    pub mileage: Option<String>,

    /// Mileage is in kilometres rather than miles
    #[arg(long)]
    pub km: bool,

    #[arg(long)]
    pub condition: Option<String>,

    #[arg(long)]
    pub location: Option<String>,
}

impl VehicleArgs {
    pub fn into_descriptor(self) -> VehicleDescriptor {
        let mut vehicle = VehicleDescriptor::new(self.description);
        if let Some(make) = self.make {
            vehicle = vehicle.with_make(make);
        }
        if let Some(model) = self.model {
            vehicle = vehicle.with_model(model);
        }
        if let Some(year) = self.year {
            vehicle = vehicle.with_year(year);
        }
        if let Some(mileage) = self.mileage {
            let unit = if self.km { MileageUnit::Km } else { MileageUnit::Miles };
            vehicle = vehicle.with_mileage(mileage, unit);
        }
        if let Some(condition) = self.condition {
            vehicle = vehicle.with_condition(condition);
        }
        if let Some(location) = self.location {
            vehicle = vehicle.with_location(location);
        }
        vehicle
    }
}
