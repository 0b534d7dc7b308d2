use std::path::PathBuf;

use clap::Parser;
use ipnet::Ipv4Net;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_required_field,
    validate_subnet_pair, Validate,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "range-filler")]
#[command(about = "Bulk load newly available host addresses into the regional IP inventory")]
pub struct CliConfig {
    /// Deployment environment (local/dev/stage/prod)
    #[arg(long, default_value = "dev")]
    pub env: String,

    /// Target region whose inventory receives the addresses
    #[arg(long = "api_region")]
    pub api_region: String,

    /// AWS region hosting the database credentials secret
    #[arg(long = "db_region")]
    pub db_region: Option<String>,

    /// Expanded network range
    #[arg(long = "expanded_network", default_value = "172.18.0.0/15")]
    pub expanded_network: Ipv4Net,

    /// Currently provisioned network range
    #[arg(long = "current_network", default_value = "172.18.0.0/16")]
    pub current_network: Ipv4Net,

    /// Number of concurrent batch workers
    #[arg(long = "batch_count", default_value = "3")]
    pub batch_count: usize,

    /// Addresses per storage write
    #[arg(long = "chunk_size", default_value = "100")]
    pub chunk_size: usize,

    /// TOML file replacing the built-in environment map
    #[arg(long = "environments_file")]
    pub environments_file: Option<PathBuf>,

    /// AWS profile used for the secret lookup
    #[arg(long)]
    pub profile: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_region", &self.api_region)?;
        validate_positive_number("batch_count", self.batch_count, 1)?;
        validate_positive_number("chunk_size", self.chunk_size, 1)?;
        validate_subnet_pair(&self.expanded_network, &self.current_network)?;

        if self.env != "local" {
            validate_required_field("db_region", &self.db_region)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(
            std::iter::once("range-filler").chain(args.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_match_reference_invocation() {
        let config = config(&["--api_region", "us-east-1", "--db_region", "eu-west-1"]);

        assert_eq!(config.env, "dev");
        assert_eq!(config.expanded_network, "172.18.0.0/15".parse().unwrap());
        assert_eq!(config.current_network, "172.18.0.0/16".parse().unwrap());
        assert_eq!(config.batch_count, 3);
        assert_eq!(config.chunk_size, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_db_region_required_outside_local() {
        let config = config(&["--api_region", "us-east-1"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_local_env_needs_no_db_region() {
        let config = config(&["--env", "local", "--api_region", "us-east-1"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_subset_ranges_are_rejected() {
        let config = config(&[
            "--api_region",
            "us-east-1",
            "--db_region",
            "eu-west-1",
            "--expanded_network",
            "10.0.0.0/16",
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_batch_count_is_rejected() {
        let config = config(&[
            "--api_region",
            "us-east-1",
            "--db_region",
            "eu-west-1",
            "--batch_count",
            "0",
        ]);
        assert!(config.validate().is_err());
    }
}
