use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::ApplicationStatus;

#[derive(Parser)]
#[command(version, about = "Keep track of job applications", long_about = None)]
pub struct Args {
    /// Optionally specify the path to the config file to use.
    /// If not set, then the `JOBTRACK_CONFIG_FILE` environment variable will be used.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a new application, dated today.
    #[command(visible_alias = "a")]
    Add {
        company: String,
        role: Option<String>,

        #[arg(short, long, default_value_t = ApplicationStatus::ToApply)]
        status: ApplicationStatus,

        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// Show applications, optionally only those with the given statuses.
    #[command(visible_alias = "ls")]
    List {
        #[arg(short, long = "status", value_name = "STATUS")]
        statuses: Vec<ApplicationStatus>,
    },
    /// Remove applications by "Company - Role" label (every match) or by id.
    #[command(visible_alias = "rm")]
    Delete {
        labels: Vec<String>,

        #[arg(long = "id", value_name = "ID")]
        ids: Vec<usize>,
    },
    /// Replace all applications with the contents of a CSV file.
    Import { file_path: PathBuf },
    /// Write all applications as CSV.
    Export {
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List the statuses an application can have.
    Statuses,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_with_status() {
        let args = Args::parse_from(["jobtrack", "add", "Acme", "Eng", "-s", "interview"]);
        let Command::Add {
            company,
            role,
            status,
            notes,
        } = args.command
        else {
            panic!("expected add");
        };
        assert_eq!(company, "Acme");
        assert_eq!(role.as_deref(), Some("Eng"));
        assert_eq!(status, ApplicationStatus::Interview);
        assert_eq!(notes, "");
    }

    #[test]
    fn parse_list_statuses() {
        let args = Args::parse_from([
            "jobtrack",
            "--config",
            "c.json",
            "ls",
            "--status",
            "To Apply",
            "-s",
            "offer",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("c.json")));
        let Command::List { statuses } = args.command else {
            panic!("expected list");
        };
        assert_eq!(
            statuses,
            [ApplicationStatus::ToApply, ApplicationStatus::Offer]
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(Args::try_parse_from(["jobtrack", "add", "Acme", "-s", "ghosted"]).is_err());
    }

    #[test]
    fn parse_delete() {
        let args = Args::parse_from(["jobtrack", "rm", "Acme - Eng", "--id", "3"]);
        let Command::Delete { labels, ids } = args.command else {
            panic!("expected delete");
        };
        assert_eq!(labels, ["Acme - Eng"]);
        assert_eq!(ids, [3]);
    }
}
