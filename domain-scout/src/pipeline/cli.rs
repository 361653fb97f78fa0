//! CLI argument parsing for the research pipeline

use clap::Parser;

use crate::pipeline::workflow::PipelineConfig;

/// Domain Research Pipeline CLI Arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "domain-scout",
    about = "Generate domain name candidates, then appraise and research a selected shortlist"
)]
pub struct Args {
    /// Business or project description seeding name generation
    #[arg(short, long)]
    pub input: Option<String>,

    /// Industry sector
    #[arg(long)]
    pub industry: Option<String>,

    /// Maximum length of generated labels
    #[arg(long, default_value = "15")]
    pub max_length: usize,

    /// Allow digits in generated labels
    #[arg(long)]
    pub include_numbers: bool,

    /// Comma-separated phases to execute (1=generate, 2=appraise, 3=research)
    #[arg(long, default_value = "1,2,3")]
    pub phases: String,

    /// Number of per-domain lookups to run in parallel (default: 1 for sequential)
    #[arg(long, default_value = "1")]
    pub batch_size: usize,

    /// Comma-separated selected names (at least 2) to analyze
    #[arg(short, long)]
    pub select: Option<String>,

    /// Path to saved candidates YAML (for resuming past phase 1)
    #[arg(long)]
    pub candidates_file: Option<String>,

    /// Path to saved appraisals YAML (for resuming past phase 2)
    #[arg(long)]
    pub appraisals_file: Option<String>,

    /// Research only domains the registrar reported available
    #[arg(long)]
    pub available_only: bool,

    /// Base directory for OUTPUT/ and RESULTS/ state files
    #[arg(long)]
    pub dir: Option<String>,

    /// Print the outcome as JSON instead of a human summary
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Parse the comma-separated phases string into a Vec<u32>
    pub fn parse_phases(&self) -> Vec<u32> {
        self.phases
            .split(',')
            .filter_map(|p| p.trim().parse().ok())
            .collect()
    }

    /// Parse the comma-separated selection into individual names
    pub fn parse_selected(&self) -> Vec<String> {
        self.select
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl From<Args> for PipelineConfig {
    fn from(args: Args) -> Self {
        let phases = args.parse_phases();
        let selected = args.parse_selected();
        PipelineConfig {
            description: args.input,
            industry: args.industry,
            max_length: args.max_length,
            include_numbers: args.include_numbers,
            phases,
            batch_size: args.batch_size,
            selected,
            candidates_file: args.candidates_file,
            appraisals_file: args.appraisals_file,
            available_only: args.available_only,
            dir: args.dir,
        }
    }
}
