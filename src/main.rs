use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use yarish::config::VerifyConfig;
use yarish::registry::DirectoryRegistry;
use yarish::sha256;
use yarish::verify::{Document, Verification, Verifier};

/// 计算文档的SHA-256摘要，并在登记目录中校验其真实性
///
/// `verify`在文档未登记时以状态码1退出
#[derive(Parser, Debug)]
#[command(name = "yarish", version, about)]
struct Cli {
    /// JSON配置文件
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 输出文件的摘要
    Digest { file: PathBuf },
    /// 校验文件是否为已登记的文档
    Verify { file: PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => VerifyConfig::load(path)?,
        None => VerifyConfig::default(),
    };

    match cli.command {
        Commands::Digest { file } => {
            let document = Document::open(&file).with_context(|| format!("failed to read {}", file.display()))?;
            println!("{}", sha256::digest(document.bytes()));
        }
        Commands::Verify { file } => {
            let registry = DirectoryRegistry::new(config.registry_root.clone());
            let verifier = Verifier::new(config, registry);

            let result = verifier.verify_path(&file).with_context(|| format!("failed to verify {}", file.display()))?;
            match result {
                Verification::Verified { hash, record } => {
                    println!("Document verified");
                    println!("  Reference Number: {}", record.reference_number);
                    println!("  Issue Date:       {}", record.issue_date);
                    println!("  Organization:     {}", record.organization.name);
                    println!("  Verification ID:  {}", record.verification_id);
                    println!("  SHA-256:          {}", hash);
                }
                Verification::NotFound { hash } => {
                    println!("Document not verified");
                    let config = verifier.config();
                    println!(
                        "  No document with hash {} has been authenticated by {} ({})",
                        hash, config.organization_name, config.organization_domain
                    );
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
