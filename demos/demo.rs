//! Prints disposable-email classification for a fixed set of samples.
//!
//! ```text
//! cargo run --example demo
//! cargo run --example demo -- --json
//! cargo run --example demo -- --blocklist ./my_list.conf
//! ```

use std::path::PathBuf;

use clap::Parser;
use email_disposable::{report, CheckerOptions, DisposableChecker};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct DemoArgs {
    /// Print the results as JSON instead of text
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Blocklist file to use instead of the embedded list
    #[arg(short, long)]
    blocklist: Option<PathBuf>,
}

const EMAILS: &[&str] = &[
    "user@gmail.com",
    "test@tempmail.com",
    "admin@0-mail.com",
    "contact@yahoo.com",
    "fake@10minutemail.com",
    "real@mycompany.com",
];

const DOMAINS: &[&str] = &[
    "gmail.com",
    "tempmail.com",
    "guerrillamail.com",
    "microsoft.com",
];

const CASE_SAMPLES: &[&str] = &["USER@0-MAIL.COM", "User@0-Mail.Com", "user@0-mail.com"];

fn main() -> email_disposable::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = DemoArgs::parse();

    let mut options = CheckerOptions::from_env();
    if let Some(path) = args.blocklist {
        options = options.with_blocklist_path(path);
    }
    let checker = DisposableChecker::new(options)?;

    if args.json {
        let mut samples: Vec<&str> = EMAILS.to_vec();
        samples.extend_from_slice(CASE_SAMPLES);
        println!("{}", report::reports_to_json(&checker.check_all(samples))?);
        println!("{}", checker.stats().to_json()?);
        return Ok(());
    }

    println!("=== Disposable Email Checker Demo ===\n");

    println!("Checking emails:");
    for report in checker.check_all(EMAILS) {
        println!("  {}", report);
    }

    println!("\nChecking domains:");
    for domain in DOMAINS {
        let status = if checker.is_disposable_domain(domain) {
            "disposable"
        } else {
            "legitimate"
        };
        println!("  {} → {}", domain, status);
    }

    println!("\nStatistics:");
    println!("  {}", checker.stats());

    println!("\nCase sensitivity test:");
    for email in CASE_SAMPLES {
        println!("  {} → disposable: {}", email, checker.is_disposable(email));
    }

    Ok(())
}
