use std::io::BufRead;
use std::time::{Duration, Instant};

use anyhow::ensure;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::commands::RotateArgs;
use crate::terminal::{format, print};
use rekey_common::config::Config;
use rekey_common::rotation::{HostTarget, RotationOutcome, RotationStatus, Strategy, TokenKind};
use rekey_common::{info, success};
use rekey_core::pipeline::RotationPipeline;
use rekey_core::remote::command::{CommandIdentity, CommandInventory};
use rekey_core::remote::probe::TcpProbe;

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

pub async fn rotate(args: RotateArgs, strategy: Strategy, cfg: &Config) -> anyhow::Result<()> {
    validate_inventory_flags(&args, &strategy)?;

    let hosts: Vec<String> = gather_hosts(args.hosts)?;
    ensure!(
        !hosts.is_empty(),
        "no hosts supplied on the command line or stdin"
    );

    let targets: Vec<HostTarget> = hosts
        .iter()
        .map(|host| HostTarget::new(host, &args.account))
        .collect();
    info!("rotating '{}' on {} host(s)", args.account, targets.len());

    let pipeline = RotationPipeline::new(
        Box::new(TcpProbe::new(args.probe_port, PROBE_TIMEOUT)),
        Box::new(CommandInventory {
            serial_cmd: args.serial_cmd,
            mac_cmd: args.mac_cmd,
        }),
        Box::new(CommandIdentity {
            apply_cmd: args.apply_cmd,
        }),
        strategy,
        cfg.timeout,
    );

    print::header("password rotation", cfg.quiet);
    if cfg.csv {
        println!("{}", format::CSV_HEADER);
    }

    let bar: ProgressBar = progress_bar(targets.len(), cfg);
    let start_time: Instant = Instant::now();

    // Rows are rendered as each host completes, not after the batch.
    let outcomes = pipeline
        .run(&targets, |outcome| {
            bar.suspend(|| println!("{}", format::render_row(outcome, cfg)));
            bar.inc(1);
        })
        .await;

    bar.finish_and_clear();
    print_summary(&outcomes, start_time.elapsed(), cfg);
    Ok(())
}

/// Positional hosts win; otherwise read newline-separated hosts from stdin
/// so the tool composes with whatever produces the fleet list.
fn gather_hosts(hosts: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !hosts.is_empty() {
        return Ok(hosts);
    }

    let mut collected: Vec<String> = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line: String = line?;
        let trimmed: &str = line.trim();
        if !trimmed.is_empty() {
            collected.push(trimmed.to_string());
        }
    }
    Ok(collected)
}

fn validate_inventory_flags(args: &RotateArgs, strategy: &Strategy) -> anyhow::Result<()> {
    if let Strategy::Token { kind, .. } = strategy {
        match kind {
            TokenKind::Serial => ensure!(
                args.serial_cmd.is_some(),
                "--serial-cmd is required with --token serial"
            ),
            TokenKind::Mac => ensure!(
                args.mac_cmd.is_some(),
                "--mac-cmd is required with --token mac"
            ),
            TokenKind::Hostname => {}
        }
    }
    Ok(())
}

fn progress_bar(total: usize, cfg: &Config) -> ProgressBar {
    if cfg.quiet >= 2 {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}")
            .expect("static template"),
    );
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn print_summary(outcomes: &[RotationOutcome], total_time: Duration, cfg: &Config) {
    let rotated: usize = outcomes
        .iter()
        .filter(|o| o.status == RotationStatus::Successful)
        .count();
    let failed: usize = outcomes.len() - rotated;

    let rotated: ColoredString = format!("{rotated} rotated").bold().green();
    let failed: ColoredString = if failed > 0 {
        format!("{failed} failed").bold().red()
    } else {
        format!("{failed} failed").normal()
    };
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    print::fat_separator(cfg.quiet);
    success!("{rotated}, {failed} in {elapsed}");
}
