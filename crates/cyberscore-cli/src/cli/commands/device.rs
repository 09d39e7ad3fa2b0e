//! `cyberscore device` - Score a device and its network connection.

use anyhow::Result;
use cyberscore_core::{score_device, DeviceObservations, ScoreResult};
use cyberscore_recon::device::DeviceReport;
use cyberscore_recon::{DegradedSignal, DeviceProbe, Probed};
use serde::Serialize;
use tracing::info;

use super::{print_degraded, read_signal_file, Context};
use crate::cli::args::{expand_path, DeviceArgs};
use crate::education::Explain;
use crate::output::{print_score_pretty, print_structured, score_csv, OutputFormat};

#[derive(Serialize)]
struct DeviceOutput<'a> {
    #[serde(flatten)]
    result: &'a ScoreResult,
    observations: &'a DeviceObservations,
    degraded: &'a [DegradedSignal],
}

pub fn execute(ctx: &Context, args: DeviceArgs) -> Result<()> {
    if ctx.show_explanation() {
        Explain::device().print();
    }

    let probed = gather(&args);
    let result = score_device(&probed.observations);
    info!(score = result.score, label = %result.label, "device scored");

    let output = DeviceOutput {
        result: &result,
        observations: &probed.observations,
        degraded: &probed.degraded,
    };
    if print_structured(ctx.output_format, &output)? {
        return Ok(());
    }

    match ctx.output_format {
        OutputFormat::Csv => print!("{}", score_csv("device", &result)?),
        _ => {
            print_score_pretty("Device Security Score", &result);
            if ctx.verbose {
                println!("  {:?}", probed.observations);
                println!();
            }
            print_degraded(&probed.degraded);
            if !result.is_clean() {
                ctx.tip("Review app permissions you don't need, and prefer trusted Wi-Fi or a VPN.");
            }
        }
    }

    Ok(())
}

/// Merge a report file (if any) with explicit flags; flags win.
fn gather(args: &DeviceArgs) -> Probed<DeviceObservations> {
    let mut probe = DeviceProbe::new();

    if let Some(raw) = &args.from {
        let path = expand_path(raw);
        let report = read_signal_file(raw)
            .and_then(|content| DeviceReport::from_path_content(&path, &content));
        probe = probe.with_report(report);
    }
    if let Some(network) = args.network {
        probe = probe.with_network(Ok(network));
    }
    if let Some(rooted) = args.rooted {
        probe = probe.with_rooted(Ok(rooted));
    }
    if let Some(biometric) = args.biometric {
        probe = probe.with_biometric(Ok(biometric));
    }
    if let Some(camera) = args.camera {
        probe = probe.with_camera(Ok(camera));
    }
    if let Some(location) = args.location {
        probe = probe.with_location(Ok(location));
    }

    probe.finish()
}
