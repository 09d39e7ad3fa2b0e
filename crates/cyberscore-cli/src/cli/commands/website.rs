//! `cyberscore website` - Score a website.

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use cyberscore_core::{assess_website, WebsiteAssessment, WebsiteObservations};
use cyberscore_recon::reputation::{parse_verdict, Verdict};
use cyberscore_recon::transport::{normalize_url, whois_domain};
use cyberscore_recon::whois::parse_whois;
use cyberscore_recon::{DegradedSignal, Probed, WebsiteProbe};
use serde::Serialize;
use tracing::{debug, info};

use super::{print_degraded, read_signal_file, Context};
use crate::cli::args::WebsiteArgs;
use crate::education::Explain;
use crate::output::{print_score_pretty, print_structured, score_csv, OutputFormat};

#[derive(Serialize)]
struct WebsiteOutput<'a> {
    url: &'a str,
    #[serde(flatten)]
    assessment: &'a WebsiteAssessment,
    degraded: &'a [DegradedSignal],
}

pub fn execute(ctx: &Context, args: WebsiteArgs) -> Result<()> {
    if ctx.show_explanation() {
        Explain::website(&args.url).print();
    }

    let probed = gather(&args);
    let assessment = assess_website(&probed.observations);
    info!(
        url = %args.url,
        score = assessment.result.score,
        label = %assessment.result.label,
        "website scored"
    );

    let output = WebsiteOutput {
        url: &args.url,
        assessment: &assessment,
        degraded: &probed.degraded,
    };
    if print_structured(ctx.output_format, &output)? {
        return Ok(());
    }

    match ctx.output_format {
        OutputFormat::Csv => print!("{}", score_csv("website", &assessment.result)?),
        _ => {
            print_score_pretty(&format!("Website Analysis: {}", args.url), &assessment.result);
            if let Some(keyword) = assessment.matched_keyword {
                println!("  {} \"{}\"", "Matched keyword:".bold(), keyword.red());
                println!();
            }
            if ctx.verbose {
                println!("  {:?}", probed.observations);
                println!();
            }
            print_degraded(&probed.degraded);
            ctx.tip("Never enter passwords on a page you reached from an unexpected link.");
        }
    }

    Ok(())
}

/// Assemble observations. Inputs that were not supplied stay unknown;
/// inputs that fail to load or parse are recorded as degraded.
fn gather(args: &WebsiteArgs) -> Probed<WebsiteObservations> {
    let url = normalize_url(&args.url);
    let domain = url.as_ref().ok().and_then(whois_domain);
    let mut probe = WebsiteProbe::new().with_url(url);

    if let Some(malicious) = args.malicious {
        let verdict = if malicious {
            Verdict::Malicious {
                threats: Vec::new(),
            }
        } else {
            Verdict::Clean
        };
        probe = probe.with_verdict(Ok(verdict));
    } else if let Some(path) = &args.reputation {
        probe = probe.with_verdict(read_signal_file(path).and_then(|body| parse_verdict(&body)));
    }

    if let Some(years) = args.domain_age {
        probe = probe.with_domain_age(Ok(years));
    } else if let Some(path) = &args.whois {
        debug!(domain = domain.as_deref().unwrap_or("?"), path = %path, "reading WHOIS record");
        let age = read_signal_file(path)
            .and_then(|raw| parse_whois(&raw).require_age_years(Utc::now()));
        probe = probe.with_domain_age(age);
    }

    if let Some(text) = &args.content {
        probe = probe.with_content(Ok(text.clone()));
    } else if let Some(path) = &args.content_file {
        probe = probe.with_content(read_signal_file(path));
    }

    probe.finish()
}
