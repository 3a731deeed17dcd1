//! One-shot report generation for scripted use.

use std::path::Path;

use anyhow::{anyhow, bail, Result};

use al_app::{usage_notice, FlowController, ReportService};
use al_core::ports::CardDetails;
use al_core::usage::USES_PER_PAYMENT;
use al_core::{AppStep, UserData};
use al_infra::media_fs::load_image_as_data_url;

use crate::render;
use crate::wiring::{self, AppDeps};

/// Drive the whole flow non-interactively: submit the image, optionally pay,
/// process, print the report. Exits with an error when the flow lands back
/// on Upload.
pub async fn report(
    deps: AppDeps,
    image: &Path,
    include: Vec<String>,
    exclude: Vec<String>,
    pay: bool,
) -> Result<()> {
    let model = wiring::build_model(&deps.config)?;
    let mut flow = FlowController::new(
        deps.usage_store.clone(),
        deps.payment.clone(),
        ReportService::new(model),
    )
    .await?;

    flow.start()?;

    let data = UserData {
        image: load_image_as_data_url(image)?,
        include_regions: include,
        exclude_regions: exclude,
    };

    if flow.submit(data)? == AppStep::Payment {
        if let Some(line) = usage_notice(AppStep::Payment, flow.counters()) {
            render::notice(&line);
        }
        if !pay {
            bail!(
                "no uses remaining; pass --pay to buy {USES_PER_PAYMENT} more (simulated payment)"
            );
        }
        println!("جاري معالجة الدفع...");
        // The simulated gateway ignores the card; any well-formed input does.
        flow.complete_payment(&CardDetails {
            number: "4242 4242 4242 4242".to_string(),
            expiry: "12/30".to_string(),
            cvc: "123".to_string(),
        })
        .await?;
    }

    println!("التحليل قيد التنفيذ...");
    match flow.process().await? {
        AppStep::Results => {
            if let Some(report) = flow.report() {
                render::print_report(report);
            }
            Ok(())
        }
        _ => Err(anyhow!(
            flow.error().unwrap_or("report generation failed").to_string()
        )),
    }
}
