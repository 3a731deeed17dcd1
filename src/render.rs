//! Terminal rendering of the report and screen headers.

use al_core::AncestryReport;

const RULE: &str = "────────────────────────────────────────";

pub fn heading(title: &str) {
    println!();
    println!("{RULE}");
    println!("  {title}");
    println!("{RULE}");
}

pub fn error_banner(message: &str) {
    println!();
    println!("  !! {message}");
}

pub fn notice(message: &str) {
    println!();
    println!("  ℹ {message}");
}

pub fn print_report(report: &AncestryReport) {
    heading("تقرير أصولك الجينية");

    println!();
    println!("ملخص التقرير");
    println!("{}", report.summary);

    println!();
    println!("التوزيع الجيني");
    for region in &report.regional_breakdown {
        let confidence = region
            .confidence
            .map(|c| format!(" (الثقة: {})", c.label()))
            .unwrap_or_default();
        println!("  {:>5.0}%  {}{}", region.percentage, region.region, confidence);
    }

    if !report.historical_contexts.is_empty() {
        println!();
        println!("السياق التاريخي");
        for context in &report.historical_contexts {
            println!();
            println!("  {}", context.region);
            println!("  {}", context.context);
        }
    }
    println!();
}
