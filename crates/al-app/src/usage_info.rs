//! Usage notice shown on the Upload and Payment screens.

use al_core::{AppStep, UsageCounters};

/// The informational line about remaining attempts, or `None` when the
/// current step does not show one.
pub fn usage_notice(step: AppStep, counters: &UsageCounters) -> Option<String> {
    if !step.shows_usage_info() {
        return None;
    }

    if counters.usage_count == 0 {
        Some("لديك محاولة واحدة مجانية متبقية.".to_string())
    } else if counters.remaining_uses > 0 {
        Some(format!(
            "لديك {} محاولات متبقية.",
            counters.remaining_uses
        ))
    } else if step == AppStep::Upload {
        Some("انتهت محاولاتك. المتابعة ستنقلك إلى صفحة الدفع.".to_string())
    } else {
        None
    }
}
