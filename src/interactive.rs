//! Interactive five-step flow on stdin/stdout.
//!
//! This is the stand-in for the original browser screens: one screen per
//! flow step, plus the admin surface reachable through the `#/admin` route
//! or the hidden footer trigger.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use al_app::{usage_notice, AdminLogin, EarningsDashboard, FlowController, ReportService};
use al_core::admin::{AccessTrigger, AdminSession};
use al_core::flow::FlowError;
use al_core::ports::CardDetails;
use al_core::{AppConfig, AppStep, Route, UserData};
use al_infra::media_fs::load_image_as_data_url;

use crate::render;
use crate::wiring::{self, AppDeps};

/// Read one trimmed line after a prompt; `None` on EOF.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Comma-separated region list, as the upload form parses it.
fn parse_regions(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect()
}

fn is_quit(input: &str) -> bool {
    matches!(input, "q" | "quit" | "خروج")
}

/// Run the interactive flow until the user quits.
pub async fn run(deps: AppDeps) -> Result<()> {
    let model = wiring::build_model(&deps.config)?;
    let mut flow = FlowController::new(
        deps.usage_store.clone(),
        deps.payment.clone(),
        ReportService::new(model),
    )
    .await?;

    let mut trigger = AccessTrigger::new();

    loop {
        match flow.step() {
            AppStep::Landing => {
                render::heading("اكتشف قصة أصولك");
                println!("مستكشف الأنساب © 2024. للأغراض التوضيحية فقط.");
                if flow.counters().usage_count == 0 {
                    println!("تجربتك الأولى مجانية بالكامل!");
                }

                let Some(input) = prompt("\n[Enter] للبدء، q للخروج: ")? else {
                    break;
                };
                if is_quit(&input) {
                    break;
                }
                match input.as_str() {
                    "" | "start" => flow.start()?,
                    "." => {
                        if trigger.activate(Instant::now()) {
                            admin_portal(&deps).await?;
                        }
                    }
                    other => match Route::parse(other) {
                        // The dashboard route redirects through login when no
                        // session is authenticated yet, which is always the
                        // case here.
                        Route::AdminLogin | Route::AdminDashboard => admin_portal(&deps).await?,
                        Route::Main => {}
                    },
                }
            }

            AppStep::Upload => {
                render::heading("الخطوة الأولى: حمّل صورتك");
                if let Some(message) = flow.error() {
                    render::error_banner(message);
                }
                if let Some(line) = usage_notice(AppStep::Upload, flow.counters()) {
                    render::notice(&line);
                }

                let Some(path) = prompt("\nمسار ملف الصورة (q للخروج): ")? else {
                    break;
                };
                if is_quit(&path) {
                    break;
                }
                let image = match load_image_as_data_url(Path::new(&path)) {
                    Ok(url) => url,
                    Err(err) => {
                        render::error_banner(&format!("تعذر قراءة الصورة: {err}"));
                        continue;
                    }
                };

                let Some(include) = prompt("مناطق تريد التركيز عليها (اختياري، افصل بفاصلة): ")?
                else {
                    break;
                };
                let Some(exclude) = prompt("مناطق تريد استبعادها (اختياري، افصل بفاصلة): ")?
                else {
                    break;
                };

                let data = UserData {
                    image,
                    include_regions: parse_regions(&include),
                    exclude_regions: parse_regions(&exclude),
                };
                match flow.submit(data) {
                    Ok(_) => {}
                    Err(FlowError::MissingImage) => {
                        render::error_banner("الرجاء اختيار صورة أولاً.");
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            AppStep::Payment => {
                render::heading("الخطوة الثانية: الدفع الآمن");
                println!("باقة تحليلات (5 استخدامات): $5.00");
                println!("هذه عملية دفع وهمية لأغراض العرض فقط.");
                if let Some(line) = usage_notice(AppStep::Payment, flow.counters()) {
                    render::notice(&line);
                }

                let Some(number) = prompt("\nرقم البطاقة: ")? else {
                    break;
                };
                if is_quit(&number) {
                    break;
                }
                let Some(expiry) = prompt("تاريخ الانتهاء: ")? else {
                    break;
                };
                let Some(cvc) = prompt("CVC: ")? else {
                    break;
                };

                println!("\nجاري معالجة الدفع...");
                flow.complete_payment(&CardDetails {
                    number,
                    expiry,
                    cvc,
                })
                .await?;
            }

            AppStep::Processing => {
                render::heading("التحليل قيد التنفيذ");
                println!("قد تستغرق هذه العملية بضع لحظات. شكرًا لصبرك.");
                flow.process().await?;
            }

            AppStep::Results => {
                if let Some(report) = flow.report() {
                    render::print_report(report);
                }

                let Some(input) = prompt("[Enter] للبدء من جديد، q للخروج: ")? else {
                    break;
                };
                if is_quit(&input) {
                    break;
                }
                flow.reset()?;
            }
        }
    }

    Ok(())
}

/// The standalone `admin` subcommand: straight to the login form.
pub async fn admin(deps: &AppDeps) -> Result<()> {
    admin_portal(deps).await
}

/// Login form, then the earnings dashboard.
async fn admin_portal(deps: &AppDeps) -> Result<()> {
    let login = AdminLogin::new(deps.verifier.clone());
    let dashboard = EarningsDashboard::new(deps.usage_store.clone());

    render::heading("تسجيل دخول المدير");
    println!("الوصول مقصور على المصرح لهم فقط.");

    let mut session = loop {
        let Some(username) = prompt("\nاسم المستخدم (فارغ للعودة): ")? else {
            return Ok(());
        };
        if username.is_empty() {
            return Ok(());
        }
        let Some(password) = prompt("كلمة المرور: ")? else {
            return Ok(());
        };

        match login.execute(&username, &password) {
            Ok(session) => break session,
            Err(err) => render::error_banner(&err.to_string()),
        }
    };

    run_dashboard(&dashboard, &deps.config, &mut session).await
}

async fn run_dashboard(
    dashboard: &EarningsDashboard,
    config: &AppConfig,
    session: &mut AdminSession,
) -> Result<()> {
    while session.is_authenticated() {
        let summary = dashboard.summary().await?;

        render::heading("لوحة تحكم الأرباح");
        println!("إجمالي الأرباح المسجلة: ${}.00", summary.earnings_usd);
        println!("بناءً على {} عملية دفع ناجحة.", summary.total_payments);
        println!("يتم إرسال الأرباح يدويًا إلى: {}", config.admin.payout_tag);

        let Some(input) = prompt("\n[reset] إعادة تعيين العداد، [Enter] تسجيل الخروج: ")? else {
            break;
        };
        match input.as_str() {
            "reset" => {
                dashboard.reset().await?;
                println!("تم إعادة تعيين العداد بنجاح!");
            }
            _ => session.logout(),
        }
    }
    Ok(())
}
