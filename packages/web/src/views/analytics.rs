use dioxus::prelude::*;
use store::models::analytics::click_through_rate;
use ui::format;
use ui::{
    t, use_api, use_config, use_language, BarChart, ChartPoint, ErrorText, Key, Spinner, StatCard,
};

/// Totals plus day-by-day charts for views, clicks, spend and CTR.
#[component]
pub fn Analytics() -> Element {
    let api = use_api();
    let lang = use_language();
    let currency = use_config().ui.currency;

    let report = use_resource(move || {
        let api = api.clone();
        async move {
            let stats = api.get_user_stats().await;
            let report = match stats {
                Ok(stats) => api.get_user_analytics().await.map(|daily| (stats, daily)),
                Err(e) => Err(e),
            };
            if let Err(e) = &report {
                tracing::error!("Failed to load analytics: {}", e);
            }
            report
        }
    });

    let body = match &*report.read() {
        None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
        Some(Err(e)) => rsx! { ErrorText { message: e.to_string() } },
        Some(Ok((stats, daily))) => {
            let views: Vec<ChartPoint> = daily
                .iter()
                .map(|d| ChartPoint::new(format::day(&d.date), d.views as f64))
                .collect();
            let clicks: Vec<ChartPoint> = daily
                .iter()
                .map(|d| ChartPoint::new(format::day(&d.date), d.clicks as f64))
                .collect();
            let spent: Vec<ChartPoint> = daily
                .iter()
                .map(|d| ChartPoint::new(format::day(&d.date), d.money_spent))
                .collect();
            let ctr: Vec<ChartPoint> = daily
                .iter()
                .map(|d| ChartPoint::new(format::day(&d.date), click_through_rate(d.views, d.clicks)))
                .collect();

            rsx! {
                div {
                    class: "stat-grid",
                    StatCard { label: t(lang(), Key::Views).to_string(), value: format::count(stats.total_views) }
                    StatCard { label: t(lang(), Key::Clicks).to_string(), value: format::count(stats.total_clicks) }
                    StatCard { label: t(lang(), Key::ClickThroughRate).to_string(), value: format::percent(stats.click_through_rate()) }
                    StatCard { label: t(lang(), Key::Spent).to_string(), value: format::money(stats.total_spent, &currency) }
                }
                if daily.is_empty() {
                    p { class: "empty", "{t(lang(), Key::NoData)}" }
                } else {
                    BarChart { title: t(lang(), Key::Views).to_string(), points: views }
                    BarChart { title: t(lang(), Key::Clicks).to_string(), points: clicks }
                    BarChart { title: t(lang(), Key::ClickThroughRate).to_string(), points: ctr }
                    BarChart { title: t(lang(), Key::Spent).to_string(), points: spent }
                }
            }
        }
    };

    rsx! {
        h1 { "{t(lang(), Key::Analytics)}" }
        {body}
    }
}
