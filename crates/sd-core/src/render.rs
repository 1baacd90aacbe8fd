//! Plain-text rendering of a dashboard response.

use sd_math::round_to;

use crate::alerts::Severity;
use crate::dashboard::DashboardResponse;

/// Render the dashboard as terminal sections.
pub fn render_text(resp: &DashboardResponse) -> String {
    let mut lines = Vec::new();
    let dash = &resp.dashboard;

    if let Some(notice) = resp.sheet_sync.notice() {
        lines.push(format!("! {notice}"));
        lines.push(String::new());
    }

    lines.push(format!(
        "Session {} ({} lead generation rows, {} sales rows)",
        resp.session_id, resp.leadgen_rows, resp.sales_rows
    ));
    for rejection in &resp.rejected {
        lines.push(format!(
            "  rejected {} #{}: {}",
            rejection.form, rejection.index, rejection.reason
        ));
    }
    lines.push(String::new());

    section(&mut lines, "Calculated Metrics");
    lines.push("Lead Generation Metrics".to_string());
    if dash.leadgen_metrics.is_empty() {
        lines.push("  (no lead generation data)".to_string());
    } else {
        lines.push(format!(
            "  {:<12} {:>10} {:>14} {:>20}",
            "Sector", "Lead→Appt", "Cost per Lead", "Cost per Appointment"
        ));
        for (sector, rate) in &dash.leadgen_metrics.lead_to_appointment {
            let cpl = dash.leadgen_metrics.cost_per_lead.get(sector).copied().unwrap_or(0.0);
            let cpa = dash
                .leadgen_metrics
                .cost_per_appointment
                .get(sector)
                .copied()
                .unwrap_or(0.0);
            lines.push(format!(
                "  {:<12} {:>10.2} {:>14.2} {:>20.2}",
                sector.as_str(),
                rate,
                cpl,
                cpa
            ));
        }
    }

    lines.push("Sales Metrics".to_string());
    if dash.rep_metrics.is_empty() {
        lines.push("  (no sales data)".to_string());
    } else {
        lines.push(format!(
            "  {:<16} {:>6} {:>9} {:>6} {:>11} {:>11} {:>11}",
            "Rep", "Sat", "Proposals", "Sales", "Appt→Prop%", "Prop→Sale%", "Appt→Sale%"
        ));
        for (rep, m) in &dash.rep_metrics {
            lines.push(format!(
                "  {:<16} {:>6} {:>9} {:>6} {:>11} {:>11} {:>11}",
                rep,
                m.appointments_sat,
                m.proposals_issued,
                m.sales_closed,
                round_to(m.appointment_to_proposal_pct, 1),
                round_to(m.proposal_to_sale_pct, 1),
                round_to(m.appointment_to_sale_pct, 1)
            ));
        }
    }
    lines.push(String::new());

    section(&mut lines, "Alerts / Flags");
    for alert in &dash.alerts {
        lines.push(format!("{} {}", severity_tag(alert.severity), alert.message));
    }
    lines.push(String::new());

    section(&mut lines, "Rolling 4-Week Trends");
    if dash.trends.is_empty() {
        lines.push("(no data)".to_string());
    }
    for series in &dash.trends {
        for point in &series.points {
            lines.push(format!("  week {:>2}: {}", point.week.get(), point.value));
        }
        lines.push(format!("{} (last {} weeks)", series.label, series.window_weeks));
    }

    lines.join("\n")
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("=".repeat(title.chars().count()));
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Ok => "[ok]",
        Severity::Warn => "[warn]",
        Severity::Error => "[error]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{recompute, Rejection};
    use crate::forms::FormKind;
    use crate::store::DataStore;
    use crate::sync::{SheetSyncStatus, NOT_CONNECTED_NOTICE};
    use sd_common::{SalesRecord, Sector, Week};
    use sd_config::DashboardConfig;

    #[test]
    fn empty_dashboard_renders_sections() {
        let store = DataStore::new();
        let dash = recompute(&store, &DashboardConfig::default());
        let text = render_text(&DashboardResponse::new(
            &store,
            dash,
            SheetSyncStatus::NotConnected,
        ));
        assert!(text.contains(NOT_CONNECTED_NOTICE));
        assert!(text.contains("Calculated Metrics"));
        assert!(text.contains("(no lead generation data)"));
        assert!(text.contains("[error] Domestic Appointments: 0"));
        assert!(text.contains("Rolling 4-Week Trends"));
        assert!(!text.contains("(last 4 weeks)"));
    }

    #[test]
    fn populated_dashboard_lists_trends_and_rejections() {
        let mut store = DataStore::new();
        store.append_sales(SalesRecord {
            week: Week::new(7).unwrap(),
            date_range: String::new(),
            sector: Sector::Domestic,
            rep: "Bob".into(),
            appointments_sat: 5,
            proposals_issued: 2,
            sales_closed: 0,
        });
        let dash = recompute(&store, &DashboardConfig::default());
        let resp = DashboardResponse::new(
            &store,
            dash,
            SheetSyncStatus::Connected { spreadsheet: None },
        )
        .with_rejections(vec![Rejection {
            form: FormKind::LeadGen,
            index: 0,
            reason: "week 60 is outside 1..=52".into(),
        }]);
        let text = render_text(&resp);

        assert!(!text.contains(NOT_CONNECTED_NOTICE));
        assert!(text.contains("rejected lead generation input #0"));
        assert!(text.contains("[warn] Bob has fewer than 8 appointments (5)"));
        assert!(text.contains("[warn] Bob Appointment → Sale below 20% (0.00)"));
        assert!(text.contains("  week  7: 5"));
        assert!(text.contains("Appointments Sat (last 4 weeks)"));
        assert!(text.contains("Bob"));
    }

    #[test]
    fn sections_are_underlined_in_order() {
        let store = DataStore::new();
        let dash = recompute(&store, &DashboardConfig::default());
        let text = render_text(&DashboardResponse::new(
            &store,
            dash,
            SheetSyncStatus::Connected { spreadsheet: None },
        ));
        let lines: Vec<&str> = text.lines().collect();
        let at = |title: &str| lines.iter().position(|l| *l == title).unwrap();

        let (metrics, alerts, trends) = (
            at("Calculated Metrics"),
            at("Alerts / Flags"),
            at("Rolling 4-Week Trends"),
        );
        assert!(metrics < alerts && alerts < trends);
        assert_eq!(lines[alerts + 1], "==============");
        assert_eq!(lines.last(), Some(&"(no data)"));
    }
}
