//! Immediate Cost Burden: what the buyer must spend right away.

use crate::input::GapItem;
use serde::Serialize;

/// Status/severity flags of one gap item. Flags are independent; an item can
/// be overdue and critical at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapClassification {
    pub overdue: bool,
    pub due_now: bool,
    pub critical: bool,
}

impl GapClassification {
    pub fn any(&self) -> bool {
        self.overdue || self.due_now || self.critical
    }
}

/// Pure function: classify one gap item by status, severity and risk note
pub fn classify_gap_item(item: &GapItem) -> GapClassification {
    let status = item.status.as_deref().unwrap_or_default().to_lowercase();
    let severity = item.severity.as_deref().unwrap_or_default().trim();
    let risk_note = item.risk_note.as_deref().unwrap_or_default().to_lowercase();

    GapClassification {
        overdue: status.contains("overdue") || status.contains("past due"),
        due_now: status.contains("due now"),
        critical: severity.eq_ignore_ascii_case("critical") || risk_note.contains("critical"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IcbItem {
    pub item: String,
    pub status: Option<String>,
    pub severity: Option<String>,
    pub cost: f64,
    #[serde(flatten)]
    pub classification: GapClassification,
}

/// Per-bucket sums. Buckets overlap, so their sum may exceed the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IcbBreakdown {
    pub overdue: f64,
    pub due_now: f64,
    pub critical: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImmediateCostBurden {
    pub total: f64,
    pub items: Vec<IcbItem>,
    pub breakdown: IcbBreakdown,
}

pub fn calculate_icb(items: &[GapItem]) -> ImmediateCostBurden {
    items
        .iter()
        .filter_map(applied_item)
        .fold(ImmediateCostBurden::default(), |mut icb, applied| {
            icb.total += applied.cost;
            let flags = applied.classification;
            if flags.overdue {
                icb.breakdown.overdue += applied.cost;
            }
            if flags.due_now {
                icb.breakdown.due_now += applied.cost;
            }
            if flags.critical {
                icb.breakdown.critical += applied.cost;
            }
            icb.items.push(applied);
            icb
        })
}

fn applied_item(item: &GapItem) -> Option<IcbItem> {
    let classification = classify_gap_item(item);
    if !classification.any() {
        return None;
    }

    let cost = item.normalized_cost();
    if cost <= 0.0 {
        log::debug!("ICB: skipping '{}' with no usable cost", item.name());
        return None;
    }

    Some(IcbItem {
        item: item.name().to_string(),
        status: item.status.clone(),
        severity: item.severity.clone(),
        cost,
        classification,
    })
}
