//! 0-100 condition score from maintenance gaps and evaluation wording.

use super::icb::classify_gap_item;
use crate::config::ConditionScoringConfig;
use crate::input::GapItem;
use serde::Serialize;

/// One adjustment applied to the starting score of 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorExplanation {
    pub factor: String,
    pub impact: f64,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConditionScore {
    pub score: u8,
    pub factors: Vec<FactorExplanation>,
}

pub fn calculate_condition_score(evaluation: Option<&str>, gap_items: &[GapItem]) -> ConditionScore {
    calculate_condition_score_with_config(evaluation, gap_items, &ConditionScoringConfig::default())
}

pub fn calculate_condition_score_with_config(
    evaluation: Option<&str>,
    gap_items: &[GapItem],
    config: &ConditionScoringConfig,
) -> ConditionScore {
    let Some(evaluation) = evaluation.filter(|text| !text.trim().is_empty()) else {
        return ConditionScore::default();
    };

    let text = evaluation.to_lowercase();
    let factors: Vec<FactorExplanation> = [
        gap_factor(gap_items, config),
        red_flag_factors(&text, config),
        positive_factor(&text, config).into_iter().collect(),
    ]
    .into_iter()
    .flatten()
    .collect();

    let raw = 100.0 + factors.iter().map(|f| f.impact).sum::<f64>();

    ConditionScore {
        score: clamp_score(raw),
        factors,
    }
}

/// Pure function: clamp to [0, 100] and round to the nearest integer
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}

fn gap_factor(gap_items: &[GapItem], config: &ConditionScoringConfig) -> Vec<FactorExplanation> {
    if gap_items.is_empty() {
        return Vec::new();
    }

    let (overdue, due_now) = gap_items
        .iter()
        .map(classify_gap_item)
        .fold((0usize, 0usize), |(overdue, due_now), flags| {
            (overdue + flags.overdue as usize, due_now + flags.due_now as usize)
        });

    let penalty = overdue as f64 * config.overdue_penalty + due_now as f64 * config.due_now_penalty;

    vec![FactorExplanation {
        factor: "Maintenance gaps".to_string(),
        impact: -penalty,
        detail: format!("{} overdue, {} due now", overdue, due_now),
    }]
}

fn red_flag_factors(text: &str, config: &ConditionScoringConfig) -> Vec<FactorExplanation> {
    matched_keywords(text, &config.red_flag_keywords)
        .map(|keyword| FactorExplanation {
            factor: "Red flag".to_string(),
            impact: -config.penalty_per_flag,
            detail: format!("Evaluation mentions \"{}\"", keyword),
        })
        .collect()
}

fn positive_factor(text: &str, config: &ConditionScoringConfig) -> Option<FactorExplanation> {
    let matched: Vec<&str> = matched_keywords(text, &config.positive_keywords).collect();
    if matched.is_empty() {
        return None;
    }

    let bonus = (matched.len() as f64 * config.bonus_per_keyword).min(config.bonus_cap);
    Some(FactorExplanation {
        factor: "Positive indicators".to_string(),
        impact: bonus,
        detail: matched.join(", "),
    })
}

/// Each keyword counts once, however often it appears.
fn matched_keywords<'a>(
    lowercase_text: &'a str,
    keywords: &'a [String],
) -> impl Iterator<Item = &'a str> + 'a {
    keywords
        .iter()
        .map(String::as_str)
        .filter(move |keyword| lowercase_text.contains(&keyword.to_lowercase()))
}
