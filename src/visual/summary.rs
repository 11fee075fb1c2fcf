use std::fmt::Write;

use crate::optim::Comparison;

/// 对比结果的纯文本汇总表：变体、首轮代价、末轮代价、发散轮次
pub fn summary_table(comparison: &Comparison) -> String {
    let mut table = String::new();
    let _ = writeln!(
        table,
        "{:<16}{:>16}{:>16}{:>14}",
        "Variant", "First cost", "Final cost", "Diverged at"
    );
    for entry in &comparison.runs {
        let history = &entry.run.cost_history;
        let diverged = history
            .first_non_finite()
            .map_or_else(|| "-".to_string(), |epoch| epoch.to_string());
        let _ = writeln!(
            table,
            "{:<16}{:>16}{:>16}{:>14}",
            entry.label(),
            format_cost(history.first()),
            format_cost(history.last()),
            diverged
        );
    }
    table
}

fn format_cost(cost: Option<f32>) -> String {
    match cost {
        Some(c) if c.is_finite() => format!("{:.6e}", c),
        Some(c) => c.to_string(),
        None => "-".to_string(),
    }
}
