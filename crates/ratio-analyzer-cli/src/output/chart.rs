use colored::{ColoredString, Colorize};
use serde_json::Value;

use ratio_analyzer_core::benchmark::{BenchmarkStatus, ChartBar};

const BAR_CELL: &str = "█";

/// Render company-vs-industry bars, coloured by benchmark status.
pub fn print_chart(bars: &[Value]) {
    let bars: Vec<ChartBar> = bars
        .iter()
        .filter_map(|b| serde_json::from_value(b.clone()).ok())
        .collect();
    if bars.is_empty() {
        return;
    }

    println!("\nIndustry comparison");
    for bar in &bars {
        let sign = if bar.company_negative { "-" } else { "" };
        println!("{}", bar.label.bold());
        println!(
            "  company  {}{} {}",
            sign,
            paint(&BAR_CELL.repeat(bar.company_len), bar.status),
            bar.company_display
        );
        println!(
            "  industry {} {}",
            BAR_CELL.repeat(bar.industry_len).dimmed(),
            bar.industry_display
        );
    }
}

fn paint(text: &str, status: BenchmarkStatus) -> ColoredString {
    match status {
        BenchmarkStatus::Good => text.green(),
        BenchmarkStatus::Caution => text.yellow(),
        BenchmarkStatus::Poor => text.red(),
    }
}
