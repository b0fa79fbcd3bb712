/// Decimal places needed to show multiples of `step` exactly (capped at 4).
pub fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (0..4)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-9 * scaled.max(1.0)
        })
        .unwrap_or(4)
}

/// Format a slider value with the precision its step implies
pub fn format_value(value: f64, step: f64) -> String {
    format!("{:.*}", decimals_for_step(step), value)
}

/// Format an axis tick label compactly (e.g. 0.399, 12.5, 1.2e4)
pub fn format_axis(value: f64) -> String {
    let abs_value = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e4).contains(&abs_value) {
        format!("{:.1e}", value)
    } else if abs_value >= 100.0 {
        format!("{:.0}", value)
    } else if abs_value >= 10.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.3}", value)
    }
}
