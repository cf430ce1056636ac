//! Gravity curve.

/// Milliseconds between automatic one-row drops at a 1-based `level`.
///
/// `round(-333.54 * ln(level) + 999.98)`: 1000ms at level 1, 769ms at level 2,
/// strictly decreasing down to 1ms at level 20. From level 21 the curve goes
/// negative and is clamped to 0, which fires gravity on every tick exactly as
/// a negative delay would.
pub fn gravity_delay_ms(level: u32) -> u64 {
    debug_assert!(level >= 1, "level must be at least 1");
    let level = f64::from(level.max(1));
    let delay = (-333.54 * level.ln() + 999.98).round();
    if delay <= 0.0 {
        0
    } else {
        delay as u64
    }
}
