// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host-side replay of the temperature-to-duty pipeline.
//!
//! Reads raw ADC values (one per line) from stdin and prints what the firmware would compute for
//! each: the temperature, the fan speed and the PWM action. Samples are used as-is, without the
//! moving average. Stops at end of input or at the first value outside 0..=1023.
//!
//! ```bash
//! printf '0\n454\n712\n1023\n' | cargo run --bin replay
//! ```

use std::io::{self, BufRead, Write};

use fanctrl::control::FanCurve;
use fanctrl::sensor::Calibration;

const PROMPT: &str = "Enter raw ADC value [0-1023]: ";

/// Replay one input line. Returns `false` when the line ends the session.
fn replay_line<W: Write>(
    out: &mut W,
    line: &str,
    calibration: &Calibration,
    curve: &FanCurve,
) -> io::Result<bool> {
    let raw = match line.trim().parse::<u16>() {
        Ok(raw) if raw <= 1023 => raw,
        _ => return Ok(false),
    };
    writeln!(out, "You entered: {raw}")?;

    let temperature = calibration.to_celsius(raw);
    let speed = curve.duty(temperature);

    writeln!(out, "    ADC value: {raw}")?;
    writeln!(out, "    degrees Celsius: {temperature}")?;
    writeln!(out, "    fan speed: {}%", 100 * speed as u32 / 255)?;
    if speed > 0 {
        writeln!(out, "    setting PWM to: {speed}")?;
    } else {
        writeln!(out, "    disabling PWM output")?;
    }
    Ok(true)
}

fn replay<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let calibration = Calibration::TMP35_X4;
    let curve = FanCurve::DEFAULT;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        if !replay_line(out, &line?, &calibration, &curve)? {
            break;
        }
    }

    writeln!(out)?;
    writeln!(out, "Done")
}

fn main() -> io::Result<()> {
    replay(io::stdin().lock(), &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        replay(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cold_reading_disables_output() {
        let out = run("0\n");
        assert!(out.contains("degrees Celsius: 0\n"));
        assert!(out.contains("fan speed: 0%\n"));
        assert!(out.contains("disabling PWM output\n"));
        assert!(!out.contains("setting PWM"));
    }

    #[test]
    fn warm_reading_sets_curve_duty() {
        let out = run("712\n");
        assert!(out.contains("ADC value: 712\n"));
        assert!(out.contains("degrees Celsius: 86\n"));
        assert!(out.contains("fan speed: 80%\n"));
        assert!(out.contains("setting PWM to: 205\n"));
    }

    #[test]
    fn full_scale_reading_runs_flat_out() {
        let out = run("1023\n");
        assert!(out.contains("degrees Celsius: 124\n"));
        assert!(out.contains("fan speed: 100%\n"));
        assert!(out.contains("setting PWM to: 255\n"));
    }

    #[test]
    fn out_of_range_value_ends_session() {
        let out = run("712\n1024\n0\n");
        assert_eq!(out.matches("You entered").count(), 1);
        assert!(!out.contains("disabling PWM output"));
        assert!(out.ends_with("\nDone\n"));
    }

    #[test]
    fn unparsable_value_ends_session() {
        let out = run("abc\n712\n");
        assert!(!out.contains("You entered"));
        assert_eq!(out, format!("{PROMPT}\nDone\n"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let out = run("0\n712\n");
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert!(out.ends_with("Done\n"));
    }
}
