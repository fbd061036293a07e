//! Neon ASCII banner: the owner's name in figlet with a cyan-to-orange
//! gradient, matching the site palette.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Neon Cyan (#00ffff).
const NEON_CYAN: (u8, u8, u8) = (0x00, 0xff, 0xff);
/// Sunset Orange (#ff7730).
const SUNSET_ORANGE: (u8, u8, u8) = (0xff, 0x77, 0x30);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: `name` in figlet ASCII with a gradient from
/// Neon Cyan to Sunset Orange. Falls back to a plain line when the name
/// cannot be rendered as ASCII art.
pub fn print_welcome(name: &str) {
    let mut out = stdout();
    let font = FIGfont::standard().expect("figlet standard font");
    let Some(figure) = font.convert(name) else {
        println!("{}", name);
        return;
    };
    let art = figure.to_string();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(NEON_CYAN, SUNSET_ORANGE, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(NEON_CYAN, SUNSET_ORANGE, 0.0), NEON_CYAN);
        assert_eq!(lerp_rgb(NEON_CYAN, SUNSET_ORANGE, 1.0), SUNSET_ORANGE);
    }
}
