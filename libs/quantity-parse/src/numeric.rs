//! Interpretation of numeric literal text.
//!
//! The tokenizer only delimits numeric literals; turning the text into a
//! value happens here, shared by both parser implementations. Sub-grammars:
//! plain decimal and scientific (standard float parsing), rational `a/b`,
//! mixed `w a/b`, colon time `h:m[:s]` (seconds), and complex `[re][±im]i`.
//!
//! Complex literals keep only the real part — 1.0 when it is absent. That is
//! the behavior the legacy grammar shipped with and callers depend on; the
//! imaginary contribution is dropped, not rounded in.

/// Interpret a numeric literal. `None` means the text is malformed; the
/// caller owns turning that into a positioned syntax error.
pub(crate) fn interpret(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }

    if t.ends_with('i') {
        return interpret_complex(&t[..t.len() - 1]);
    }
    if t.contains(':') {
        return interpret_time(t);
    }
    if t.contains('/') {
        return interpret_rational(t);
    }
    t.parse::<f64>().ok()
}

fn interpret_complex(body: &str) -> Option<f64> {
    // Split real from imaginary at the last sign past position zero (a
    // leading sign belongs to the real part).
    if let Some(split) = body.rfind(['+', '-']).filter(|&i| i > 0) {
        return body[..split].parse::<f64>().ok();
    }
    // No real part ("5i", "i"): only the real contribution is honored,
    // and an absent real part reads as 1.0.
    Some(1.0)
}

fn interpret_time(t: &str) -> Option<f64> {
    let parts: Vec<&str> = t.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }
    let mut seconds = 0.0;
    for (i, part) in parts.iter().enumerate() {
        let value = part.parse::<f64>().ok()?;
        if value < 0.0 {
            return None;
        }
        seconds += value * [3600.0, 60.0, 1.0][i];
    }
    Some(seconds)
}

fn interpret_rational(t: &str) -> Option<f64> {
    let words: Vec<&str> = t.split_whitespace().collect();
    let (whole, frac) = match words.as_slice() {
        [frac] => (0.0, *frac),
        [whole, frac] => (whole.parse::<f64>().ok()?, *frac),
        _ => return None,
    };
    let (numer, denom) = frac.split_once('/')?;
    let numer = numer.parse::<f64>().ok()?;
    let denom = denom.parse::<f64>().ok()?;
    if denom == 0.0 {
        return None;
    }
    let frac = numer / denom;
    Some(if whole < 0.0 { whole - frac } else { whole + frac })
}
