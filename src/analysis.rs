//! Statistics over symbol sequences.
//!
//! Used by the `stats` command to characterize a sequence: a ciphertext
//! should look close to uniform over the four symbols, plaintext encodings
//! usually do not.

use crate::symbol::{Symbol, SymbolString, ALPHABET};

/// Statistics for one sequence
#[derive(Debug, Clone)]
pub struct SequenceReport {
    pub length: usize,
    pub counts: [usize; ALPHABET],
    /// G+C fraction of the sequence (0..=1)
    pub gc_content: f64,
    /// Shannon entropy in bits per symbol (max 2.0)
    pub entropy: f64,
    /// Chi-square statistic against the uniform distribution (df = 3)
    pub chi_square: f64,
    /// Approximate p-value for the chi-square statistic
    pub chi_p_value: f64,
    /// Length of the longest single-symbol run
    pub longest_run: usize,
    /// Serial correlation of adjacent symbol indices
    pub serial_correlation: f64,
}

/// Compute the full report for a sequence
pub fn analyze(sequence: &SymbolString) -> SequenceReport {
    let counts = sequence.base_counts();
    let length = sequence.len();
    let chi = chi_square(&counts, length);

    SequenceReport {
        length,
        counts,
        gc_content: gc_content(&counts, length),
        entropy: shannon_entropy(&counts, length),
        chi_square: chi,
        chi_p_value: chi_square_p_value(chi, (ALPHABET - 1) as f64),
        longest_run: longest_run(sequence),
        serial_correlation: serial_correlation(sequence),
    }
}

fn gc_content(counts: &[usize; ALPHABET], length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    let gc = counts[Symbol::G.index() as usize] + counts[Symbol::C.index() as usize];
    gc as f64 / length as f64
}

/// Shannon entropy in bits per symbol
fn shannon_entropy(counts: &[usize; ALPHABET], length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }

    let len = length as f64;
    let mut entropy = 0.0;
    for &count in counts {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * p.log2();
        }
    }
    entropy
}

/// Chi-square statistic for uniformity over the alphabet
fn chi_square(counts: &[usize; ALPHABET], length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }

    let expected = length as f64 / ALPHABET as f64;
    counts
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Approximate p-value via the Wilson-Hilferty normal approximation
fn chi_square_p_value(chi_square: f64, df: f64) -> f64 {
    if chi_square <= 0.0 {
        return 1.0;
    }
    let z = ((2.0 * chi_square).sqrt() - (2.0 * df - 1.0).sqrt()) / std::f64::consts::SQRT_2;
    0.5 * (1.0 - erf(z / std::f64::consts::SQRT_2))
}

/// Error function approximation (Abramowitz & Stegun 7.1.26)
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

fn longest_run(sequence: &SymbolString) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<Symbol> = None;

    for &symbol in sequence.iter() {
        if previous == Some(symbol) {
            current += 1;
        } else {
            current = 1;
            previous = Some(symbol);
        }
        longest = longest.max(current);
    }

    longest
}

/// Correlation between symbol indices at adjacent positions
fn serial_correlation(sequence: &SymbolString) -> f64 {
    let n = sequence.len();
    if n < 2 {
        return 0.0;
    }

    let values: Vec<f64> = sequence.iter().map(|s| s.index() as f64).collect();
    let mean = values.iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for i in 0..n {
        let d = values[i] - mean;
        denominator += d * d;
        if i + 1 < n {
            numerator += d * (values[i + 1] - mean);
        }
    }

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

impl SequenceReport {
    /// Render the report in the text format the `stats` command prints
    pub fn to_text(&self, source: &str) -> String {
        let mut out = String::new();

        out.push_str("Sequence Analysis\n");
        out.push_str("=================\n\n");
        out.push_str(&format!("Source: {}\n", source));
        out.push_str(&format!("Length: {} symbols\n\n", self.length));

        out.push_str("Base Composition\n");
        out.push_str("----------------\n");
        for symbol in Symbol::ALL {
            let count = self.counts[symbol.index() as usize];
            let pct = if self.length > 0 {
                count as f64 / self.length as f64 * 100.0
            } else {
                0.0
            };
            out.push_str(&format!("  {}: {:>8} ({:.1}%)\n", symbol, count, pct));
        }
        out.push_str(&format!("  GC content: {:.1}%\n\n", self.gc_content * 100.0));

        out.push_str("Uniformity\n");
        out.push_str("----------\n");
        out.push_str(&format!(
            "  Shannon entropy: {:.4} bits/symbol ({:.1}% of max)\n",
            self.entropy,
            self.entropy / 2.0 * 100.0
        ));
        out.push_str(&format!(
            "  Interpretation: {}\n",
            interpret_entropy(self.entropy)
        ));
        out.push_str(&format!(
            "  Chi-square: {:.2} (df=3), p-value {}\n",
            self.chi_square,
            format_p_value(self.chi_p_value)
        ));
        out.push_str(&format!(
            "  Longest run: {} symbols\n",
            self.longest_run
        ));
        out.push_str(&format!(
            "  Serial correlation: {:+.4}\n",
            self.serial_correlation
        ));

        out
    }
}

fn interpret_entropy(entropy: f64) -> &'static str {
    if entropy >= 1.98 {
        "Excellent - appears random/encrypted"
    } else if entropy >= 1.9 {
        "Good - high randomness"
    } else if entropy >= 1.5 {
        "Moderate - some structure present"
    } else {
        "Low - highly structured data"
    }
}

fn format_p_value(p: f64) -> String {
    if p < 0.0001 {
        "<0.0001".to_string()
    } else {
        format!("{:.4}", p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sequence_stats() {
        let sequence: SymbolString = "ACGT".repeat(100).parse().unwrap();
        let report = analyze(&sequence);

        assert_eq!(report.length, 400);
        assert_eq!(report.counts, [100, 100, 100, 100]);
        assert!((report.entropy - 2.0).abs() < 1e-9);
        assert!((report.gc_content - 0.5).abs() < 1e-9);
        assert!(report.chi_square.abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_sequence_stats() {
        let sequence: SymbolString = "AAAAAAAA".parse().unwrap();
        let report = analyze(&sequence);

        assert_eq!(report.entropy, 0.0);
        assert_eq!(report.gc_content, 0.0);
        assert_eq!(report.longest_run, 8);
        assert!(report.chi_square > 0.0);
        assert!(report.chi_p_value < 0.01);
    }

    #[test]
    fn test_empty_sequence() {
        let report = analyze(&SymbolString::new());
        assert_eq!(report.length, 0);
        assert_eq!(report.entropy, 0.0);
        assert_eq!(report.longest_run, 0);
        assert_eq!(report.serial_correlation, 0.0);
    }

    #[test]
    fn test_longest_run() {
        let sequence: SymbolString = "ACGGGTTA".parse().unwrap();
        assert_eq!(analyze(&sequence).longest_run, 3);
    }

    #[test]
    fn test_serial_correlation_of_constant_is_zero() {
        let sequence: SymbolString = "CCCCCC".parse().unwrap();
        assert_eq!(analyze(&sequence).serial_correlation, 0.0);
    }

    #[test]
    fn test_ciphertext_looks_uniform() {
        // Encrypted output over a reasonable length should score close
        // to maximal entropy
        let ciphertext =
            crate::cipher::encrypt(&[0u8; 2000], b"some key material").unwrap();
        let report = analyze(&ciphertext);
        assert!(report.entropy > 1.9, "entropy was {}", report.entropy);
    }

    #[test]
    fn test_report_renders() {
        let sequence: SymbolString = "GATTACA".parse().unwrap();
        let text = analyze(&sequence).to_text("test");
        assert!(text.contains("Length: 7 symbols"));
        assert!(text.contains("GC content"));
    }
}
