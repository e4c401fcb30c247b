//! Lowest-terms reduction for plain-text fraction notation.

/// A transient numerator/denominator pair pulled out of a regex match.
/// Never persisted; only the formatted `\frac{}{}` survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Reduce to lowest terms. Sign passes through untouched. A zero
    /// denominator is returned unchanged; the caller decides whether to
    /// record a loss for it.
    pub fn simplify(self) -> Self {
        if self.denominator == 0 {
            return self;
        }
        let g = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());
        if g <= 1 {
            return self;
        }
        Self {
            numerator: self.numerator / g as i64,
            denominator: self.denominator / g as i64,
        }
    }
}

/// Iterative Euclidean algorithm.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_of_coprime_is_one() {
        assert_eq!(gcd(9, 28), 1);
    }

    #[test]
    fn gcd_handles_zero_operands() {
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
    }

    #[test]
    fn simplify_reduces_to_lowest_terms() {
        assert_eq!(Fraction::new(2, 4).simplify(), Fraction::new(1, 2));
        assert_eq!(Fraction::new(12, 18).simplify(), Fraction::new(2, 3));
    }

    #[test]
    fn simplify_leaves_lowest_terms_alone() {
        assert_eq!(Fraction::new(3, 7).simplify(), Fraction::new(3, 7));
    }

    #[test]
    fn simplify_result_is_in_lowest_terms() {
        for (n, d) in [(2i64, 4i64), (10, 15), (100, 250), (7, 7), (9, 3)] {
            let reduced = Fraction::new(n, d).simplify();
            assert_eq!(
                gcd(reduced.numerator.unsigned_abs(), reduced.denominator.unsigned_abs()),
                1,
                "{}/{} reduced to {}/{}",
                n,
                d,
                reduced.numerator,
                reduced.denominator
            );
        }
    }

    #[test]
    fn simplify_passes_sign_through() {
        assert_eq!(Fraction::new(-2, 4).simplify(), Fraction::new(-1, 2));
    }

    #[test]
    fn zero_denominator_is_returned_unchanged() {
        assert_eq!(Fraction::new(3, 0).simplify(), Fraction::new(3, 0));
    }
}
