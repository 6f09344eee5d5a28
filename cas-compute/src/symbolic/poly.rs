//! Univariate polynomials with exact rational coefficients.
//!
//! Factoring, solving, and rational function cancellation all work on [`Poly`]s. An expression is
//! converted with [`Poly::from_expr`] (polynomials) or [`together`] (quotients of polynomials),
//! and converted back with [`Poly::to_expr`].

use crate::error::MAX_EXPAND_EXPONENT;
use crate::funcs::number_theory::prime_factorization;
use crate::primitive::{int, rational};
use rug::{Integer, Rational};
use std::ops::{Add, Mul, Neg, Sub};
use super::{
    expr::{Primary, SymExpr},
    number::{with_coefficient, Number},
};

/// A polynomial in one variable. The coefficients are stored in ascending order of degree, with
/// no trailing zeros, so the zero polynomial has no coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly {
    coeffs: Vec<Rational>,
}

impl Poly {
    /// Creates a polynomial from its coefficients, in ascending order of degree.
    pub fn new(mut coeffs: Vec<Rational>) -> Self {
        while coeffs.last().is_some_and(|c| c.cmp0().is_eq()) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// A constant polynomial.
    pub fn constant(c: Rational) -> Self {
        Self::new(vec![c])
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Self::new(vec![Rational::new(), rational(1)])
    }

    /// The coefficients, in ascending order of degree.
    pub fn coeffs(&self) -> &[Rational] {
        &self.coeffs
    }

    /// The coefficient of `x^k`.
    pub fn coeff(&self, k: usize) -> Rational {
        self.coeffs.get(k).cloned().unwrap_or_default()
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The degree of the polynomial. The zero polynomial has degree zero.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// The coefficient of the highest power of `x`.
    pub fn leading(&self) -> Rational {
        self.coeffs.last().cloned().unwrap_or_default()
    }

    /// Multiplies every coefficient by `c`.
    pub fn scale(&self, c: &Rational) -> Self {
        Self::new(self.coeffs.iter().map(|a| Rational::from(a * c)).collect())
    }

    /// Raises the polynomial to a non-negative integer power.
    pub fn pow(&self, exp: u32) -> Self {
        (0..exp).fold(Self::constant(rational(1)), |acc, _| &acc * self)
    }

    /// Evaluates the polynomial at `x`, using Horner's method.
    pub fn eval(&self, x: &Rational) -> Rational {
        self.coeffs.iter()
            .rev()
            .fold(Rational::new(), |acc, c| acc * x + c)
    }

    /// Divides by `divisor`, returning the quotient and the remainder.
    ///
    /// Returns [`None`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }

        let mut remainder = self.coeffs.clone();
        let divisor_degree = divisor.degree();
        let lead = divisor.leading();
        if remainder.len() <= divisor_degree {
            return Some((Self::zero(), self.clone()));
        }

        let mut quotient = vec![Rational::new(); remainder.len() - divisor_degree];
        for i in (0..quotient.len()).rev() {
            let q = Rational::from(&remainder[i + divisor_degree] / &lead);
            for (j, d) in divisor.coeffs.iter().enumerate() {
                remainder[i + j] -= Rational::from(&q * d);
            }
            quotient[i] = q;
        }

        remainder.truncate(divisor_degree);
        Some((Self::new(quotient), Self::new(remainder)))
    }

    /// Returns the polynomial divided by its leading coefficient.
    pub fn monic(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        self.scale(&self.leading().recip())
    }

    /// The monic greatest common divisor of two polynomials.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let Some((_, remainder)) = a.div_rem(&b) else {
                break;
            };
            a = b;
            b = remainder;
        }
        a.monic()
    }

    /// Splits the polynomial into its content and primitive part, such that
    /// `self = content * primitive`, where the primitive part has integer coefficients with no
    /// common factor and a positive leading coefficient.
    pub fn content_primitive(&self) -> (Rational, Self) {
        if self.is_zero() {
            return (Rational::new(), Self::zero());
        }

        let mut denom_lcm = Integer::from(1);
        for c in &self.coeffs {
            denom_lcm.lcm_mut(c.denom());
        }
        let mut numer_gcd = Integer::new();
        for c in &self.coeffs {
            let scaled = Integer::from(c.numer() * &denom_lcm) / c.denom();
            numer_gcd.gcd_mut(&scaled);
        }

        let mut content = Rational::from((numer_gcd, denom_lcm));
        if self.leading().cmp0().is_lt() {
            content = -content;
        }
        let primitive = self.scale(&content.clone().recip());
        (content, primitive)
    }

    /// Returns the derivative of the polynomial.
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs.iter()
                .enumerate()
                .skip(1)
                .map(|(k, c)| Rational::from(c * k as u32))
                .collect()
        )
    }

    /// Converts an expression that is a polynomial in `var` with rational coefficients into a
    /// [`Poly`].
    ///
    /// Returns [`None`] if the expression is not such a polynomial.
    pub fn from_expr(expr: &SymExpr, var: &str) -> Option<Self> {
        match together(expr, var)? {
            (numer, denom) if denom.degree() == 0 => Some(numer.scale(&denom.leading().recip())),
            _ => None,
        }
    }

    /// Converts the polynomial into an expression in `var`, with terms in descending order of
    /// degree.
    pub fn to_expr(&self, var: &str) -> SymExpr {
        let terms = self.coeffs.iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| c.cmp0().is_ne())
            .map(|(k, c)| {
                let power = match k {
                    0 => SymExpr::int(1),
                    1 => SymExpr::symbol(var),
                    k => SymExpr::pow(SymExpr::symbol(var), SymExpr::int(k as u64)),
                };
                with_coefficient(Number::Rational(c.clone()), power)
            })
            .collect();
        SymExpr::Add(terms).downgrade()
    }
}

/// The largest number of candidates the rational root search will try.
const MAX_ROOT_CANDIDATES: usize = 20_000;

/// Returns the positive divisors of a non-zero integer, or [`None`] if the integer cannot be
/// factored or has too many divisors.
fn divisors(n: &Integer) -> Option<Vec<Integer>> {
    let mut divisors = vec![int(1)];
    for (prime, count) in prime_factorization(n.clone().abs())? {
        let mut next = Vec::with_capacity(divisors.len() * (count as usize + 1));
        for divisor in &divisors {
            let mut power = divisor.clone();
            next.push(power.clone());
            for _ in 0..count {
                power *= &prime;
                next.push(power.clone());
            }
        }
        if next.len() > MAX_ROOT_CANDIDATES {
            return None;
        }
        divisors = next;
    }
    Some(divisors)
}

impl Poly {
    /// The candidate rational roots given by the rational root theorem: `±p/q`, where `p` divides
    /// the constant coefficient and `q` divides the leading coefficient.
    ///
    /// The polynomial must have a non-zero constant coefficient. Returns an empty list if there
    /// are too many candidates to try.
    fn root_candidates(&self) -> Vec<Rational> {
        let (_, primitive) = self.content_primitive();
        let (Some(constant), Some(leading)) = (
            divisors(primitive.coeff(0).numer()),
            divisors(primitive.leading().numer()),
        ) else {
            return Vec::new();
        };
        if constant.len().saturating_mul(leading.len()) * 2 > MAX_ROOT_CANDIDATES {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        for p in &constant {
            for q in &leading {
                let candidate = Rational::from((p.clone(), q.clone()));
                if !candidates.contains(&candidate) {
                    candidates.push(candidate.clone());
                    candidates.push(-candidate);
                }
            }
        }
        candidates
    }

    /// Divides out every rational root, returning the roots with their multiplicities and the
    /// remaining factor, which has no rational roots.
    ///
    /// `x^3 - x^2 - 2x` -> `[(0, 1), (-1, 1), (2, 1)]` and `1`
    pub fn split_rational_roots(&self) -> (Vec<(Rational, u32)>, Self) {
        let mut roots = Vec::new();
        let zeros = self.coeffs.iter().take_while(|c| c.cmp0().is_eq()).count();
        if self.is_zero() {
            return (roots, self.clone());
        }
        if zeros > 0 {
            roots.push((Rational::new(), zeros as u32));
        }

        let mut rest = Self::new(self.coeffs[zeros..].to_vec());
        if rest.degree() == 0 {
            return (roots, rest);
        }

        for candidate in rest.root_candidates() {
            let linear = Self::new(vec![-candidate.clone(), rational(1)]);
            let mut multiplicity = 0;
            while rest.degree() > 0 && rest.eval(&candidate).cmp0().is_eq() {
                let Some((quotient, _)) = rest.div_rem(&linear) else {
                    break;
                };
                rest = quotient;
                multiplicity += 1;
            }
            if multiplicity > 0 {
                roots.push((candidate, multiplicity));
            }
            if rest.degree() == 0 {
                break;
            }
        }
        (roots, rest)
    }

    /// Splits the polynomial into square-free factors, each paired with its multiplicity, using
    /// Yun's algorithm. The factors are monic, and constants are dropped.
    ///
    /// `x^3 + x^2 = x^2 (x + 1)` -> `[(x + 1, 1), (x, 2)]`
    pub fn square_free(&self) -> Vec<(Self, u32)> {
        let mut factors = Vec::new();
        if self.degree() == 0 {
            return factors;
        }

        let derivative = self.derivative();
        let common = self.gcd(&derivative);
        let (Some((mut c, _)), Some((d, _))) = (self.div_rem(&common), derivative.div_rem(&common)) else {
            return vec![(self.monic(), 1)];
        };
        let mut d = &d - &c.derivative();

        let mut multiplicity = 1;
        while c.degree() > 0 {
            let factor = c.gcd(&d);
            let (Some((next_c, _)), Some((next_d, _))) = (c.div_rem(&factor), d.div_rem(&factor)) else {
                break;
            };
            if factor.degree() > 0 {
                factors.push((factor, multiplicity));
            }
            c = next_c;
            d = &next_d - &c.derivative();
            multiplicity += 1;
        }
        factors
    }

    /// If the polynomial is `a x^4 + b x^2 + c` and splits into two rational quadratics
    /// `x^2 - y1` and `x^2 - y2`, returns those quadratics.
    pub fn split_biquadratic(&self) -> Option<(Self, Self)> {
        let [c, b1, b, b3, a] = self.coeffs.as_slice() else {
            return None;
        };
        if b1.cmp0().is_ne() || b3.cmp0().is_ne() {
            return None;
        }

        let discriminant: Rational = Rational::from(b * b) - Rational::from(a * c) * 4;
        if discriminant.cmp0().is_lt()
            || !discriminant.numer().is_perfect_square()
            || !discriminant.denom().is_perfect_square()
        {
            return None;
        }
        let root = Rational::from((discriminant.numer().clone().sqrt(), discriminant.denom().clone().sqrt()));

        let two_a = Rational::from(a * 2);
        let y1 = Rational::from(&root - b) / &two_a;
        let y2 = -(Rational::from(b + &root) / &two_a);
        Some((
            Self::new(vec![-y1, Rational::new(), rational(1)]),
            Self::new(vec![-y2, Rational::new(), rational(1)]),
        ))
    }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Poly {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Poly::new((0..len).map(|k| self.coeff(k) + rhs.coeff(k)).collect())
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: Self) -> Poly {
        self + &-rhs
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        self.scale(&rational(-1))
    }
}

impl Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: Self) -> Poly {
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero();
        }

        let mut coeffs = vec![Rational::new(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += Rational::from(a * b);
            }
        }
        Poly::new(coeffs)
    }
}

/// Reduces a fraction of polynomials by the gcd of its numerator and denominator.
fn reduce(numer: Poly, denom: Poly) -> (Poly, Poly) {
    let gcd = numer.gcd(&denom);
    if gcd.degree() == 0 {
        return (numer, denom);
    }
    match (numer.div_rem(&gcd), denom.div_rem(&gcd)) {
        (Some((numer, _)), Some((denom, _))) => (numer, denom),
        _ => (numer, denom),
    }
}

/// Writes an expression in `var` as a single fraction `numerator / denominator` of polynomials
/// with rational coefficients.
///
/// Returns [`None`] if the expression contains anything other than `var`, rational numbers, sums,
/// products, and integer powers.
pub fn together(expr: &SymExpr, var: &str) -> Option<(Poly, Poly)> {
    let one = || Poly::constant(rational(1));
    match expr {
        SymExpr::Primary(Primary::Symbol(sym)) if sym == var => Some((Poly::x(), one())),
        SymExpr::Primary(Primary::Integer(n)) => Some((Poly::constant(Rational::from(n)), one())),
        SymExpr::Primary(_) => None,
        SymExpr::Add(terms) => terms.iter().try_fold((Poly::zero(), one()), |(n1, d1), term| {
            let (n2, d2) = together(term, var)?;
            Some(reduce(&(&n1 * &d2) + &(&n2 * &d1), &d1 * &d2))
        }),
        SymExpr::Mul(factors) => factors.iter().try_fold((one(), one()), |(n1, d1), factor| {
            let (n2, d2) = together(factor, var)?;
            Some(reduce(&n1 * &n2, &d1 * &d2))
        }),
        SymExpr::Exp(base, exp) => {
            let exp = exp.as_integer()?;
            let magnitude = exp.clone().abs().to_u32().filter(|e| *e <= MAX_EXPAND_EXPONENT)?;
            let (numer, denom) = together(base, var)?;
            if exp.is_negative() {
                if numer.is_zero() {
                    return None;
                }
                Some((denom.pow(magnitude), numer.pow(magnitude)))
            } else {
                Some((numer.pow(magnitude), denom.pow(magnitude)))
            }
        },
    }
}

/// Returns the coefficients of an expanded expression viewed as a polynomial in `var`, in
/// ascending order of degree. The coefficients may be arbitrary expressions that do not contain
/// `var`.
///
/// Returns [`None`] if `var` appears anywhere other than as `var` or `var^k` for a non-negative
/// integer `k`, or if the degree of a term exceeds [`MAX_EXPAND_EXPONENT`].
pub fn coefficients(expr: &SymExpr, var: &str) -> Option<Vec<SymExpr>> {
    let terms = match expr {
        SymExpr::Add(terms) => terms.clone(),
        expr => vec![expr.clone()],
    };

    let mut coeffs: Vec<Vec<SymExpr>> = Vec::new();
    for term in terms {
        let factors = match term {
            SymExpr::Mul(factors) => factors,
            term => vec![term],
        };

        let mut degree = 0usize;
        let mut rest = Vec::new();
        for factor in factors {
            if !factor.contains_symbol(var) {
                rest.push(factor);
                continue;
            }
            match &factor {
                SymExpr::Primary(Primary::Symbol(_)) => degree += 1,
                SymExpr::Exp(base, exp) if base.is_symbol(var) => {
                    let k = exp.as_integer()?.to_usize()?;
                    degree = degree.checked_add(k)?;
                },
                _ => return None,
            }
            if degree > MAX_EXPAND_EXPONENT as usize {
                return None;
            }
        }

        if coeffs.len() <= degree {
            coeffs.resize_with(degree + 1, Vec::new);
        }
        coeffs[degree].push(SymExpr::Mul(rest).downgrade());
    }

    Some(coeffs.into_iter().map(|terms| SymExpr::Add(terms).downgrade()).collect())
}
