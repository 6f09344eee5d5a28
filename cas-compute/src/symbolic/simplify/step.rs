/// A step taken while simplifying an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `a + (b + c) = a + b + c`
    FlattenSum,

    /// `a*(b*c) = a*b*c`
    FlattenProduct,

    /// `a + 0 = a`, `a + a = 2a`, `2 + 3 = 5`
    CombineLikeTerms,

    /// `sin(x)^2 + cos(x)^2 = 1`
    PythagoreanIdentity,

    /// `0*a = 0`
    MultiplyZero,

    /// `1*a = a`, `2*3 = 6`, `3/12 = 1/4`
    CombineNumericFactors,

    /// `a^b*a^c = a^(b+c)`, `sqrt(2)*sqrt(3) = sqrt(6)`
    CombineLikeFactors,

    /// `2*(a + b) = 2a + 2b`
    DistributeCoefficient,

    /// `a^0 = 1`, `a^1 = a`, `1^a = 1`, `0^a = 0`
    PowerIdentity,

    /// `2^3 = 8`, `(1/2)^2 = 1/4`
    NumericPower,

    /// `(a^b)^c = a^(b*c)`
    PowerOfPower,

    /// `(a*b)^c = a^c*b^c`
    PowerOfProduct,

    /// `sqrt(8) = 2*sqrt(2)`, `sqrt(-4) = 2*I`
    Root,

    /// `I^2 = -1`
    ImaginaryPower,

    /// `exp(log(a)) = a`, `log(E) = 1`, `log(8, 2) = 3`
    Logarithm,

    /// `factorial(5) = 120`, `gcd(12, 18) = 6`
    IntegerFunction,

    /// `sin(pi/6) = 1/2`
    Sin,

    /// `cos(pi/3) = 1/2`
    Cos,

    /// `tan(pi/4) = 1`
    Tan,

    /// `sin(-x) = -sin(x)`, `cos(-x) = cos(x)`
    TrigSymmetry,

    /// `asin(1) = pi/2`, `cosh(0) = 1`
    InverseTrig,

    /// `(x^2 - 1)/(x - 1) = x + 1`
    CancelCommonFactors,
}
