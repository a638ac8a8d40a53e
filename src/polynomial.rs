/// Cubic of a single interval, expressed in the offset `s = t - x0` from the interval start:
/// `a + b*s + c*s^2 + d*s^3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    x0: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Cubic {

    pub fn new(x0: f64, a: f64, b: f64, c: f64, d: f64) -> Self {
        Cubic { x0, a, b, c, d }
    }

    /// Value at `t` in Horner form.
    pub fn evaluate(&self, t: f64) -> f64 {
        let s = t - self.x0;
        self.a + s * (self.b + s * (self.c + s * self.d))
    }

    pub fn derivative(&self, t: f64) -> f64 {
        let s = t - self.x0;
        self.b + s * (2.0 * self.c + s * 3.0 * self.d)
    }

    pub fn second_derivative(&self, t: f64) -> f64 {
        let s = t - self.x0;
        2.0 * self.c + 6.0 * self.d * s
    }
}
