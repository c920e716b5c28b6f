use std::ops::Mul;

/// Integer power by repeated squaring. `power(x, 0)` is 1, including for `x == 0`.
pub fn power<T>(base: T, exponent: usize) -> T
where
    T: Copy + Mul<Output = T> + From<u8>,
{
    if exponent == 0 {
        return T::from(1);
    }
    let mut x = base;
    let mut y = T::from(1);
    let mut n = exponent;
    while n > 1 {
        if n % 2 == 0 {
            x = x * x;
            n /= 2;
        } else {
            y = x * y;
            x = x * x;
            n = (n - 1) / 2;
        }
    }
    x * y
}

/// Powers `bx^i`, `by^i` for `i = 0..=degree`, built once per evaluation call.
///
/// The table lives on the caller's stack frame, so a basis object never holds
/// mutable evaluation state.
pub struct PowerTable {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PowerTable {
    pub fn new(bx: f64, by: f64, degree: usize) -> Self {
        let x = (0..=degree).map(|i| power(bx, i)).collect();
        let y = (0..=degree).map(|i| power(by, i)).collect();
        Self { x, y }
    }
    #[inline]
    pub fn x(&self, exponent: usize) -> f64 {
        self.x[exponent]
    }
    #[inline]
    pub fn y(&self, exponent: usize) -> f64 {
        self.y[exponent]
    }
    /// `d/dx (bx^n)` in local coordinates, zero for `n == 0`.
    #[inline]
    pub fn dx(&self, exponent: usize) -> f64 {
        match exponent {
            0 => 0.0,
            n => n as f64 * self.x[n - 1],
        }
    }
    #[inline]
    pub fn dy(&self, exponent: usize) -> f64 {
        match exponent {
            0 => 0.0,
            n => n as f64 * self.y[n - 1],
        }
    }
}
