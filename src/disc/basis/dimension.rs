/// Dimension of the space of polynomials of total degree `<= k` in `d`
/// variables, `C(k + d, d)`.
pub fn polynomial_space_dim(k: usize, d: usize) -> usize {
    let mut num = 1;
    let mut den = 1;
    for i in 1..=d {
        num *= k + i;
        den *= i;
    }
    num / den
}
