//! Krüger n-series coefficients for the Gauss-Krüger projection.
//!
//! Every coefficient is a closed-form polynomial in the third flattening `n`,
//! as published by the Geospatial Information Authority of Japan for the
//! plane rectangular coordinate computations (bl2xy / xy2bl).

/// All coefficient sets needed by the forward and inverse transforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesCoefficients {
    /// Meridian arc coefficients A₀..A₅
    pub a: [f64; 6],
    /// Forward series α₁..α₅
    pub alpha: [f64; 5],
    /// Inverse series β₁..β₅
    pub beta: [f64; 5],
    /// Conformal to geodetic latitude series δ₁..δ₆
    pub delta: [f64; 6],
}

impl SeriesCoefficients {
    pub fn new(n: f64) -> Self {
        Self {
            a: meridian_coefficients(n),
            alpha: alpha_coefficients(n),
            beta: beta_coefficients(n),
            delta: delta_coefficients(n),
        }
    }
}

/// Powers n¹..n⁶; index 0 holds n⁰.
fn powers(n: f64) -> [f64; 7] {
    let mut p = [1.0; 7];
    for i in 1..7 {
        p[i] = p[i - 1] * n;
    }
    p
}

/// Meridian arc coefficients A₀..A₅ (5th order).
pub fn meridian_coefficients(n: f64) -> [f64; 6] {
    let [_, n1, n2, n3, n4, n5, _] = powers(n);
    [
        1.0 + n2 / 4.0 + n4 / 64.0,
        -3.0 / 2.0 * (n1 - n3 / 8.0 - n5 / 64.0),
        15.0 / 16.0 * (n2 - n4 / 4.0),
        -35.0 / 48.0 * (n3 - 5.0 / 16.0 * n5),
        315.0 / 512.0 * n4,
        -693.0 / 1280.0 * n5,
    ]
}

/// Forward series coefficients α₁..α₅.
pub fn alpha_coefficients(n: f64) -> [f64; 5] {
    let [_, n1, n2, n3, n4, n5, _] = powers(n);
    [
        // α₁
        n1 / 2.0 - 2.0 / 3.0 * n2 + 5.0 / 16.0 * n3 + 41.0 / 180.0 * n4 - 127.0 / 288.0 * n5,
        // α₂
        13.0 / 48.0 * n2 - 3.0 / 5.0 * n3 + 557.0 / 1440.0 * n4 + 281.0 / 630.0 * n5,
        // α₃
        61.0 / 240.0 * n3 - 103.0 / 140.0 * n4 + 15061.0 / 26880.0 * n5,
        // α₄
        49561.0 / 161280.0 * n4 - 179.0 / 168.0 * n5,
        // α₅
        34729.0 / 80640.0 * n5,
    ]
}

/// Inverse series coefficients β₁..β₅.
pub fn beta_coefficients(n: f64) -> [f64; 5] {
    let [_, n1, n2, n3, n4, n5, _] = powers(n);
    [
        // β₁
        n1 / 2.0 - 2.0 / 3.0 * n2 + 37.0 / 96.0 * n3 - 1.0 / 360.0 * n4 - 81.0 / 512.0 * n5,
        // β₂
        1.0 / 48.0 * n2 + 1.0 / 15.0 * n3 - 437.0 / 1440.0 * n4 + 46.0 / 105.0 * n5,
        // β₃
        17.0 / 480.0 * n3 - 37.0 / 840.0 * n4 - 209.0 / 4480.0 * n5,
        // β₄
        4397.0 / 161280.0 * n4 - 11.0 / 504.0 * n5,
        // β₅
        4583.0 / 161280.0 * n5,
    ]
}

/// Coefficients δ₁..δ₆ taking conformal latitude χ back to geodetic latitude φ.
pub fn delta_coefficients(n: f64) -> [f64; 6] {
    let [_, n1, n2, n3, n4, n5, n6] = powers(n);
    [
        // δ₁
        2.0 * n1 - 2.0 / 3.0 * n2 - 2.0 * n3 + 116.0 / 45.0 * n4 + 26.0 / 45.0 * n5
            - 2854.0 / 675.0 * n6,
        // δ₂
        7.0 / 3.0 * n2 - 8.0 / 5.0 * n3 - 227.0 / 45.0 * n4 + 2704.0 / 315.0 * n5
            + 2323.0 / 945.0 * n6,
        // δ₃
        56.0 / 15.0 * n3 - 136.0 / 35.0 * n4 - 1262.0 / 105.0 * n5 + 73814.0 / 2835.0 * n6,
        // δ₄
        4279.0 / 630.0 * n4 - 332.0 / 35.0 * n5 - 399572.0 / 14175.0 * n6,
        // δ₅
        4174.0 / 315.0 * n5 - 144838.0 / 6237.0 * n6,
        // δ₆
        601676.0 / 22275.0 * n6,
    ]
}
