//! Truncated IAU 2000B nutation and Delaunay fundamental arguments.
//!
//! The chart engine needs nutation for the true obliquity of date; a
//! 13-term truncation of the IAU 2000B lunisolar series keeps both Δψ and
//! Δε within ~0.03″ of the full model, far below the engine's stated
//! precision. The Delaunay arguments are shared with the lunar longitude
//! and node series.
//!
//! Sources: IERS Conventions 2010, Tables 5.2e and 5.3b.

use std::f64::consts::TAU;

/// Arcseconds to radians.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// The five Delaunay fundamental arguments in radians.
///
/// `t` = Julian centuries of TT since J2000.0. Returns `[l, l', F, D, Ω]`:
/// Moon mean anomaly, Sun mean anomaly, Moon argument of latitude, mean
/// elongation of Moon from Sun, mean longitude of the ascending node.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485_868.249036 + 1_717_915_923.2178 * t + 31.8792 * t2 + 0.051635 * t3
        - 0.00024470 * t4)
        * AS2RAD;

    let lp = (1_287_104.79305 + 129_596_581.0481 * t - 0.5532 * t2 + 0.000136 * t3
        - 0.00001149 * t4)
        * AS2RAD;

    let f = (335_779.526232 + 1_739_527_262.8478 * t - 12.7512 * t2 - 0.001037 * t3
        + 0.00000417 * t4)
        * AS2RAD;

    let d = (1_072_260.70369 + 1_602_961_601.2090 * t - 6.3706 * t2 + 0.006593 * t3
        - 0.00003169 * t4)
        * AS2RAD;

    let om = (450_160.398036 - 6_962_890.5431 * t + 7.4722 * t2 + 0.007702 * t3
        - 0.00005939 * t4)
        * AS2RAD;

    [l, lp, f, d, om]
}

/// Leading IAU 2000B terms: `[nl, nl', nF, nD, nΩ, S, S', C, C']`,
/// amplitudes in 0.1 μas.
#[rustfmt::skip]
static TERMS: [[i64; 9]; 13] = [
    [  0,  0,  0,  0,  1, -172064161, -174666, 92052331,  9086],
    [  0,  0,  2, -2,  2,  -13170906,   -1675,  5730336, -3015],
    [  0,  0,  2,  0,  2,   -2276413,    -234,   978459,  -485],
    [  0,  0,  0,  0,  2,    2074554,     207,  -897492,   470],
    [  0,  1,  0,  0,  0,    1475877,   -3633,    73871,  -184],
    [  0,  1,  2, -2,  2,    -516821,    1226,   224386,  -677],
    [  1,  0,  0,  0,  0,     711159,      73,    -6750,     0],
    [  0,  0,  2,  0,  1,    -387298,    -367,   200728,    18],
    [  1,  0,  2,  0,  2,    -301461,     -36,   129025,   -63],
    [  0, -1,  2, -2,  2,     215829,    -494,   -95929,   299],
    [  0,  0,  2, -2,  1,     128227,     137,   -68982,    -9],
    [ -1,  0,  2,  0,  2,     123457,      11,   -53311,    32],
    [ -1,  0,  0,  2,  0,     156994,      10,    -1235,     0],
];

/// Nutation in longitude and obliquity, `(Δψ, Δε)` in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_arcsec(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);

    let mut dpsi = 0.0_f64;
    let mut deps = 0.0_f64;
    for row in &TERMS {
        let arg = row[0] as f64 * args[0]
            + row[1] as f64 * args[1]
            + row[2] as f64 * args[2]
            + row[3] as f64 * args[3]
            + row[4] as f64 * args[4];
        dpsi += (row[5] as f64 + row[6] as f64 * t) * arg.sin();
        deps += (row[7] as f64 + row[8] as f64 * t) * arg.cos();
    }

    // 0.1 μas -> arcsec
    (dpsi * 1e-7, deps * 1e-7)
}
