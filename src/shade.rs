//! Perceptual shade ramps.
//!
//! A [`Ramp`] chains two-color [`Blend`]s interpolated in the CIE
//! L\*C\*h\*_ab color space, which spreads steps far more evenly to the eye
//! than naive per-channel interpolation.  [`shade_steps`] builds the ramp
//! black → input color → white and samples it, which is how the "generate N
//! shades of this color" tools get their swatches.

use std::f64::consts::PI;

use rgb::RGB8;
use serde::{Deserialize, Serialize};

use crate::color::{parse_color, to_hex, ColorParseError};

/// A continuous run of colors parametrized by reals in \[0, 1\].
pub trait ColorRamp {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn color_at(&self, t: f64) -> RGB8;

    /// An iterator yielding a uniform sampling of `n` positions between
    /// `a` and `b` (bounds included) together with their colors.
    fn samples(self, a: f64, b: f64, n: usize) -> Samples<Self>
    where
        Self: Sized,
    {
        if n == 0 {
            // Empty iterator: i > j
            Samples { ramp: self, a, b, flast: 0., last: 0, i: 1, j: 0 }
        } else {
            Samples { ramp: self, a, b, flast: (n - 1) as f64, last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// Iterator over uniform `(position, color)` samples of a ramp.
pub struct Samples<R> {
    ramp: R,
    a: f64,
    b: f64,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R: ColorRamp> Samples<R> {
    /// Position and color of sample `k` (assuming `k` ∈ `0 ..= self.last`).
    fn at(&self, k: usize) -> (f64, RGB8) {
        if k == 0 {
            (self.a, self.ramp.color_at(0.))
        } else if k == self.last {
            (self.b, self.ramp.color_at(1.))
        } else {
            let t = k as f64 / self.flast;
            (self.a + t * (self.b - self.a), self.ramp.color_at(t))
        }
    }
}

impl<R: ColorRamp> Iterator for Samples<R> {
    type Item = (f64, RGB8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.at(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R: ColorRamp> ExactSizeIterator for Samples<R> {
    fn len(&self) -> usize {
        self.j + 1 - self.i
    }
}

impl<R: ColorRamp> DoubleEndedIterator for Samples<R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.at(self.j);
            if self.j == 0 {
                self.i = 1;
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// A color in the CIE L*C*h*_ab space (L*a*b* in polar coordinates),
/// derived from 8-bit sRGB channels.
#[derive(Clone, Copy)]
struct Lch {
    l: f64,
    c: f64,
    /// Hue in radians, in 0. to 2π.
    h: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    fn from_rgb(c: RGB8) -> Lch {
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let (r, g, b) = (c.r as f64, c.g as f64, c.b as f64);
        let xr = 0.4522795 * r + 0.3993744 * g + 0.1483460 * b;
        let yr = 0.2225105 * r + 0.7168863 * g + 0.0606032 * b;
        let zr = 0.0168820 * r + 0.1176865 * g + 0.8654315 * b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = {
            let h = b.atan2(a);
            if h < 0. { h + TWO_PI } else { h }
        };
        Lch { l, c: a.hypot(b), h }
    }

    fn to_rgb(self) -> RGB8 {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b = self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932 * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906 * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        // Out-of-gamut results are clamped before 8-bit encoding
        let channel = |v: f64| v.round().clamp(0., 255.) as u8;
        RGB8 { r: channel(r), g: channel(g), b: channel(b) }
    }
}

/// Interpolation between two colors, following the shortest hue arc.
pub struct Blend {
    c0: Lch,
    dc: Lch, // last minus first color
}

impl Blend {
    pub fn new(c0: RGB8, c1: RGB8) -> Blend {
        let lch0 = Lch::from_rgb(c0);
        let lch1 = Lch::from_rgb(c1);
        let (h0, h1) = (lch0.h, lch1.h);
        let dh = {
            if h1 > h0 && h1 - h0 > PI {
                h1 - (h0 + TWO_PI)
            } else if h1 < h0 && h0 - h1 > PI {
                h1 + TWO_PI - h0
            } else {
                h1 - h0
            }
        };
        Blend { c0: lch0, dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c, h: dh } }
    }

    /// Color at `t` ∈ \[0., 1.\], without checking the bound.
    #[inline]
    fn at_unchecked(&self, t: f64) -> RGB8 {
        Lch {
            l: self.c0.l + t * self.dc.l,
            c: self.c0.c + t * self.dc.c,
            h: self.c0.h + t * self.dc.h,
        }
        .to_rgb()
    }
}

impl ColorRamp for Blend {
    fn color_at(&self, t: f64) -> RGB8 {
        self.at_unchecked(t.clamp(0., 1.))
    }
}

/// A piecewise ramp running through an ordered list of colors.
pub struct Ramp {
    blends: Vec<Blend>,
}

impl Ramp {
    /// Chain blends through `colors`, in order.
    ///
    /// # Panics
    /// If fewer than two colors are given.
    pub fn through(colors: &[RGB8]) -> Ramp {
        assert!(colors.len() >= 2, "a ramp needs at least two colors");
        Ramp { blends: colors.windows(2).map(|w| Blend::new(w[0], w[1])).collect() }
    }
}

impl ColorRamp for Ramp {
    fn color_at(&self, t: f64) -> RGB8 {
        let n = self.blends.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n {
            self.blends[i].at_unchecked(tn.fract())
        } else {
            self.blends[n - 1].at_unchecked(1.)
        }
    }
}

/// One generated shade: its hex encoding and its percentage position along
/// the dark-to-light ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shade {
    pub hex: String,
    pub weight: u8,
}

/// `count` shades of `base`, spanning near-black to near-white through the
/// color itself.  Endpoints are excluded: the first shade is already a
/// visible tint of black, the last one short of pure white.
pub fn shade_steps_of(base: RGB8, count: usize) -> Vec<Shade> {
    let black = RGB8 { r: 0, g: 0, b: 0 };
    let white = RGB8 { r: 255, g: 255, b: 255 };
    let ramp = Ramp::through(&[black, base, white]);
    (0..count)
        .map(|i| {
            let t = (i + 1) as f64 / (count + 1) as f64;
            Shade { hex: to_hex(ramp.color_at(t)), weight: (t * 100.).round() as u8 }
        })
        .collect()
}

/// Like [`shade_steps_of`], but from any supported color notation.
///
/// Unparseable input is reported as a [`ColorParseError`] for the caller to
/// surface as a validation failure.
pub fn shade_steps(input: &str, count: usize) -> Result<Vec<Shade>, ColorParseError> {
    Ok(shade_steps_of(parse_color(input)?, count))
}
