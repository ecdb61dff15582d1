//! Color helpers.
//!
//! Authored colors (hex constants, HSL samples) are sRGB. Everything handed to
//! the GPU is linear; the swapchain format applies the sRGB encode on output.

/// Linear-space RGB triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Decode a `0xRRGGBB` sRGB literal into linear RGB.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
        Self::new(channel(16), channel(8), channel(0))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Hue, saturation, lightness, each in 0..1, interpreted in sRGB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Gamma-encoded RGB for this color.
    pub fn to_srgb(self) -> Rgb {
        let h = self.h.rem_euclid(1.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);
        if s == 0.0 {
            return Rgb::new(l, l, l);
        }
        let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let lo = 2.0 * l - hi;
        Rgb::new(
            hue_to_channel(lo, hi, h + 1.0 / 3.0),
            hue_to_channel(lo, hi, h),
            hue_to_channel(lo, hi, h - 1.0 / 3.0),
        )
    }

    pub fn to_linear(self) -> Rgb {
        let c = self.to_srgb();
        Rgb::new(srgb_to_linear(c.r), srgb_to_linear(c.g), srgb_to_linear(c.b))
    }
}

fn hue_to_channel(lo: f32, hi: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        lo + (hi - lo) * 6.0 * t
    } else if t < 0.5 {
        hi
    } else if t < 2.0 / 3.0 {
        lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t)
    } else {
        lo
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.077_399_38
    } else {
        (c * 0.947_867_3 + 0.052_132_7).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn pure_red_hsl_is_red() {
        let c = Hsl::new(0.0, 1.0, 0.5).to_srgb();
        assert!(close(c.r, 1.0) && close(c.g, 0.0) && close(c.b, 0.0));
    }

    #[test]
    fn zero_saturation_is_grey() {
        let c = Hsl::new(0.3, 0.0, 0.25).to_srgb();
        assert_eq!(c, Rgb::new(0.25, 0.25, 0.25));
    }

    #[test]
    fn hex_decode_hits_endpoints() {
        let red = Rgb::from_hex(0xff0000);
        assert!(close(red.r, 1.0) && red.g == 0.0 && red.b == 0.0);
        let white = Rgb::from_hex(0xffffff);
        assert!(close(white.r, 1.0) && close(white.g, 1.0) && close(white.b, 1.0));
    }

    #[test]
    fn linear_decode_darkens_midtones() {
        let mid = srgb_to_linear(0.5);
        assert!(mid > 0.2 && mid < 0.22);
    }
}
